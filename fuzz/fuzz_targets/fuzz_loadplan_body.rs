//! Fuzz target: JSON parsing of load-plan bodies.
//!
//! Load plans are relayed without a schema, so the only inbound parse
//! step is serde_json. Verifies that arbitrary byte sequences never
//! cause panics or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; we only care that this never panics.
    let _ = serde_json::from_slice::<serde_json::Value>(data);
});
