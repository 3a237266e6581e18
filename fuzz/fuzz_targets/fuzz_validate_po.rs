//! Fuzz target: purchase-order validation over arbitrary JSON.
//!
//! Verifies that the shape walker and the typed construction never
//! panic, whatever document a caller submits. Errors are expected and
//! fine; every reported issue must carry a usable message.

#![no_main]

use libfuzzer_sys::fuzz_target;
use relay_core::PurchaseOrder;

fuzz_target!(|data: &[u8]| {
    let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    match PurchaseOrder::from_document(&document) {
        Ok(order) => {
            // A valid document must survive re-serialization.
            let _ = serde_json::to_value(&order)
                .expect("validated order must serialize");
        }
        Err(err) => {
            let _ = err.to_string();
        }
    }
});
