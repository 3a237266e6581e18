//! HTTP relay gateway for partner document exchange.
//!
//! Accepts purchase-order and load-plan submissions over HTTP,
//! validates purchase orders against the document model, and forwards
//! each accepted body to its downstream partner API.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
pub mod state;
