//! Document model for the partner relay.
//!
//! Defines the purchase-order tree exchanged with the Fareva partner
//! and the structural validation that gates forwarding: every required
//! field of every nested record must be present and type-correct, and
//! a failed document reports every offending field path at once.
//!
//! Load plans intentionally have no model here; they are schema-less
//! and relayed as raw JSON.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod document;
pub mod error;
pub mod examples;
pub mod validate;

pub use document::{
    Address, AddressedParty, AvpEntry, Buyer, Contact, DecimalQuantity, LineDates, LineItem,
    LineLogistics, MonetaryAmount, NetPrice, OrderLogistics, PartyRef, PurchaseOrder, Quantity,
    RequestedDate, ScheduleDates, ScheduleLine, ScheduleLogistics, TradeItemRef,
};
pub use error::{FieldIssue, IssueKind, ValidationError};
