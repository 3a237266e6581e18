//! Structural validation of untyped documents against the purchase
//! order schema.
//!
//! serde alone rejects a malformed document at the first bad field, so
//! the validator first walks a declarative shape table and records
//! every missing or mismatched field path, then deserializes into the
//! typed tree. The shape table and the derives in [`crate::document`]
//! describe the same tree.

use chrono::NaiveDate;
use serde_json::Value;

use crate::document::PurchaseOrder;
use crate::error::{FieldIssue, IssueKind, ValidationError};

/// The declared JSON shape of one node in the document tree.
enum Shape {
    String,
    Integer,
    Decimal,
    Date,
    Object(&'static [Field]),
    Array(&'static Shape),
}

/// One field of an object shape.
struct Field {
    name: &'static str,
    required: bool,
    shape: &'static Shape,
}

impl Field {
    const fn required(name: &'static str, shape: &'static Shape) -> Self {
        Self { name, required: true, shape }
    }

    const fn optional(name: &'static str, shape: &'static Shape) -> Self {
        Self { name, required: false, shape }
    }
}

// ── Shape table ──────────────────────────────────────────────────────────────
//
// Field names below are the wire names; the table mirrors the serde
// derives in `document.rs` one-to-one.

const ADDRESS: Shape = Shape::Object(&[
    Field::required("name", &Shape::String),
    Field::required("city", &Shape::String),
    Field::required("countryCode", &Shape::String),
    Field::required("postalCode", &Shape::String),
    Field::required("streetAddressOne", &Shape::String),
    Field::required("languageOfThePartyCode", &Shape::String),
]);

const ADDRESSED_PARTY: Shape = Shape::Object(&[
    Field::required("primaryId", &Shape::String),
    Field::required("address", &ADDRESS),
]);

const PARTY_REF: Shape = Shape::Object(&[Field::required("primaryId", &Shape::String)]);

const CONTACT: Shape = Shape::Object(&[
    Field::required("contactTypeCode", &Shape::String),
    Field::required("departmentName", &Shape::String),
]);

const BUYER: Shape = Shape::Object(&[
    Field::required("primaryId", &Shape::String),
    Field::required("contact", &Shape::Array(&CONTACT)),
]);

const ORDER_LOGISTICS: Shape = Shape::Object(&[
    Field::required("shipTo", &ADDRESSED_PARTY),
    Field::required("shipFrom", &PARTY_REF),
]);

const MONETARY_AMOUNT: Shape = Shape::Object(&[
    Field::required("value", &Shape::Integer),
    Field::required("currencyCode", &Shape::String),
]);

const NET_PRICE: Shape = Shape::Object(&[Field::required("value", &Shape::Integer)]);

const QUANTITY: Shape = Shape::Object(&[
    Field::required("value", &Shape::Integer),
    Field::required("measurementUnitCode", &Shape::String),
]);

const DECIMAL_QUANTITY: Shape = Shape::Object(&[
    Field::required("value", &Shape::Decimal),
    Field::required("measurementUnitCode", &Shape::String),
]);

const DATED: Shape = Shape::Object(&[Field::required("date", &Shape::Date)]);

const LINE_DATES: Shape = Shape::Object(&[
    Field::required("requestedShipDateTime", &DATED),
    Field::required("requestedDeliveryDateTime", &DATED),
]);

const LINE_LOGISTICS: Shape = Shape::Object(&[
    Field::required("shipTo", &PARTY_REF),
    Field::required("shipFrom", &PARTY_REF),
    Field::required("orderLogisticalDateInformation", &LINE_DATES),
]);

const SCHEDULE_DATES: Shape =
    Shape::Object(&[Field::optional("requestedDeliveryDateTime", &DATED)]);

const SCHEDULE_LOGISTICS: Shape =
    Shape::Object(&[Field::optional("orderLogisticalDateInformation", &SCHEDULE_DATES)]);

const SCHEDULE_LINE: Shape = Shape::Object(&[
    Field::required("scheduleNumber", &Shape::String),
    Field::required("requestedQuantity", &DECIMAL_QUANTITY),
    Field::required("orderLogisticalInformation", &SCHEDULE_LOGISTICS),
]);

const LINE_ITEM: Shape = Shape::Object(&[
    Field::required("lineItemNumber", &Shape::Integer),
    Field::required("itemFamily", &Shape::String),
    Field::required("lineStatus", &Shape::String),
    Field::optional("lineItemDetail", &Shape::Array(&SCHEDULE_LINE)),
    Field::required("netPrice", &NET_PRICE),
    Field::required("requestedQuantity", &QUANTITY),
    Field::required("transactionalTradeItem", &PARTY_REF),
    Field::required("orderLogisticalInformation", &LINE_LOGISTICS),
    Field::optional("totalReceivedQuantity", &DECIMAL_QUANTITY),
]);

const AVP_ENTRY: Shape = Shape::Object(&[
    Field::required("name", &Shape::String),
    Field::required("value", &Shape::String),
]);

const PURCHASE_ORDER: Shape = Shape::Object(&[
    Field::required("orderId", &Shape::String),
    Field::required("buyer", &BUYER),
    Field::required("supplier", &ADDRESSED_PARTY),
    Field::required("billTo", &ADDRESSED_PARTY),
    Field::required("orderLogisticalInformation", &ORDER_LOGISTICS),
    Field::required("orderTypeCode", &Shape::String),
    Field::required("totalMonetaryAmountIncludingTaxes", &MONETARY_AMOUNT),
    Field::required("orderSubType", &Shape::String),
    Field::required("lineItem", &Shape::Array(&LINE_ITEM)),
    Field::required("avpList", &Shape::Array(&AVP_ENTRY)),
]);

// ── Walker ───────────────────────────────────────────────────────────────────

impl PurchaseOrder {
    /// Validates an untyped document and constructs the typed tree.
    ///
    /// Collects every missing or mismatched field path in one pass.
    /// Unknown fields are ignored; optional fields accept `null` as
    /// absent. No business-rule validation is performed.
    ///
    /// # Errors
    /// Returns [`ValidationError`] listing all structural issues.
    pub fn from_document(document: &Value) -> Result<Self, ValidationError> {
        let mut issues = Vec::new();
        check(document, &PURCHASE_ORDER, "", &mut issues);
        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }
        serde_json::from_value(document.clone()).map_err(|_| {
            // Unreachable while the shape table and the derives agree.
            ValidationError::new(vec![FieldIssue {
                path: String::new(),
                kind: IssueKind::Mismatch { expected: "purchase order", found: "unmappable document" },
            }])
        })
    }
}

fn check(value: &Value, shape: &Shape, path: &str, issues: &mut Vec<FieldIssue>) {
    match shape {
        Shape::String => {
            if !value.is_string() {
                mismatch(issues, path, shape, value);
            }
        }
        Shape::Integer => {
            if value.as_i64().is_none() {
                mismatch(issues, path, shape, value);
            }
        }
        Shape::Decimal => {
            if value.as_f64().is_none() {
                mismatch(issues, path, shape, value);
            }
        }
        Shape::Date => {
            let parses = value
                .as_str()
                .is_some_and(|s| s.parse::<NaiveDate>().is_ok());
            if !parses {
                mismatch(issues, path, shape, value);
            }
        }
        Shape::Object(fields) => match value.as_object() {
            None => mismatch(issues, path, shape, value),
            Some(map) => {
                for field in fields.iter() {
                    let child = join(path, field.name);
                    match map.get(field.name) {
                        None => {
                            if field.required {
                                issues.push(FieldIssue { path: child, kind: IssueKind::Missing });
                            }
                        }
                        Some(Value::Null) => {
                            if field.required {
                                mismatch(issues, &child, field.shape, &Value::Null);
                            }
                        }
                        Some(inner) => check(inner, field.shape, &child, issues),
                    }
                }
            }
        },
        Shape::Array(element) => match value.as_array() {
            None => mismatch(issues, path, shape, value),
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    check(item, element, &format!("{path}[{index}]"), issues);
                }
            }
        },
    }
}

fn mismatch(issues: &mut Vec<FieldIssue>, path: &str, shape: &Shape, value: &Value) {
    issues.push(FieldIssue {
        path: path.to_owned(),
        kind: IssueKind::Mismatch { expected: expected_name(shape), found: found_name(value) },
    });
}

fn expected_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::String => "string",
        Shape::Integer => "integer",
        Shape::Decimal => "decimal",
        Shape::Date => "date (YYYY-MM-DD)",
        Shape::Object(_) => "object",
        Shape::Array(_) => "array",
    }
}

fn found_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}
