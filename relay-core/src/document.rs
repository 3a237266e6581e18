use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchase order as exchanged with the Fareva partner API.
///
/// The tree mirrors the partner's wire format exactly: field names are
/// camelCase on the wire, nested records are plain JSON objects, and
/// optional subtrees are omitted entirely when absent. Instances are
/// immutable once constructed; each inbound request produces one
/// disposable order that is discarded after the round trip completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PurchaseOrder {
    /// Partner-assigned order identifier.
    pub order_id: String,
    /// The ordering party.
    pub buyer: Buyer,
    /// The supplying party.
    pub supplier: AddressedParty,
    /// The invoiced party.
    pub bill_to: AddressedParty,
    /// Header-level ship-to / ship-from routing.
    pub order_logistical_information: OrderLogistics,
    /// Order type code (partner code list).
    pub order_type_code: String,
    /// Order total, taxes included.
    pub total_monetary_amount_including_taxes: MonetaryAmount,
    /// Order sub-type (partner code list).
    pub order_sub_type: String,
    /// Ordered lines.
    pub line_item: Vec<LineItem>,
    /// Free-form name/value attribute pairs.
    pub avp_list: Vec<AvpEntry>,
}

/// The ordering party with its contact points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Buyer {
    /// Party identifier (e.g. GLN).
    pub primary_id: String,
    /// Contact points for this party.
    pub contact: Vec<Contact>,
}

/// A contact point attached to the buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Contact {
    /// Contact type code (partner code list).
    pub contact_type_code: String,
    /// Department the contact belongs to.
    pub department_name: String,
}

/// A party identified by ID and carrying a full postal address.
///
/// Used for the supplier, the bill-to party, and the header-level
/// ship-to party, which all share this shape on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddressedParty {
    /// Party identifier (e.g. GLN).
    pub primary_id: String,
    /// Postal address of the party.
    pub address: Address,
}

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Address {
    pub name: String,
    pub city: String,
    pub country_code: String,
    pub postal_code: String,
    pub street_address_one: String,
    pub language_of_the_party_code: String,
}

/// A party referenced by identifier only, with no address detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartyRef {
    /// Party identifier (e.g. GLN).
    pub primary_id: String,
}

/// Header-level routing: where goods ship to and from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct OrderLogistics {
    pub ship_to: AddressedParty,
    pub ship_from: PartyRef,
}

/// A monetary amount with its currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MonetaryAmount {
    /// Amount in the currency's minor unit.
    pub value: i64,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// A per-unit net price. The currency is implied by the order total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetPrice {
    pub value: i64,
}

/// A whole-unit quantity with its unit of measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Quantity {
    pub value: i64,
    /// Unit-of-measure code (partner code list).
    pub measurement_unit_code: String,
}

/// A fractional quantity with its unit of measure.
///
/// Schedule-level requested quantities and received totals allow
/// fractional values (partial pallets, weights).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DecimalQuantity {
    pub value: f64,
    /// Unit-of-measure code (partner code list).
    pub measurement_unit_code: String,
}

/// A calendar date wrapped in the partner's date-time envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RequestedDate {
    /// ISO date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Line-level requested ship and delivery dates. Both are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LineDates {
    pub requested_ship_date_time: RequestedDate,
    pub requested_delivery_date_time: RequestedDate,
}

/// Line-level routing and dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LineLogistics {
    pub ship_to: PartyRef,
    pub ship_from: PartyRef,
    pub order_logistical_date_information: LineDates,
}

/// Schedule-level dates. The delivery date may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduleDates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_delivery_date_time: Option<RequestedDate>,
}

/// Schedule-level logistics envelope. The whole subtree may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduleLogistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_logistical_date_information: Option<ScheduleDates>,
}

/// One delivery schedule within a line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduleLine {
    pub schedule_number: String,
    pub requested_quantity: DecimalQuantity,
    pub order_logistical_information: ScheduleLogistics,
}

/// The traded item a line refers to, by identifier (e.g. GTIN).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TradeItemRef {
    pub primary_id: String,
}

/// One ordered line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LineItem {
    pub line_item_number: i64,
    pub item_family: String,
    pub line_status: String,
    /// Delivery schedules; absent when the line has a single delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_detail: Option<Vec<ScheduleLine>>,
    pub net_price: NetPrice,
    pub requested_quantity: Quantity,
    pub transactional_trade_item: TradeItemRef,
    pub order_logistical_information: LineLogistics,
    /// Cumulative received quantity; absent on new orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_received_quantity: Option<DecimalQuantity>,
}

/// A free-form name/value attribute pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AvpEntry {
    pub name: String,
    pub value: String,
}
