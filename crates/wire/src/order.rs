//! Order line wire models and translation helpers.

use crate::{from_json, money_or_zero, IdWire, WireResult};
use clinic_types::{Order, OrderStatus, OrderType};
use serde::Deserialize;

/// Order line endpoint operations.
///
/// Zero-sized namespacing type; all methods are associated functions.
pub struct Orders;

impl Orders {
    /// Parse an `/api/order-lines`-style JSON array into domain records.
    ///
    /// Money fields absent from a record coerce to `0.0`; an absent
    /// quantity defaults to one unit. An unknown `type` string maps to
    /// [`OrderType::Other`], which downstream aggregation ignores.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::WireError::Translation`] naming the failing
    /// field path if the payload does not match the wire schema.
    pub fn parse_list(json_text: &str) -> WireResult<Vec<Order>> {
        let wires: Vec<OrderWire> = from_json(json_text, "order list")?;
        Ok(wires.into_iter().map(wire_to_domain).collect())
    }
}

/// Wire representation of one order line.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderWire {
    id: IdWire,
    encounter_id: IdWire,
    #[serde(rename = "type")]
    order_type: OrderType,
    status: OrderStatus,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    unit_price: Option<f64>,
    #[serde(default)]
    total_price: Option<f64>,
    #[serde(default)]
    is_paid: bool,
    #[serde(default)]
    description: Option<String>,
}

fn wire_to_domain(wire: OrderWire) -> Order {
    Order {
        id: wire.id.into_string(),
        encounter_id: wire.encounter_id.into_string(),
        order_type: wire.order_type,
        status: wire.status,
        quantity: wire.quantity.unwrap_or(1),
        unit_price: money_or_zero(wire.unit_price),
        total_price: money_or_zero(wire.total_price),
        is_paid: wire.is_paid,
        description: wire.description.unwrap_or_default(),
    }
}
