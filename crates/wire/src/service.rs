//! Service catalog wire models and translation helpers.

use crate::{from_json, money_or_zero, IdWire, WireResult};
use clinic_types::{Service, ServiceCategory};
use serde::Deserialize;

/// Service catalog endpoint operations.
///
/// Zero-sized namespacing type; all methods are associated functions.
pub struct Services;

impl Services {
    /// Parse a `/api/services`-style JSON array into domain records.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::WireError::Translation`] naming the failing
    /// field path if the payload does not match the wire schema.
    pub fn parse_list(json_text: &str) -> WireResult<Vec<Service>> {
        let wires: Vec<ServiceWire> = from_json(json_text, "service list")?;
        Ok(wires.into_iter().map(wire_to_domain).collect())
    }
}

/// Wire representation of one catalog service.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceWire {
    id: IdWire,
    name: String,
    #[serde(default)]
    code: Option<String>,
    category: ServiceCategory,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    is_active: bool,
}

fn wire_to_domain(wire: ServiceWire) -> Service {
    Service {
        id: wire.id.into_string(),
        name: wire.name,
        code: wire.code,
        category: wire.category,
        price: money_or_zero(wire.price),
        is_active: wire.is_active,
    }
}
