//! Billable order lines and their department mapping.

use serde::{Deserialize, Serialize};

/// Kind of work an order line represents.
///
/// The backend is free to introduce new kinds; anything this engine does
/// not recognise deserialises as [`OrderType::Other`] and is ignored by
/// the aggregation buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Lab,
    Xray,
    Ultrasound,
    Pharmacy,
    Consultation,
    #[serde(other)]
    Other,
}

/// Clinical department used to bucket pending/completed order counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Laboratory,
    Radiology,
    Ultrasound,
    Pharmacy,
}

impl Department {
    /// Stable wire/display name, used as the key in status breakdowns.
    pub fn as_str(self) -> &'static str {
        match self {
            Department::Laboratory => "laboratory",
            Department::Radiology => "radiology",
            Department::Ultrasound => "ultrasound",
            Department::Pharmacy => "pharmacy",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrderType {
    /// The department an order of this type reports under.
    ///
    /// Consultation and unrecognised orders have no department breakdown;
    /// they contribute to billing totals only.
    pub fn department(self) -> Option<Department> {
        match self {
            OrderType::Lab => Some(Department::Laboratory),
            OrderType::Xray => Some(Department::Radiology),
            OrderType::Ultrasound => Some(Department::Ultrasound),
            OrderType::Pharmacy => Some(Department::Pharmacy),
            OrderType::Consultation | OrderType::Other => None,
        }
    }
}

/// Fulfilment state of an order line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A billable line item tied to one encounter.
///
/// Invariant (owned by the creating collaborator, trusted here):
/// `total_price == quantity as f64 * unit_price` at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend-assigned identifier (opaque string).
    pub id: String,

    /// The encounter (visit) this line belongs to.
    pub encounter_id: String,

    /// Kind of work ordered.
    pub order_type: OrderType,

    /// Fulfilment state.
    pub status: OrderStatus,

    /// Units ordered. Positive.
    pub quantity: u32,

    /// Price per unit in whole currency units. Non-negative.
    pub unit_price: f64,

    /// Line total in whole currency units. Non-negative.
    pub total_price: f64,

    /// Whether this line has been settled.
    pub is_paid: bool,

    /// Free-text description, e.g. the requested test name.
    pub description: String,
}
