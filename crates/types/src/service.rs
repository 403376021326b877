//! Billable service catalog records.

use serde::{Deserialize, Serialize};

/// Department-level grouping of a catalog service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    /// Clinician consultation fees.
    Consultation,
    /// Laboratory tests.
    Laboratory,
    /// X-ray examinations.
    Radiology,
    /// Ultrasound scans.
    Ultrasound,
    /// Dispensed medications.
    Pharmacy,
    /// Anything else the clinic bills for.
    #[serde(other)]
    Other,
}

/// A catalog entry defining a billable procedure.
///
/// Only services with `is_active == true` are eligible for matching and
/// ordering; inactive entries stay in the catalog for historical billing
/// records but never back new orders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Backend-assigned identifier (opaque string).
    pub id: String,

    /// Display name, e.g. `"Complete Blood Count (CBC)"`.
    pub name: String,

    /// Optional short code, e.g. `"CBC"`.
    pub code: Option<String>,

    /// Department grouping.
    pub category: ServiceCategory,

    /// Unit price in whole currency units. Non-negative.
    pub price: f64,

    /// Whether the service can currently be ordered.
    pub is_active: bool,
}
