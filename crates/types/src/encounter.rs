//! Encounter (visit) records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Billing lifecycle of an encounter.
///
/// Owned entirely by the collaborator that creates encounters; transitions
/// are monotonic (`open` → `ready_to_bill` → `closed`). This engine only
/// reads the current state for grouping and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterStatus {
    Open,
    ReadyToBill,
    Closed,
}

/// One clinical episode for a patient on a given day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Backend-assigned identifier (opaque string).
    pub encounter_id: String,

    /// The patient this visit belongs to.
    pub patient_id: String,

    /// Current billing lifecycle state.
    pub status: EncounterStatus,

    /// Calendar day of the visit.
    pub visit_date: NaiveDate,
}

impl Encounter {
    /// Whether the visit is still open for new orders.
    pub fn is_open(&self) -> bool {
        self.status == EncounterStatus::Open
    }
}
