//! Encounter wire models and translation helpers.

use crate::{from_json, IdWire, WireError, WireResult};
use chrono::NaiveDate;
use clinic_types::{Encounter, EncounterStatus};
use serde::Deserialize;

/// Encounter endpoint operations.
///
/// Zero-sized namespacing type; all methods are associated functions.
pub struct Encounters;

impl Encounters {
    /// Parse an `/api/encounters`-style JSON array into domain records.
    ///
    /// # Errors
    ///
    /// Returns a [`WireError::Translation`] naming the failing field if
    /// the payload does not match the wire schema or a `visitDate` is not
    /// a `YYYY-MM-DD` date.
    pub fn parse_list(json_text: &str) -> WireResult<Vec<Encounter>> {
        let wires: Vec<EncounterWire> = from_json(json_text, "encounter list")?;
        wires.into_iter().map(wire_to_domain).collect()
    }
}

/// Wire representation of one encounter.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EncounterWire {
    encounter_id: IdWire,
    patient_id: IdWire,
    status: EncounterStatus,
    visit_date: String,
}

fn wire_to_domain(wire: EncounterWire) -> WireResult<Encounter> {
    let visit_date = NaiveDate::parse_from_str(&wire.visit_date, "%Y-%m-%d").map_err(|_| {
        WireError::Translation(format!(
            "invalid visitDate (expected YYYY-MM-DD): {}",
            wire.visit_date
        ))
    })?;

    Ok(Encounter {
        encounter_id: wire.encounter_id.into_string(),
        patient_id: wire.patient_id.into_string(),
        status: wire.status,
        visit_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encounter_list() {
        let input = r#"[
            {
                "encounterId": 55,
                "patientId": "pat-9",
                "status": "ready_to_bill",
                "visitDate": "2025-03-14"
            }
        ]"#;

        let encounters = Encounters::parse_list(input).expect("parse encounters");
        assert_eq!(encounters.len(), 1);
        assert_eq!(encounters[0].encounter_id, "55");
        assert_eq!(encounters[0].status, EncounterStatus::ReadyToBill);
        assert_eq!(
            encounters[0].visit_date,
            NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
        );
    }

    #[test]
    fn rejects_malformed_visit_date() {
        let input = r#"[
            {
                "encounterId": 55,
                "patientId": "pat-9",
                "status": "open",
                "visitDate": "14/03/2025"
            }
        ]"#;

        let err = Encounters::parse_list(input).expect_err("should reject");
        match err {
            WireError::Translation(msg) => assert!(msg.contains("visitDate"), "got: {msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }
}
