//! Patient wire models and translation helpers.

use crate::{from_json, IdWire, WireResult};
use clinic_types::{Patient, PatientType};
use serde::Deserialize;

/// Patient endpoint operations.
///
/// Zero-sized namespacing type; all methods are associated functions.
pub struct Patients;

impl Patients {
    /// Parse a `/api/patients`-style JSON array into domain records.
    ///
    /// Unknown `patientType` strings map to [`PatientType::Standard`];
    /// only `referral_diagnostic` carries workflow meaning.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::WireError::Translation`] naming the failing
    /// field path if the payload does not match the wire schema.
    pub fn parse_list(json_text: &str) -> WireResult<Vec<Patient>> {
        let wires: Vec<PatientWire> = from_json(json_text, "patient list")?;
        Ok(wires.into_iter().map(wire_to_domain).collect())
    }
}

/// Wire representation of one patient.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatientWire {
    patient_id: IdWire,
    first_name: String,
    last_name: String,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    patient_type: Option<PatientType>,
}

fn wire_to_domain(wire: PatientWire) -> Patient {
    Patient {
        patient_id: wire.patient_id.into_string(),
        first_name: wire.first_name,
        last_name: wire.last_name,
        age: wire.age,
        gender: wire.gender,
        phone_number: wire.phone_number,
        patient_type: wire.patient_type,
    }
}
