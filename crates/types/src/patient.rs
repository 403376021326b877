//! Patient registration records.

use serde::{Deserialize, Serialize};

/// Workflow category of a patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientType {
    /// Sent in by an outside clinician for diagnostics only; excluded
    /// from clinician-facing workflow aggregates.
    #[serde(rename = "referral_diagnostic")]
    ReferralDiagnostic,
    /// Every other registration category.
    #[serde(other, rename = "standard")]
    Standard,
}

/// A registered patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Backend-assigned identifier (opaque string).
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub patient_type: Option<PatientType>,
}

impl Patient {
    /// Whether this patient is a diagnostics-only referral, excluded from
    /// clinician workflow views and automatic consultation billing.
    pub fn is_referral_only(&self) -> bool {
        self.patient_type == Some(PatientType::ReferralDiagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(patient_type: Option<PatientType>) -> Patient {
        Patient {
            patient_id: "pat-1".into(),
            first_name: "Amina".into(),
            last_name: "Odhiambo".into(),
            age: Some(34),
            gender: None,
            phone_number: None,
            patient_type,
        }
    }

    #[test]
    fn referral_flag_requires_referral_type() {
        assert!(patient(Some(PatientType::ReferralDiagnostic)).is_referral_only());
        assert!(!patient(Some(PatientType::Standard)).is_referral_only());
        assert!(!patient(None).is_referral_only());
    }

    #[test]
    fn unknown_patient_type_maps_to_standard() {
        let parsed: PatientType =
            serde_json::from_str("\"walk_in\"").expect("parse unknown patient type");
        assert_eq!(parsed, PatientType::Standard);
    }
}
