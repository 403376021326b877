//! JSON wire/boundary support for the clinic derivation engine.
//!
//! This crate provides **wire models** and **translation helpers** for
//! the JSON payloads the REST backend exchanges with the application:
//! service catalogs, order lists, encounters and patients in, derived
//! service status back out.
//!
//! This crate focuses on:
//! - the backend's camelCase wire shapes
//! - serialisation/deserialisation
//! - translation between wire structs and domain records, including the
//!   documented money-field coercion (absent/null → `0.0`)
//!
//! Unlike the strictly validated on-disk formats some record systems use,
//! the backend adds fields to its payloads freely, so wire structs
//! tolerate unknown keys and unknown enum strings map to absorbing
//! variants (`OrderType::Other`, `PatientType::Standard`).

pub mod encounter;
pub mod order;
pub mod patient;
pub mod service;
pub mod status_view;

// Re-export facades
pub use encounter::Encounters;
pub use order::Orders;
pub use patient::Patients;
pub use service::Services;
pub use status_view::ServiceStatusView;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Errors returned by the wire boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`WireError`].
pub type WireResult<T> = Result<T, WireError>;

/// Deserialize JSON text, surfacing the path to the failing field.
///
/// Text that is not JSON at all (syntax errors, truncation) fails with
/// [`WireError::InvalidJson`]. Well-formed JSON of the wrong shape fails
/// with [`WireError::Translation`], using `serde_path_to_error` so the
/// mismatch reports a best-effort path (e.g. `orders.3.status`) instead
/// of only a byte offset.
pub(crate) fn from_json<T: DeserializeOwned>(json_text: &str, what: &str) -> WireResult<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);

    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        if matches!(
            source.classify(),
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof
        ) {
            return WireError::InvalidJson(source);
        }
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        WireError::Translation(format!("{what} schema mismatch at {path}: {source}"))
    })
}

/// Backend identifiers arrive as either JSON numbers or strings depending
/// on the endpoint; both translate to the opaque string ids the domain
/// records carry.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum IdWire {
    Number(i64),
    Text(String),
}

impl IdWire {
    pub(crate) fn into_string(self) -> String {
        match self {
            IdWire::Number(n) => n.to_string(),
            IdWire::Text(s) => s,
        }
    }
}

/// Coerce an optional money field to a renderable amount.
///
/// Absent and `null` become `0.0`; JSON itself cannot carry non-finite
/// numbers, so this is the single coercion point for "missing". A
/// malformed record loses its amount but keeps aggregate displays
/// renderable.
pub(crate) fn money_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
