//! # Clinic Core
//!
//! Derivation engine for the clinic management system: the pure functions
//! that turn raw patient/encounter/order records into the billing and
//! diagnostic status shown throughout the application.
//!
//! Components:
//! - catalog matching of free-text test names to billable services
//! - order partitioning by department
//! - invoice totals and the currency display formatter
//! - the per-patient service status projection
//! - the once-per-encounter consultation auto-add guard
//! - medication quantity derivation from dosage/duration text
//!
//! **No I/O concerns**: record retrieval, persistence and rendering
//! belong to collaborators; JSON parsing lives in `clinic-wire`. Every
//! function here is synchronous, and all state is confined to
//! [`ConsultationGuard`] values owned by the caller.

pub mod billing;
pub mod catalog;
pub mod config;
pub mod consultation;
pub mod dosage;
pub mod error;
pub mod orders;
pub mod status;

pub use billing::{format_currency, total_order_lines, unpaid_balance};
pub use catalog::{consultation_service, match_service, resolve_order_batch};
pub use config::CoreConfig;
pub use consultation::ConsultationGuard;
pub use dosage::calculate_quantity;
pub use error::{EngineError, EngineResult};
pub use orders::{has_consultation_order, partition_orders, OrderBuckets};
pub use status::{summarize_status, summarize_status_for_day, DepartmentTally, ServiceStatus};
