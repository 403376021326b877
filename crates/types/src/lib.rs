//! # Clinic Types
//!
//! Domain record types shared across the clinic engine workspace.
//!
//! These are the read-only value objects the derivation engine consumes:
//! catalog services, order lines, encounters and patients. Collaborators
//! (the HTTP layer, persistence) own the records' lifecycle; this crate
//! only defines their in-memory shape.
//!
//! **No I/O concerns**: JSON parsing and rendering of these records lives
//! in the `clinic-wire` crate.

pub mod encounter;
pub mod order;
pub mod patient;
pub mod service;

pub use encounter::{Encounter, EncounterStatus};
pub use order::{Department, Order, OrderStatus, OrderType};
pub use patient::{Patient, PatientType};
pub use service::{Service, ServiceCategory};
