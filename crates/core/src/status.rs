//! Per-patient service status projection.
//!
//! List and table views show each patient as a set of stat chips: balance
//! due, pending and completed counts per department. That view model is
//! recomputed from the raw order list on every refresh; nothing here is
//! cached or persisted, and memoization (if any) belongs to the caller.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clinic_types::{Department, Encounter, Order, OrderStatus};

use crate::billing::unpaid_balance;
use crate::orders::partition_orders;

/// Pending/completed counts for one department.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTally {
    pub pending: u32,
    pub completed: u32,
}

/// Derived billing/diagnostic status for one patient.
///
/// A pure view projection over the patient's orders; created fresh on
/// every [`summarize_status`] call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Sum of unpaid line totals across all the patient's orders.
    pub balance: f64,

    /// Unpaid total restricted to today's visit, when a same-day view is
    /// being tracked (see [`summarize_status_for_day`]).
    pub balance_today: Option<f64>,

    /// Total pending count across departments, used as a fallback label
    /// when no department chip applies.
    pub pending_services: u32,

    /// Total completed count across departments.
    pub completed_services: u32,

    /// Per-department breakdown, keyed by stable department name order.
    pub departments: BTreeMap<Department, DepartmentTally>,
}

impl ServiceStatus {
    /// Paid/unpaid filter classification.
    ///
    /// A patient is "unpaid" iff the effective balance is strictly
    /// positive; zero is "paid". Negative (credit) balances also classify
    /// as paid, matching the `> 0` branch the billing views use.
    pub fn is_unpaid(&self) -> bool {
        self.balance_today.unwrap_or(self.balance) > 0.0
    }
}

/// Summarize a patient's orders into the status view model.
pub fn summarize_status(patient_orders: &[Order]) -> ServiceStatus {
    let buckets = partition_orders(patient_orders);

    let mut departments: BTreeMap<Department, DepartmentTally> = BTreeMap::new();
    let groups = [
        (Department::Laboratory, &buckets.lab),
        (Department::Radiology, &buckets.xray),
        (Department::Ultrasound, &buckets.ultrasound),
        (Department::Pharmacy, &buckets.pharmacy),
    ];

    for (department, orders) in groups {
        let tally = departments.entry(department).or_default();
        for order in orders {
            match order.status {
                OrderStatus::Pending => tally.pending += 1,
                OrderStatus::Completed => tally.completed += 1,
                OrderStatus::Cancelled => {}
            }
        }
    }

    let pending_services = departments.values().map(|t| t.pending).sum();
    let completed_services = departments.values().map(|t| t.completed).sum();

    ServiceStatus {
        balance: unpaid_balance(patient_orders),
        balance_today: None,
        pending_services,
        completed_services,
        departments,
    }
}

/// Same-day variant of [`summarize_status`].
///
/// Additionally computes `balance_today`: the unpaid total over orders
/// whose encounter took place on `today`. Orders whose encounter id is
/// not present in `encounters` are excluded from the today figure only;
/// they still count toward the overall balance.
pub fn summarize_status_for_day(
    patient_orders: &[Order],
    encounters: &[Encounter],
    today: NaiveDate,
) -> ServiceStatus {
    let mut status = summarize_status(patient_orders);

    let todays_orders: Vec<Order> = patient_orders
        .iter()
        .filter(|order| {
            encounters
                .iter()
                .any(|e| e.encounter_id == order.encounter_id && e.visit_date == today)
        })
        .cloned()
        .collect();

    status.balance_today = Some(unpaid_balance(&todays_orders));
    status
}
