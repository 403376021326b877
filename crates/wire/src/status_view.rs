//! Rendering the derived service status back to the presentation layer.

use std::collections::BTreeMap;

use crate::{WireError, WireResult};
use clinic_core::{DepartmentTally, ServiceStatus};
use serde::Serialize;

/// Service status rendering operations.
///
/// Zero-sized namespacing type; all methods are associated functions.
pub struct ServiceStatusView;

impl ServiceStatusView {
    /// Render a derived [`ServiceStatus`] as the camelCase JSON object
    /// the list/table views consume.
    ///
    /// `balanceToday` is omitted when no same-day variant was computed.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Translation`] if serialization fails.
    pub fn render(status: &ServiceStatus) -> WireResult<String> {
        let wire = domain_to_wire(status);
        serde_json::to_string(&wire)
            .map_err(|e| WireError::Translation(format!("failed to serialize status: {e}")))
    }
}

/// Wire representation of the status view model.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceStatusWire {
    balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    balance_today: Option<f64>,
    pending_services: u32,
    completed_services: u32,
    departments: BTreeMap<&'static str, DepartmentTallyWire>,
}

#[derive(Clone, Copy, Debug, Serialize)]
struct DepartmentTallyWire {
    pending: u32,
    completed: u32,
}

fn domain_to_wire(status: &ServiceStatus) -> ServiceStatusWire {
    let departments = status
        .departments
        .iter()
        .map(|(department, tally)| (department.as_str(), tally_to_wire(*tally)))
        .collect();

    ServiceStatusWire {
        balance: status.balance,
        balance_today: status.balance_today,
        pending_services: status.pending_services,
        completed_services: status.completed_services,
        departments,
    }
}

fn tally_to_wire(tally: DepartmentTally) -> DepartmentTallyWire {
    DepartmentTallyWire {
        pending: tally.pending,
        completed: tally.completed,
    }
}
