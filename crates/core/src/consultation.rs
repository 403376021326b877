//! Automatic consultation-fee ordering, once per encounter.
//!
//! Opening a clinician-facing encounter should bill exactly one
//! consultation fee without manual entry. The existing-orders fetch is
//! asynchronous, so the decision has to be guarded: firing before that
//! fetch completes could add a duplicate next to an order the check never
//! saw, and two rapid re-evaluations must not both pass.

use std::collections::HashSet;

/// Per-session guard ensuring at most one automatic consultation order is
/// created per encounter.
///
/// The triggered set is owned by the guard value, one guard per consuming
/// session, so the idempotency scope is explicit and testable rather than
/// process-global. `&mut self` on [`Self::should_auto_add`] keeps the
/// check-and-mark step atomic with respect to re-evaluation: the id is
/// recorded before the method returns, closing the window in which a
/// second evaluation could also pass.
#[derive(Debug, Default)]
pub struct ConsultationGuard {
    triggered: HashSet<String>,
}

impl ConsultationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether to create the automatic consultation order now.
    ///
    /// Returns `true` exactly once per `encounter_id`, and only when all
    /// of the following hold:
    /// - the patient is not a diagnostics-only referral,
    /// - the existing-orders fetch has completed (`orders_loaded`),
    /// - no consultation order already exists on the encounter,
    /// - no create-order call is currently in flight,
    /// - this guard has not fired for the encounter before.
    ///
    /// On `true` the encounter id is recorded immediately; the caller
    /// then starts the asynchronous create-order call.
    pub fn should_auto_add(
        &mut self,
        encounter_id: &str,
        orders_loaded: bool,
        has_consultation_order: bool,
        in_flight: bool,
        referral_only: bool,
    ) -> bool {
        if referral_only || !orders_loaded || has_consultation_order || in_flight {
            return false;
        }
        if self.triggered.contains(encounter_id) {
            return false;
        }

        self.triggered.insert(encounter_id.to_string());
        tracing::debug!(encounter_id, "auto-adding consultation order");
        true
    }

    /// Whether the guard has already fired for this encounter.
    pub fn has_triggered(&self, encounter_id: &str) -> bool {
        self.triggered.contains(encounter_id)
    }

    /// Record that the triggered create-order call failed.
    ///
    /// The triggered marker stays set: the automatic attempt is not
    /// retried, and a clinician adds the order manually instead. A
    /// misconfigured catalog would otherwise produce an endless retry
    /// loop.
    pub fn record_failure(&mut self, encounter_id: &str) {
        tracing::warn!(
            encounter_id,
            "automatic consultation order failed; manual entry required"
        );
    }
}
