//! Matching requested test names against the billable service catalog.
//!
//! Diagnostic orders arrive as free-text test names (picked from
//! department-specific pick lists owned by the presentation layer) and
//! must be backed by a configured, priced catalog service before an order
//! line can be created. Catalog entries frequently carry a trailing
//! abbreviation, e.g. `"Complete Blood Count (CBC)"`, which a requested
//! name may omit; matching therefore normalises both sides and tolerates
//! that suffix.

use crate::{EngineError, EngineResult};
use clinic_types::{Service, ServiceCategory};

/// Find the active catalog service backing a requested test name.
///
/// Both sides are normalised (trimmed, lower-cased, internal whitespace
/// runs collapsed). A service matches when its normalised name equals the
/// normalised test name, or starts with it followed by a space or an open
/// parenthesis; the boundary requirement stops `"CBC"` from matching a
/// hypothetical `"CBCX"`. For the equality check the service name is
/// additionally tried with a trailing `"(...)"` suffix stripped.
///
/// A service's short code, when present, also matches by normalised
/// equality, so `"CBC"` resolves a service named `"Complete Blood
/// Count"` with code `"CBC"`.
///
/// Inactive services never match. The first match in the caller-supplied
/// order wins; no further tie-break is applied.
pub fn match_service<'a>(test_name: &str, services: &'a [Service]) -> Option<&'a Service> {
    let wanted = normalize(test_name);
    if wanted.is_empty() {
        return None;
    }

    services.iter().filter(|s| s.is_active).find(|s| {
        let name = normalize(&s.name);
        if name == wanted || strip_parenthetical(&name) == wanted {
            return true;
        }
        if let Some(rest) = name.strip_prefix(wanted.as_str()) {
            if rest.starts_with(' ') || rest.starts_with('(') {
                return true;
            }
        }
        s.code
            .as_deref()
            .is_some_and(|code| normalize(code) == wanted)
    })
}

/// Resolve a batch of requested test names, all-or-nothing.
///
/// A batch submission must never create a partially-fulfilled diagnostic
/// order, so if any requested name matches zero active services the whole
/// batch fails with [`EngineError::CatalogMismatch`] carrying every
/// unmatched name verbatim.
///
/// # Errors
///
/// Returns `EngineError::CatalogMismatch` listing the unmatched names.
pub fn resolve_order_batch<'a>(
    test_names: &[String],
    services: &'a [Service],
) -> EngineResult<Vec<&'a Service>> {
    let mut resolved = Vec::with_capacity(test_names.len());
    let mut unmatched = Vec::new();

    for name in test_names {
        match match_service(name, services) {
            Some(service) => resolved.push(service),
            None => unmatched.push(name.clone()),
        }
    }

    if !unmatched.is_empty() {
        tracing::warn!(
            unmatched = ?unmatched,
            "test names matched no active catalog service; batch aborted"
        );
        return Err(EngineError::CatalogMismatch { unmatched });
    }

    Ok(resolved)
}

/// First active consultation-fee service in the catalog, if configured.
///
/// Backs the automatic consultation order added when a clinician opens an
/// encounter; a clinic without a configured consultation service gets no
/// automatic order.
pub fn consultation_service(services: &[Service]) -> Option<&Service> {
    services
        .iter()
        .find(|s| s.is_active && s.category == ServiceCategory::Consultation)
}

/// Trim, lower-case, and collapse internal whitespace runs to one space.
fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove a trailing `"(...)"` group and the whitespace before it.
///
/// Operates on already-normalised text; input without such a suffix is
/// returned unchanged.
fn strip_parenthetical(name: &str) -> &str {
    if !name.ends_with(')') {
        return name;
    }
    match name.rfind('(') {
        Some(open) => name[..open].trim_end(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str, active: bool) -> Service {
        Service {
            id: format!("svc-{}", name.len()),
            name: name.to_string(),
            code: None,
            category: ServiceCategory::Laboratory,
            price: 1000.0,
            is_active: active,
        }
    }

    #[test]
    fn exact_name_matches() {
        let services = vec![service("Malaria Test", true)];
        let found = match_service("Malaria Test", &services).expect("should match");
        assert_eq!(found.name, "Malaria Test");
    }

    #[test]
    fn match_is_case_and_whitespace_insensitive() {
        let services = vec![service("Malaria  Test", true)];
        assert!(match_service("  malaria tEST ", &services).is_some());
    }

    #[test]
    fn parenthetical_suffix_is_ignored() {
        let services = vec![service("Complete Blood Count (CBC)", true)];
        let found = match_service("Complete Blood Count", &services).expect("should match");
        assert_eq!(found.name, "Complete Blood Count (CBC)");
    }

    #[test]
    fn prefix_requires_word_or_paren_boundary() {
        let services = vec![service("CBCX", true)];
        assert!(match_service("CBC", &services).is_none());

        let services = vec![service("CBC (full panel)", true)];
        assert!(match_service("CBC", &services).is_some());

        let services = vec![service("CBC full panel", true)];
        assert!(match_service("CBC", &services).is_some());
    }

    #[test]
    fn short_code_matches_by_equality() {
        let mut cbc = service("Complete Blood Count", true);
        cbc.code = Some("CBC".into());
        let services = vec![cbc];

        assert!(match_service("cbc", &services).is_some());
        // Codes match whole, never by prefix.
        assert!(match_service("cb", &services).is_none());
    }

    #[test]
    fn inactive_code_never_matches() {
        let mut cbc = service("Complete Blood Count", false);
        cbc.code = Some("CBC".into());
        assert!(match_service("CBC", &[cbc]).is_none());
    }

    #[test]
    fn inactive_services_never_match() {
        let services = vec![service("Malaria Test", false)];
        assert!(match_service("Malaria Test", &services).is_none());
    }

    #[test]
    fn empty_test_name_matches_nothing() {
        let services = vec![service("Malaria Test", true)];
        assert!(match_service("   ", &services).is_none());
    }

    #[test]
    fn first_match_wins() {
        let mut first = service("Urinalysis", true);
        first.id = "svc-a".into();
        let mut second = service("Urinalysis", true);
        second.id = "svc-b".into();

        let services = vec![first, second];
        let found = match_service("Urinalysis", &services).expect("should match");
        assert_eq!(found.id, "svc-a");
    }

    #[test]
    fn matching_is_idempotent() {
        let services = vec![service("Complete Blood Count (CBC)", true)];
        let a = match_service("Complete Blood Count", &services).map(|s| s.id.clone());
        let b = match_service("Complete Blood Count", &services).map(|s| s.id.clone());
        assert_eq!(a, b);
    }

    #[test]
    fn batch_resolves_when_all_names_match() {
        let services = vec![
            service("Complete Blood Count (CBC)", true),
            service("Urinalysis", true),
        ];
        let names = vec!["Urinalysis".to_string(), "Complete Blood Count".to_string()];

        let resolved = resolve_order_batch(&names, &services).expect("all matched");
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name, "Urinalysis");
        assert_eq!(resolved[1].name, "Complete Blood Count (CBC)");
    }

    #[test]
    fn batch_aborts_listing_every_unmatched_name() {
        let services = vec![service("Urinalysis", true)];
        let names = vec![
            "Urinalysis".to_string(),
            "Lipid Profile".to_string(),
            "Blood Sugar".to_string(),
        ];

        let err = resolve_order_batch(&names, &services).expect_err("should abort");
        match err {
            EngineError::CatalogMismatch { unmatched } => {
                assert_eq!(unmatched, vec!["Lipid Profile", "Blood Sugar"]);
            }
            other => panic!("expected CatalogMismatch, got {other:?}"),
        }
    }

    #[test]
    fn consultation_lookup_skips_inactive_and_other_categories() {
        let mut lab = service("Urinalysis", true);
        lab.category = ServiceCategory::Laboratory;

        let mut retired = service("Consultation Fee (old)", false);
        retired.category = ServiceCategory::Consultation;

        let mut fee = service("Consultation Fee", true);
        fee.category = ServiceCategory::Consultation;
        fee.id = "svc-fee".into();

        let services = vec![lab, retired, fee];
        let found = consultation_service(&services).expect("should find fee");
        assert_eq!(found.id, "svc-fee");
    }
}
