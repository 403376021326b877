//! Deriving medication quantities from free-text prescriptions.
//!
//! Prescriptions carry a dosage instruction (`"1 tablet twice daily"`)
//! and a duration (`"5 days"`), both free text. The dispensed quantity is
//! derived conservatively: an unparseable instruction never yields more
//! than the stated amount, and the result is always at least one unit.

/// Dosing frequency keywords, checked in priority order against the
/// lower-cased instruction. First hit wins.
const DOSES_PER_DAY_KEYWORDS: [(&str, u32); 6] = [
    ("twice", 2),
    ("three times", 3),
    ("four times", 4),
    ("every 8 hours", 3),
    ("every 6 hours", 4),
    ("every 4 hours", 6),
];

/// Derive a dispense quantity from dosage instructions and duration.
///
/// `tablets_per_dose * doses_per_day * days`, where:
/// - tablets per dose comes from an `"N tablet(s)"` pattern; when absent
///   the whole calculation degrades to `1` (never infer a larger
///   quantity from an unparseable instruction),
/// - doses per day comes from the frequency keywords (default 1),
/// - days is the leading integer of the duration; when absent a one-day
///   quantity is returned.
///
/// Always returns a positive quantity, saturating at `u32::MAX` for
/// absurdly large inputs.
pub fn calculate_quantity(dosage_instructions: &str, duration: &str) -> u32 {
    let instructions = dosage_instructions.to_lowercase();

    let tablets_per_dose = match tablets_per_dose(&instructions) {
        Some(n) => n,
        None => return 1,
    };

    let doses_per_day = DOSES_PER_DAY_KEYWORDS
        .iter()
        .find(|(keyword, _)| instructions.contains(keyword))
        .map(|&(_, doses)| doses)
        .unwrap_or(1);

    // Missing duration means a one-day quantity. Saturate rather than
    // wrap: derivation must never panic, and an absurd free-text input
    // must not wrap into a small-looking dispense quantity.
    let days = leading_integer(duration).unwrap_or(1);
    tablets_per_dose
        .saturating_mul(doses_per_day)
        .saturating_mul(days)
        .max(1)
}

/// Extract `N` from the first `"N tablet"`/`"N tablets"` occurrence in an
/// already lower-cased instruction.
fn tablets_per_dose(instructions: &str) -> Option<u32> {
    let mut words = instructions.split_whitespace().peekable();
    while let Some(word) = words.next() {
        let count: u32 = match word.parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if let Some(next) = words.peek() {
            if next.starts_with("tablet") {
                return Some(count);
            }
        }
    }
    None
}

/// Parse the leading integer of a string, e.g. `"5 days"` → `5`.
fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
