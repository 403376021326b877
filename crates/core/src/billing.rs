//! Invoice totals and currency display.

use clinic_types::Order;

/// Sum order-line totals into an invoice/visit grand total.
///
/// Missing money fields are already coerced to zero at the wire boundary;
/// this additionally treats any non-finite `total_price` produced
/// in-process as zero so a single malformed record can never push `NaN`
/// into an invoice display.
pub fn total_order_lines(lines: &[Order]) -> f64 {
    lines.iter().map(|l| finite_or_zero(l.total_price)).sum()
}

/// Sum of `total_price` over unpaid lines; `0.0` when everything is
/// settled. Same non-finite guard as [`total_order_lines`].
pub fn unpaid_balance(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| !o.is_paid)
        .map(|o| finite_or_zero(o.total_price))
        .sum()
}

/// Render an amount as a display string, e.g. `"KES 1,250"`.
///
/// Rounds to the nearest whole currency unit and groups thousands with
/// commas. Non-finite amounts render as zero.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let amount = finite_or_zero(amount);
    let units = amount.round() as i64;
    format!("{currency_code} {}", group_thousands(units))
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn group_thousands(units: i64) -> String {
    let digits = units.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
    }
    for chunk in digits[lead..].as_bytes().chunks(3) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        // Chunks of an ASCII digit string are valid UTF-8.
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }

    if units < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
