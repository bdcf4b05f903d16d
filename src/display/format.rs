//! Number and text formatting shared by tables and reports

/// Round to `precision` decimals, folding negative zero into zero
fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a share amount, e.g. `3.3333 ETH`
pub fn format_share(value: f64, precision: usize, currency: &str) -> String {
    with_currency(format!("{:.*}", precision, round_to(value, precision)), currency)
}

/// Format a balance with an explicit `+` for creditors, e.g. `+5.0000 ETH`
pub fn format_balance(value: f64, precision: usize, currency: &str) -> String {
    let rounded = round_to(value, precision);
    let sign = if rounded > 0.0 { "+" } else { "" };
    with_currency(format!("{}{:.*}", sign, precision, rounded), currency)
}

fn with_currency(number: String, currency: &str) -> String {
    if currency.is_empty() {
        number
    } else {
        format!("{} {}", number, currency)
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
