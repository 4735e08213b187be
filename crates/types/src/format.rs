//! Display formatting for money, percentages and counts.

/// Replaces NaN and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Groups the digits of a non-negative integer with commas: `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// US-dollar amount without cents: `$1,234`, `-$50`.
pub fn currency(value: f64) -> String {
    let rounded = finite_or_zero(value).round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Fixed-precision percentage: `percent(6.456, 2)` -> `6.46%`.
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, finite_or_zero(value))
}

/// Fraction rendered as a percentage: `fraction_percent(0.72, 0)` -> `72%`.
pub fn fraction_percent(fraction: f64, decimals: usize) -> String {
    percent(finite_or_zero(fraction) * 100.0, decimals)
}

/// Value or `"N/A"` for missing descriptive fields.
pub fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}
