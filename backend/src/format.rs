//! Presentation-string helpers
//!
//! The model itself deals only in numbers; these helpers render the strings
//! the presentation layer shows. Currency rounds to whole units with comma
//! thousands separators; percentages round to whole percent with an optional
//! `+` prefix for positive values.

/// Render an amount as `$59,400` (or `-$1,200` for negative amounts)
///
/// # Example
/// ```
/// use cost_model_core_rs::format::currency;
///
/// assert_eq!(currency(59400.0), "$59,400");
/// assert_eq!(currency(999.4), "$999");
/// ```
pub fn currency(amount: f64) -> String {
    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-${}", group_thousands((-rounded) as u64))
    } else {
        format!("${}", group_thousands(rounded as u64))
    }
}

/// Render a percentage as `105%`, with a `+` prefix when `signed` is set and
/// the value is positive
///
/// The sign is decided before rounding, so a small positive value renders as
/// `+0%` rather than `0%`.
///
/// # Example
/// ```
/// use cost_model_core_rs::format::percentage;
///
/// assert_eq!(percentage(104.6, false), "105%");
/// assert_eq!(percentage(104.6, true), "+105%");
/// assert_eq!(percentage(-36.2, true), "-36%");
/// ```
pub fn percentage(value: f64, signed: bool) -> String {
    let sign = if signed && value > 0.0 { "+" } else { "" };
    format!("{}{}%", sign, value.round() as i64)
}

/// Group decimal digits in threes: 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
