//! Percentage formatting helpers

/// Render a [0, 1] metric as a percentage with exactly two decimal digits
///
/// `0.9934` becomes `"99.34"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value * 100.0)
}

/// Render an already-scaled percentage delta with an explicit sign
///
/// Positive deltas get a `+` prefix; a delta that rounds to zero is
/// rendered as `"0.00"` with no sign.
pub fn format_signed_percent(delta: f64) -> String {
    let s = format!("{delta:.2}");
    if s == "-0.00" {
        return "0.00".to_string();
    }
    if s.starts_with('-') || s == "0.00" {
        s
    } else {
        format!("+{s}")
    }
}
