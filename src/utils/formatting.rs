//! Formatting utilities used for CSV cells, spinners and CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a float the way the output file expects it: shortest decimal form,
/// always with a fractional part (`22.0`, `12.5`, `0.01`).
pub fn format_decimal(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Number of decimals a spinner step carries (0.1 → 1, 0.01 → 2, 1 → 0).
pub fn step_decimals(step: f64) -> usize {
    (0..=6)
        .find(|d| {
            let scaled = step * 10f64.powi(*d as i32);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(6)
}

/// Render a spinner bound or step without a trailing `.0` noise for integers.
pub fn format_bound(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
