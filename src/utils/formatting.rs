//! Formatting utilities used for report cells and terminal output.

use ansi_term::Style;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Two fixed decimals: `95.45`, `95.00`.
pub fn fixed2(x: f64) -> String {
    format!("{:.2}", x)
}

/// Numeric counts as stored in the sheet: integral values print without a
/// decimal part, anything else with at most two decimals.
///
/// `12.0` → `12`, `3.5` → `3.5`, `3.456` → `3.46`
pub fn count(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        return format!("{}", x as i64);
    }

    let s = format!("{:.2}", x);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
