//! ANSI color helpers for terminal output.

use ansi_term::Colour;

/// Attendance percentage color:
/// \>= 90 → green
/// \>= 75 → yellow
/// below → red
pub fn color_for_percentage(pct: f64) -> Colour {
    if pct >= 90.0 {
        Colour::Green
    } else if pct >= 75.0 {
        Colour::Yellow
    } else {
        Colour::Red
    }
}

/// `83.33 %` painted with its percentage color.
pub fn paint_percentage(pct: f64) -> String {
    color_for_percentage(pct)
        .paint(format!("{pct:.2} %"))
        .to_string()
}

/// Colored rendering of a statement value; non-numeric values stay plain,
/// emphasized ones turn cyan.
pub fn colorize_value(value: &str, emphasized: bool) -> String {
    let numeric = value
        .split_whitespace()
        .next()
        .and_then(|v| v.parse::<f64>().ok());

    match (emphasized, numeric) {
        (true, _) => Colour::Cyan.paint(value).to_string(),
        (false, Some(v)) if v == 0.0 => Colour::Fixed(8).paint(value).to_string(),
        _ => value.to_string(),
    }
}
