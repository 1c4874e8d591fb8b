//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (accents and emoji count correctly).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut `s` to at most `width` columns, ending with "…" when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    for c in s.chars() {
        let next = format!("{out}{c}");
        if UnicodeWidthStr::width(next.as_str()) + 1 > width {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}

/// Volume in ml with a fixed number of decimals, e.g. "2.34 ml".
pub fn fmt_ml(value: f64, decimals: usize) -> String {
    format!("{:.*} ml", decimals, value)
}

/// Compact number: no trailing ".0" for whole values.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// "160 mg / 5 ml (32 mg/ml)"
pub fn fmt_concentration(mg: f64, ml: f64) -> String {
    format!(
        "{} mg / {} ml ({} mg/ml)",
        fmt_num(mg),
        fmt_num(ml),
        fmt_num((mg / ml * 100.0).round() / 100.0)
    )
}

/// "10–15 mg/kg/day"
pub fn fmt_dose_range(min: f64, max: f64) -> String {
    format!("{}–{} mg/kg/day", fmt_num(min), fmt_num(max))
}
