//! Formatting and parsing for Colombian peso (COP) amounts.
//!
//! DESIGN
//! ======
//! Money inputs edit a display string with `.` as the thousands separator
//! and `,` as the decimal separator (`1.234.567,50`). These helpers convert
//! between that display form and the numeric values the API expects, and
//! gate which keystrokes a money input accepts.

#[cfg(test)]
#[path = "pesos_test.rs"]
mod pesos_test;

/// Editing and navigation keys a money input always accepts.
const EDITING_KEYS: [&str; 7] = [
    "Backspace",
    "Delete",
    "Tab",
    "ArrowLeft",
    "ArrowRight",
    "Home",
    "End",
];

/// Format an amount with `.` thousands separators and a `,` decimal part.
///
/// Two decimal digits are computed internally; the decimal suffix is
/// omitted entirely for whole values. Absent or NaN input formats as `""`.
#[must_use]
pub fn format_pesos(value: Option<f64>) -> String {
    let Some(num) = value else {
        return String::new();
    };
    if num.is_nan() {
        return String::new();
    }

    let fixed = format!("{num:.2}");
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let grouped = group_thousands(digits);
    if num.fract() == 0.0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{dec_part}")
    }
}

/// Insert a `.` separator every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Strip every character except digits, `.` and `,`.
#[must_use]
pub fn filter_pesos_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect()
}

/// Parse a peso display string (`1.234.567` or `1.234.567,50`) to a number.
///
/// The last comma is the decimal marker; every dot before it is a thousands
/// separator. Fractional digits are truncated to two. Returns `None` for
/// empty, invalid, or negative input.
#[must_use]
pub fn parse_pesos_input(input: &str) -> Option<f64> {
    if input.contains('-') {
        return None;
    }
    let trimmed = filter_pesos_chars(input);
    if trimmed.is_empty() {
        return None;
    }

    let (int_raw, dec_raw) = match trimmed.rfind(',') {
        Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
        None => (trimmed.as_str(), ""),
    };
    let int_str: String = int_raw.chars().filter(|c| *c != '.').collect();
    if !int_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let dec_str: String = dec_raw.chars().filter(char::is_ascii_digit).take(2).collect();

    let combined = if dec_str.is_empty() {
        int_str
    } else {
        format!("{int_str}.{dec_str}")
    };
    if combined.is_empty() {
        return Some(0.0);
    }
    let num = combined.parse::<f64>().ok()?;
    if num.is_nan() || num < 0.0 { None } else { Some(num) }
}

/// Whether a money input should accept a keystroke.
///
/// Admits digits, `.` and `,`, the standard editing/navigation keys, and
/// any modifier chord; every other printable character is rejected.
#[must_use]
pub fn pesos_key_allowed(key: &str, ctrl_or_meta: bool) -> bool {
    if ctrl_or_meta || EDITING_KEYS.contains(&key) {
        return true;
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit() || c == '.' || c == ',',
        // Named keys ("Enter", "Shift", ...) never insert a character.
        _ => true,
    }
}
