use super::*;

// =============================================================
// format_pesos
// =============================================================

#[test]
fn format_whole_value_omits_decimal_suffix() {
    assert_eq!(format_pesos(Some(1_234_567.0)), "1.234.567");
}

#[test]
fn format_fractional_value_keeps_two_decimals() {
    assert_eq!(format_pesos(Some(1_234_567.5)), "1.234.567,50");
}

#[test]
fn format_absent_or_nan_is_empty() {
    assert_eq!(format_pesos(None), "");
    assert_eq!(format_pesos(Some(f64::NAN)), "");
}

#[test]
fn format_small_values_have_no_separator() {
    assert_eq!(format_pesos(Some(0.0)), "0");
    assert_eq!(format_pesos(Some(999.0)), "999");
    assert_eq!(format_pesos(Some(1_000.0)), "1.000");
}

#[test]
fn format_cents_only() {
    assert_eq!(format_pesos(Some(0.5)), "0,50");
    assert_eq!(format_pesos(Some(12.25)), "12,25");
}

// =============================================================
// filter_pesos_chars
// =============================================================

#[test]
fn filter_strips_letters_and_symbols() {
    assert_eq!(filter_pesos_chars("$ 1.234,50 COP"), "1.234,50");
    assert_eq!(filter_pesos_chars("abc"), "");
}

// =============================================================
// parse_pesos_input
// =============================================================

#[test]
fn parse_thousands_and_decimals() {
    assert_eq!(parse_pesos_input("1.234.567,50"), Some(1_234_567.5));
}

#[test]
fn parse_thousands_only() {
    assert_eq!(parse_pesos_input("1.234.567"), Some(1_234_567.0));
}

#[test]
fn parse_empty_is_none() {
    assert_eq!(parse_pesos_input(""), None);
    assert_eq!(parse_pesos_input("   "), None);
}

#[test]
fn parse_negative_is_none() {
    assert_eq!(parse_pesos_input("-5"), None);
    assert_eq!(parse_pesos_input("-1.000,00"), None);
}

#[test]
fn parse_ignores_currency_noise() {
    assert_eq!(parse_pesos_input("$ 2.500"), Some(2_500.0));
}

#[test]
fn parse_truncates_fraction_to_two_digits() {
    assert_eq!(parse_pesos_input("10,999"), Some(10.99));
}

#[test]
fn parse_last_comma_wins_as_decimal_marker() {
    // A stray comma in the integer section makes the input invalid.
    assert_eq!(parse_pesos_input("1,2,3"), None);
    assert_eq!(parse_pesos_input(",50"), Some(0.5));
}

#[test]
fn parse_bare_separators_collapse_to_zero() {
    assert_eq!(parse_pesos_input("."), Some(0.0));
    assert_eq!(parse_pesos_input(","), Some(0.0));
}

#[test]
fn round_trip_preserves_two_decimal_values() {
    let samples = [
        0.0,
        0.5,
        1.0,
        999.99,
        1_000.0,
        12_345.67,
        1_234_567.0,
        1_234_567.5,
        987_654_321.25,
    ];
    for n in samples {
        let formatted = format_pesos(Some(n));
        assert_eq!(parse_pesos_input(&formatted), Some(n), "round trip of {n} via {formatted:?}");
    }
}

// =============================================================
// pesos_key_allowed
// =============================================================

#[test]
fn keystroke_filter_accepts_digits_and_separators() {
    assert!(pesos_key_allowed("5", false));
    assert!(pesos_key_allowed(".", false));
    assert!(pesos_key_allowed(",", false));
}

#[test]
fn keystroke_filter_rejects_letters() {
    assert!(!pesos_key_allowed("a", false));
    assert!(!pesos_key_allowed("$", false));
}

#[test]
fn keystroke_filter_accepts_editing_keys_and_chords() {
    assert!(pesos_key_allowed("Backspace", false));
    assert!(pesos_key_allowed("ArrowLeft", false));
    assert!(pesos_key_allowed("a", true));
    assert!(pesos_key_allowed("Enter", false));
}
