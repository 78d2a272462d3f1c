use super::*;

// Without a browser environment the preference resolves to light and
// toggling only flips the in-memory value.

#[test]
fn preference_defaults_to_light_outside_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_the_current_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
