use super::*;

// =============================================================
// Cookie parsing
// =============================================================

#[test]
fn token_extracted_from_cookie_list() {
    let cookies = "laravel_session=abc; XSRF-TOKEN=tok123; other=1";
    assert_eq!(xsrf_token_from_cookies(cookies).as_deref(), Some("tok123"));
}

#[test]
fn token_value_is_url_decoded() {
    let cookies = "XSRF-TOKEN=eyJpdiI6%3D%3D; path=/";
    assert_eq!(xsrf_token_from_cookies(cookies).as_deref(), Some("eyJpdiI6=="));
}

#[test]
fn missing_or_empty_cookie_yields_none() {
    assert_eq!(xsrf_token_from_cookies(""), None);
    assert_eq!(xsrf_token_from_cookies("laravel_session=abc"), None);
    assert_eq!(xsrf_token_from_cookies("XSRF-TOKEN="), None);
}

#[test]
fn prefix_match_requires_the_exact_cookie_name() {
    // A cookie whose name merely starts with XSRF-TOKEN must not match.
    assert_eq!(xsrf_token_from_cookies("XSRF-TOKEN-OLD=zzz"), None);
}

#[test]
fn malformed_escapes_pass_through() {
    assert_eq!(xsrf_token_from_cookies("XSRF-TOKEN=a%2").as_deref(), Some("a%2"));
    assert_eq!(xsrf_token_from_cookies("XSRF-TOKEN=a%zz").as_deref(), Some("a%zz"));
}

// =============================================================
// Handshake plan
// =============================================================

#[test]
fn existing_cookie_skips_the_handshake() {
    assert_eq!(
        csrf_plan(Some("tok".to_owned())),
        CsrfPlan::UseExisting("tok".to_owned())
    );
}

#[test]
fn absent_cookie_requires_exactly_one_handshake() {
    assert_eq!(csrf_plan(None), CsrfPlan::Handshake);
}

#[test]
fn handshake_endpoint_is_on_the_api_host() {
    assert_eq!(
        handshake_endpoint("http://localhost:8000"),
        "http://localhost:8000/sanctum/csrf-cookie"
    );
}
