use super::*;

fn client() -> ApiClient {
    ApiClient::new(ApiConfig { api_base: "http://localhost:8000".to_owned() })
}

#[test]
fn api_url_carries_the_api_prefix() {
    assert_eq!(client().api_url("/user"), "http://localhost:8000/api/user");
    assert_eq!(
        client().api_url("/credit-applications?page=2"),
        "http://localhost:8000/api/credit-applications?page=2"
    );
}

#[test]
fn root_url_skips_the_api_prefix() {
    assert_eq!(client().root_url("/login"), "http://localhost:8000/login");
}

#[test]
fn default_config_points_at_localhost() {
    let config = ApiConfig::default();
    assert!(config.api_base.starts_with("http"));
}

#[test]
fn error_messages_carry_the_status() {
    assert_eq!(ApiError::Status(503).to_string(), "server responded with status 503");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "request failed: offline");
}

#[test]
fn session_fetch_maps_auth_statuses_to_unauthenticated() {
    assert_eq!(
        session_fetch_from_result(Err(ApiError::Status(401))),
        SessionFetch::Unauthenticated
    );
    assert_eq!(
        session_fetch_from_result(Err(ApiError::Status(419))),
        SessionFetch::Unauthenticated
    );
}

#[test]
fn session_fetch_keeps_infrastructure_failures_distinct() {
    assert_eq!(
        session_fetch_from_result(Err(ApiError::Status(500))),
        SessionFetch::Failed(ApiError::Status(500))
    );
    assert_eq!(
        session_fetch_from_result(Err(ApiError::Network("offline".to_owned()))),
        SessionFetch::Failed(ApiError::Network("offline".to_owned()))
    );
}

#[test]
fn session_fetch_wraps_a_returned_user() {
    let user: crate::net::types::AuthUser = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Ana",
        "email": "ana@example.com"
    }))
    .expect("user");
    match session_fetch_from_result(Ok(user)) {
        SessionFetch::Authenticated(u) => assert_eq!(u.name, "Ana"),
        other => panic!("expected Authenticated, got {other:?}"),
    }
}
