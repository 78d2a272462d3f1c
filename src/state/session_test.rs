use super::*;

fn user() -> AuthUser {
    serde_json::from_value(serde_json::json!({
        "id": 9,
        "name": "Marta",
        "email": "marta@example.com",
        "roles": ["analyst"]
    }))
    .expect("user")
}

#[test]
fn new_session_is_unchecked_with_no_user() {
    let state = SessionState::new();
    assert!(state.user.is_none());
    assert!(!state.checked);
    assert!(state.last_error.is_none());
}

#[test]
fn successful_fetch_populates_user_and_marks_checked() {
    let mut state = SessionState::new();
    state.apply_fetch(SessionFetch::Authenticated(user()));
    assert!(state.is_logged_in());
    assert!(state.checked);
    assert!(state.last_error.is_none());
}

#[test]
fn unauthenticated_fetch_clears_user_and_marks_checked() {
    let mut state = SessionState::new();
    state.apply_fetch(SessionFetch::Authenticated(user()));
    state.apply_fetch(SessionFetch::Unauthenticated);
    assert!(!state.is_logged_in());
    assert!(state.checked);
    assert!(state.last_error.is_none());
}

#[test]
fn failed_fetch_records_the_error_and_still_marks_checked() {
    let mut state = SessionState::new();
    state.apply_fetch(SessionFetch::Failed(ApiError::Network("offline".to_owned())));
    assert!(!state.is_logged_in());
    assert!(state.checked);
    assert_eq!(state.last_error, Some(ApiError::Network("offline".to_owned())));
}

#[test]
fn sign_out_clears_user_but_keeps_checked() {
    let mut state = SessionState::new();
    state.apply_fetch(SessionFetch::Authenticated(user()));
    state.sign_out();
    assert!(!state.is_logged_in());
    assert!(state.checked);
}

#[test]
fn checked_with_no_user_reads_as_unauthenticated() {
    let mut state = SessionState::new();
    state.apply_fetch(SessionFetch::Unauthenticated);
    // The guard invariant: no re-fetch is needed to answer this.
    assert!(state.checked);
    assert!(!state.is_logged_in());
}
