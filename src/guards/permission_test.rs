use super::*;
use crate::net::api::SessionFetch;
use crate::net::types::AuthUser;

fn session_with(roles: &[&str], permissions: &[&str]) -> SessionState {
    let user: AuthUser = serde_json::from_value(serde_json::json!({
        "id": 2,
        "name": "Julián",
        "email": "julian@example.com",
        "roles": roles,
        "permissions": permissions,
    }))
    .expect("user");
    let mut state = SessionState::new();
    state.apply_fetch(SessionFetch::Authenticated(user));
    state
}

fn anonymous() -> SessionState {
    let mut state = SessionState::new();
    state.apply_fetch(SessionFetch::Unauthenticated);
    state
}

fn required(declaration: &str) -> RequiredPermissions {
    RequiredPermissions::parse(declaration)
}

#[test]
fn server_pass_through() {
    let state = anonymous();
    assert_eq!(
        permission_guard_decision(Environment::Server, "/users", &state, Some(&required("users.view"))),
        GuardOutcome::Allow
    );
}

#[test]
fn anonymous_visitor_redirects_to_login_without_looping() {
    let state = anonymous();
    assert_eq!(
        permission_guard_decision(Environment::Client, "/users", &state, Some(&required("users.view"))),
        GuardOutcome::Redirect("/login")
    );
    assert_eq!(
        permission_guard_decision(Environment::Client, "/login", &state, None),
        GuardOutcome::Allow
    );
}

#[test]
fn missing_permission_redirects_to_unauthorized() {
    let state = session_with(&["analyst"], &["credit-applications.view"]);
    assert_eq!(
        permission_guard_decision(Environment::Client, "/users", &state, Some(&required("users.edit"))),
        GuardOutcome::Redirect("/unauthorized")
    );
}

#[test]
fn unauthorized_page_does_not_redirect_to_itself() {
    let state = session_with(&["analyst"], &[]);
    assert_eq!(
        permission_guard_decision(
            Environment::Client,
            "/unauthorized",
            &state,
            Some(&required("users.edit"))
        ),
        GuardOutcome::Allow
    );
}

#[test]
fn any_required_permission_grants_access() {
    let state = session_with(&["analyst"], &["credit-applications.edit"]);
    assert_eq!(
        permission_guard_decision(
            Environment::Client,
            "/credit-applications/new",
            &state,
            Some(&required("credit-applications.create|credit-applications.edit"))
        ),
        GuardOutcome::Allow
    );
}

#[test]
fn admin_bypasses_permission_checks() {
    let state = session_with(&["admin"], &[]);
    assert_eq!(
        permission_guard_decision(Environment::Client, "/users", &state, Some(&required("users.view"))),
        GuardOutcome::Allow
    );
    let state = session_with(&["super_admin"], &[]);
    assert_eq!(
        permission_guard_decision(Environment::Client, "/users", &state, Some(&required("users.view"))),
        GuardOutcome::Allow
    );
}

#[test]
fn route_without_requirements_is_open_to_any_user() {
    let state = session_with(&["analyst"], &[]);
    assert_eq!(
        permission_guard_decision(Environment::Client, "/", &state, None),
        GuardOutcome::Allow
    );
}

#[test]
fn empty_requirement_set_is_open() {
    let state = session_with(&["analyst"], &[]);
    assert_eq!(
        permission_guard_decision(Environment::Client, "/", &state, Some(&required(""))),
        GuardOutcome::Allow
    );
}
