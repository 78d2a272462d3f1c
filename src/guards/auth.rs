//! Global authentication guard.
//!
//! Runs on every navigation before the permission guard: makes sure the
//! session has been checked once this page load, then routes visitors by
//! authentication state. Redirect targets are loop-guarded so the guard
//! never bounces a visitor off the page it would redirect to.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::routes;
use super::GuardOutcome;
use crate::env::Environment;
use crate::net::api::ApiClient;
use crate::state::session::SessionState;

/// Decide the outcome of a navigation given an already-checked session.
///
/// On the server every navigation is allowed: public pages render, and a
/// protected load proceeds so the client can correct it immediately after
/// hydration.
#[must_use]
pub fn auth_guard_decision(env: Environment, path: &str, session: &SessionState) -> GuardOutcome {
    if !env.is_client() {
        return GuardOutcome::Allow;
    }

    let logged_in = session.is_logged_in();

    if routes::is_public(path) {
        if logged_in && routes::is_guest_only(path) {
            return GuardOutcome::Redirect("/");
        }
        return GuardOutcome::Allow;
    }

    if !logged_in && path != "/login" {
        return GuardOutcome::Redirect("/login");
    }
    GuardOutcome::Allow
}

/// Ensure the session is checked (at most one fetch per page load), then
/// decide the navigation.
pub async fn run_auth_guard(
    env: Environment,
    session: RwSignal<SessionState>,
    api: &ApiClient,
    path: &str,
) -> GuardOutcome {
    if env.is_client() && !session.get_untracked().checked {
        let outcome = api.fetch_current_user().await;
        session.update(|s| s.apply_fetch(outcome));
    }
    let state = session.get_untracked();
    auth_guard_decision(env, path, &state)
}
