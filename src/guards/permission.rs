//! Per-route permission guard.
//!
//! Runs after the global guard within the same navigation, so the session
//! is already checked by the time it reads the state. Administrators
//! bypass fine-grained checks; everyone else needs at least one of the
//! route's required permissions.

#[cfg(test)]
#[path = "permission_test.rs"]
mod permission_test;

use super::routes::RequiredPermissions;
use super::GuardOutcome;
use crate::env::Environment;
use crate::state::session::SessionState;
use crate::util::permissions::PermissionEvaluator;

/// Decide whether the session may enter a permission-gated route.
#[must_use]
pub fn permission_guard_decision(
    env: Environment,
    path: &str,
    session: &SessionState,
    required: Option<&RequiredPermissions>,
) -> GuardOutcome {
    if !env.is_client() {
        return GuardOutcome::Allow;
    }

    let Some(user) = session.user.as_ref() else {
        if path == "/login" {
            return GuardOutcome::Allow;
        }
        return GuardOutcome::Redirect("/login");
    };

    let evaluator = PermissionEvaluator::new(env, Some(user));
    if evaluator.is_admin() {
        return GuardOutcome::Allow;
    }

    let Some(required) = required else {
        return GuardOutcome::Allow;
    };
    if required.is_empty() || evaluator.has_any_permission(required.names()) {
        return GuardOutcome::Allow;
    }

    if path == "/unauthorized" {
        return GuardOutcome::Allow;
    }
    GuardOutcome::Redirect("/unauthorized")
}
