//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is constructed by the root component and
//! provided via context; route guards and user-aware components read and
//! write it through that handle. The state itself is a plain value with an
//! explicit lifecycle so it stays natively testable.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiError, SessionFetch};
use crate::net::types::AuthUser;

/// The current user, whether the session has been checked this page load,
/// and the last infrastructure failure observed while checking.
///
/// Invariant: once `checked` is true and `user` is `None`, the visitor is
/// treated as unauthenticated without another fetch. The flag is never
/// reset within a page load, so a session revoked server-side mid-visit is
/// only noticed on the next full load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    pub checked: bool,
    /// Set when the last session check failed for infrastructure reasons
    /// (as opposed to the server reporting "not signed in").
    pub last_error: Option<ApiError>,
}

impl SessionState {
    /// Fresh, unchecked state for a new page load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a session fetch. Always marks the session as
    /// checked; any non-authenticated outcome clears the user.
    pub fn apply_fetch(&mut self, outcome: SessionFetch) {
        match outcome {
            SessionFetch::Authenticated(user) => {
                self.user = Some(user);
                self.last_error = None;
            }
            SessionFetch::Unauthenticated => {
                self.user = None;
                self.last_error = None;
            }
            SessionFetch::Failed(error) => {
                self.user = None;
                self.last_error = Some(error);
            }
        }
        self.checked = true;
    }

    /// Clear the user after an explicit sign-out. The session stays
    /// checked — we know exactly what state it is in.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.last_error = None;
        self.checked = true;
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
