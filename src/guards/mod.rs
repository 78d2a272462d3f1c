//! Navigation guards: authentication and per-route permissions.
//!
//! ARCHITECTURE
//! ============
//! Guard logic is split into pure decision functions (`auth`, `permission`)
//! over an explicit [`Environment`] and session snapshot, plus this
//! module's wiring: a sequential pipeline that always completes the global
//! auth guard before the permission guard runs, and a [`RouteGuards`]
//! component that re-runs the pipeline on every path change and applies
//! redirects. In-flight checks are not cancelled by a superseding
//! navigation; the later run simply decides again.

pub mod auth;
pub mod permission;
pub mod routes;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::env::Environment;
use crate::net::api::ApiClient;
use crate::state::session::SessionState;

/// What a guard decided about a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation proceed.
    Allow,
    /// Send the visitor elsewhere.
    Redirect(&'static str),
}

/// Run both guards for one navigation. The auth guard's session check
/// completes (or fails) before the permission guard reads the state, and
/// the permission guard only runs on routes that declare permissions.
pub async fn run_navigation_guards(
    env: Environment,
    session: RwSignal<SessionState>,
    api: &ApiClient,
    path: &str,
) -> GuardOutcome {
    let outcome = auth::run_auth_guard(env, session, api, path).await;
    if outcome != GuardOutcome::Allow {
        return outcome;
    }
    let Some(required) = routes::route_permissions(path) else {
        return GuardOutcome::Allow;
    };
    let state = session.get_untracked();
    permission::permission_guard_decision(env, path, &state, Some(&required))
}

/// Invisible component that guards every client-side navigation.
///
/// Must live inside the `Router` so it can observe the location and
/// navigate. Effects never run during the server render pass, which is the
/// server's pass-through behavior.
#[component]
pub fn RouteGuards() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome =
                    run_navigation_guards(Environment::current(), session, &api, &path).await;
                if let GuardOutcome::Redirect(target) = outcome {
                    navigate(target, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&path, &api, &navigate);
        }
    });
}
