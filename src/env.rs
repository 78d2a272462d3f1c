//! Execution environment for guard and permission decisions.
//!
//! DESIGN
//! ======
//! Server-rendered and browser execution take different code paths (session
//! checks and permission evaluation are browser-only). Passing the
//! environment as an explicit value keeps both paths natively testable
//! instead of scattering feature checks through every decision.

/// Where the current navigation or evaluation is executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Server-side render pass; no cookies or session are resolvable.
    Server,
    /// Hydrated browser session with cookie and DOM access.
    Client,
}

impl Environment {
    /// The environment this build is actually running in.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::Client
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Server
        }
    }

    /// `true` when browser APIs (cookies, DOM, storage) are available.
    #[must_use]
    pub fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }
}
