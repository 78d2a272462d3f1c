//! CSRF double-submit token handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API uses Sanctum-style CSRF protection: the server sets an
//! `XSRF-TOKEN` cookie and expects its URL-decoded value echoed back in the
//! `X-XSRF-TOKEN` header. The cookie itself is the only token store — every
//! request re-reads `document.cookie`, and a missing cookie triggers a
//! single handshake request that causes the server to set it.
//!
//! ERROR HANDLING
//! ==============
//! Handshake failures are logged and swallowed; callers proceed without the
//! header and let the eventual API response surface the error.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use crate::net::api::ApiConfig;

/// Cookie the server sets during the CSRF handshake.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header the token is echoed back in.
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// How to obtain a token given the current cookie value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CsrfPlan {
    /// A cookie is present; use its value directly.
    UseExisting(String),
    /// No cookie yet; issue one handshake request, then re-read.
    Handshake,
}

/// Decide the token plan for the current cookie state.
#[must_use]
pub fn csrf_plan(current: Option<String>) -> CsrfPlan {
    match current {
        Some(token) => CsrfPlan::UseExisting(token),
        None => CsrfPlan::Handshake,
    }
}

/// Handshake URL on the API host.
#[must_use]
pub fn handshake_endpoint(api_base: &str) -> String {
    format!("{api_base}/sanctum/csrf-cookie")
}

/// Extract and URL-decode the `XSRF-TOKEN` value from a cookie header
/// string (`"a=1; XSRF-TOKEN=abc%3D; b=2"`).
#[must_use]
pub fn xsrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let value = pair.trim().strip_prefix(XSRF_COOKIE)?.strip_prefix('=')?;
        if value.is_empty() {
            None
        } else {
            Some(percent_decode(value))
        }
    })
}

/// Decode `%XX` escapes; malformed escapes pass through verbatim.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(decoded) = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
            {
                out.push(decoded);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Read the CSRF cookie from `document.cookie`. Browser only.
#[must_use]
pub fn read_xsrf_cookie() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
        xsrf_token_from_cookies(&cookies)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Ensure a CSRF cookie exists, issuing at most one handshake request, and
/// return its token value. `None` on the server or when the handshake
/// could not produce a cookie.
pub async fn ensure_csrf_cookie(config: &ApiConfig) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        match csrf_plan(read_xsrf_cookie()) {
            CsrfPlan::UseExisting(token) => Some(token),
            CsrfPlan::Handshake => {
                let request = gloo_net::http::Request::get(&handshake_endpoint(&config.api_base))
                    .credentials(web_sys::RequestCredentials::Include);
                if let Err(e) = request.send().await {
                    log::warn!("CSRF handshake failed: {e}");
                }
                read_xsrf_cookie()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}
