//! HTTP client for the credit-application API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, credentialed for
//! the cookie session and carrying the CSRF header from [`crate::net::csrf`].
//! Server-side (SSR): stubs reporting the session as unresolved, since the
//! API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>` except the session fetch,
//! whose [`SessionFetch`] outcome distinguishes "not signed in" from
//! "could not reach or understand the server" so the UI can offer a retry
//! instead of silently presenting a logged-out state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{
    AuthUser, CreditApplicationForm, CreditApplicationSummary, CreditDocument, Paginated, User,
};

#[cfg(feature = "hydrate")]
use crate::net::csrf;

/// Connection settings for the API host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API host, without a trailing slash.
    pub api_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("CREDISOL_API_BASE")
                .unwrap_or("http://localhost:8000")
                .to_owned(),
        }
    }
}

/// Failure modes of an API operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, server
    /// render).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Outcome of a session fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionFetch {
    /// A signed-in user was returned.
    Authenticated(AuthUser),
    /// The server explicitly reported no session (401/419).
    Unauthenticated,
    /// The session could not be resolved for infrastructure reasons.
    Failed(ApiError),
}

/// Map a raw session-endpoint result onto a [`SessionFetch`].
///
/// 401 and 419 (Sanctum's CSRF/session expiry status) mean "not signed
/// in"; everything else is an infrastructure failure.
#[must_use]
pub fn session_fetch_from_result(result: Result<AuthUser, ApiError>) -> SessionFetch {
    match result {
        Ok(user) => SessionFetch::Authenticated(user),
        Err(ApiError::Status(401 | 419)) => SessionFetch::Unauthenticated,
        Err(e) => SessionFetch::Failed(e),
    }
}

/// HTTP client bound to one [`ApiConfig`], shared via Leptos context.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// URL under the `/api` prefix.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{path}", self.config.api_base)
    }

    /// URL on the host root (session endpoints live outside `/api`).
    #[must_use]
    pub fn root_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base)
    }

    /// Fetch the currently authenticated user from `GET /api/user`.
    pub async fn fetch_current_user(&self) -> SessionFetch {
        #[cfg(feature = "hydrate")]
        {
            session_fetch_from_result(self.get_json::<AuthUser>(&self.api_url("/user")).await)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            SessionFetch::Unauthenticated
        }
    }

    /// Sign in with email and password via `POST /login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "email": email, "password": password });
        self.post_json_no_content(&self.root_url("/login"), &payload).await
    }

    /// End the current session via `POST /logout`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_json_no_content(&self.root_url("/logout"), &serde_json::json!({})).await
    }

    /// Create an account via `POST /register`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<(), ApiError> {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "password_confirmation": password_confirmation,
        });
        self.post_json_no_content(&self.root_url("/register"), &payload).await
    }

    /// Request a password-reset email via `POST /forgot-password`.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "email": email });
        self.post_json_no_content(&self.root_url("/forgot-password"), &payload).await
    }

    /// Complete a password reset via `POST /reset-password`.
    pub async fn reset_password(
        &self,
        token: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<(), ApiError> {
        let payload = serde_json::json!({
            "token": token,
            "email": email,
            "password": password,
            "password_confirmation": password_confirmation,
        });
        self.post_json_no_content(&self.root_url("/reset-password"), &payload).await
    }

    /// Fetch a page of users (admin listing).
    pub async fn fetch_users(&self, page: i64) -> Result<Paginated<User>, ApiError> {
        self.get_json(&self.api_url(&format!("/users?page={page}"))).await
    }

    /// Fetch a page of credit applications.
    pub async fn fetch_credit_applications(
        &self,
        page: i64,
    ) -> Result<Paginated<CreditApplicationSummary>, ApiError> {
        self.get_json(&self.api_url(&format!("/credit-applications?page={page}"))).await
    }

    /// Create or submit a credit application draft.
    pub async fn submit_credit_application(
        &self,
        form: &CreditApplicationForm,
    ) -> Result<CreditApplicationSummary, ApiError> {
        self.post_json(&self.api_url("/credit-applications"), form).await
    }

    /// List the stored documents of an application.
    pub async fn fetch_application_documents(
        &self,
        application_id: i64,
    ) -> Result<Vec<CreditDocument>, ApiError> {
        self.get_json(&self.api_url(&format!("/credit-applications/{application_id}/documents")))
            .await
    }

    /// Attach a document (title + file) to an application.
    ///
    /// The payload is multipart form data; no explicit `Content-Type` is
    /// set so the transport adds the boundary itself.
    #[cfg(feature = "hydrate")]
    pub async fn upload_document(
        &self,
        application_id: i64,
        form_data: &web_sys::FormData,
    ) -> Result<CreditDocument, ApiError> {
        let url = self.api_url(&format!("/credit-applications/{application_id}/documents"));
        let request = self
            .prepare(gloo_net::http::Request::post(&url))
            .await
            .body(form_data.clone())
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode_json(resp).await
    }

    // ---------------------------------------------------------
    // Request plumbing (browser only)
    // ---------------------------------------------------------

    /// Attach session credentials, API headers, and the CSRF token.
    #[cfg(feature = "hydrate")]
    async fn prepare(
        &self,
        builder: gloo_net::http::RequestBuilder,
    ) -> gloo_net::http::RequestBuilder {
        let mut builder = builder
            .credentials(web_sys::RequestCredentials::Include)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = csrf::ensure_csrf_cookie(&self.config).await {
            builder = builder.header(csrf::XSRF_HEADER, &token);
        }
        builder
    }

    #[cfg(feature = "hydrate")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .prepare(gloo_net::http::Request::get(url))
            .await
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode_json(resp).await
    }

    #[cfg(not(feature = "hydrate"))]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let _ = url;
        Err(Self::server_side_error())
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let request = self
            .prepare(gloo_net::http::Request::post(url))
            .await
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode_json(resp).await
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let _ = (url, body);
        Err(Self::server_side_error())
    }

    /// POST whose success responses carry no body (login, logout, ...).
    #[cfg(feature = "hydrate")]
    async fn post_json_no_content(
        &self,
        url: &str,
        body: &impl serde::Serialize,
    ) -> Result<(), ApiError> {
        let request = self
            .prepare(gloo_net::http::Request::post(url))
            .await
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post_json_no_content(
        &self,
        url: &str,
        body: &impl serde::Serialize,
    ) -> Result<(), ApiError> {
        let _ = (url, body);
        Err(Self::server_side_error())
    }

    #[cfg(feature = "hydrate")]
    async fn decode_json<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    fn server_side_error() -> ApiError {
        ApiError::Network("not available on server".to_owned())
    }
}
