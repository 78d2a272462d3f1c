//! Credentialed document downloads with a client-side save.
//!
//! SYSTEM CONTEXT
//! ==============
//! Document links cannot be plain anchors: the download endpoint requires
//! the session cookie and CSRF header, and a bare navigation would bounce
//! through the login redirect. The helper fetches the payload itself and
//! hands it to the browser as an object-URL save.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::api::ApiConfig;

#[cfg(feature = "hydrate")]
use crate::net::csrf;

/// Name used when neither the caller nor the response supplies one.
pub const FALLBACK_FILENAME: &str = "documento";

/// Failure modes of a document download.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    /// The request never produced a response.
    #[error("download request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("download failed with status {0}")]
    Status(u16),
    /// The browser refused one of the save steps (blob, object URL, DOM).
    #[error("could not save the document: {0}")]
    Save(String),
    /// Downloads only work in a browser session.
    #[error("downloads are not available on the server")]
    Unsupported,
}

/// Download URL for one stored document.
#[must_use]
pub fn download_endpoint(api_base: &str, application_id: i64, document_id: i64) -> String {
    format!("{api_base}/api/credit-applications/{application_id}/documents/{document_id}/download")
}

/// Extract a filename from a `Content-Disposition` header value, accepting
/// quoted and unquoted `filename` tokens.
#[must_use]
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let start = header.find("filename")?;
    let rest = &header[start..];
    let (_, after_eq) = rest.split_once('=')?;
    let raw = after_eq.split(';').next().unwrap_or(after_eq);
    let cleaned: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_owned())
    }
}

/// Output filename precedence: explicit argument, then the response's
/// `Content-Disposition`, then [`FALLBACK_FILENAME`].
#[must_use]
pub fn resolve_filename(explicit: Option<&str>, disposition: Option<&str>) -> String {
    if let Some(name) = explicit {
        if !name.is_empty() {
            return name.to_owned();
        }
    }
    disposition
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| FALLBACK_FILENAME.to_owned())
}

/// Fetch a document with session credentials and save it client-side.
///
/// # Errors
///
/// Returns [`DownloadError::Status`] when the server answers with a
/// non-success status, and the other variants for transport or browser
/// failures.
pub async fn download_document(
    config: &ApiConfig,
    application_id: i64,
    document_id: i64,
    filename: Option<&str>,
) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        let token = csrf::ensure_csrf_cookie(config).await;
        let url = download_endpoint(&config.api_base, application_id, document_id);

        let mut builder = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .header("Accept", "*/*")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = token.as_deref() {
            builder = builder.header(csrf::XSRF_HEADER, token);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(DownloadError::Status(resp.status()));
        }

        let disposition = resp.headers().get("Content-Disposition");
        let name = resolve_filename(filename, disposition.as_deref());
        let bytes = resp
            .binary()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;
        save_bytes(&bytes, &name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, application_id, document_id, filename);
        Err(DownloadError::Unsupported)
    }
}

/// Hand the payload to the browser: object URL + synthetic anchor click.
#[cfg(feature = "hydrate")]
fn save_bytes(bytes: &[u8], filename: &str) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| DownloadError::Save(format!("{e:?}")))?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| DownloadError::Save(format!("{e:?}")))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Save("no document".to_owned()))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| DownloadError::Save(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| DownloadError::Save("anchor element".to_owned()))?;
    anchor.set_href(&object_url);
    anchor.set_download(filename);

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    } else {
        anchor.click();
    }
    let _ = web_sys::Url::revoke_object_url(&object_url);
    Ok(())
}
