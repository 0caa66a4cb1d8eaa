//! REST wrappers for the summarizer backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included by
//! the browser. Server-side (SSR): stubs returning `false`/`Err` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are expected to carry a JSON body with a `detail`
//! field; absence of that field, and transport failures, collapse to an
//! operation-specific fallback message. Callers get message strings, never
//! panics, so a dead backend degrades the UI instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SummaryRecord;

/// Listing endpoint, doubling as the session probe (any authenticated read
/// works; this is the cheapest one).
#[cfg(any(test, feature = "hydrate"))]
const SUMMARIES_ENDPOINT: &str = "/api/v1/summaries";
/// Upload endpoint. The backend routes the multipart handler under the
/// trailing slash; both spellings reach the same resource through the proxy.
#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_ENDPOINT: &str = "/api/v1/summaries/";
#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
#[cfg(feature = "hydrate")]
const REGISTER_ENDPOINT: &str = "/api/v1/auth/register";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/v1/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Login failed";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FALLBACK: &str = "Registration failed";
#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_FALLBACK: &str = "Upload failed";

/// Extract the backend's `detail` message from an error body, falling back to
/// a generic message when the body is not JSON or carries no detail.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn summaries_request_failed_message(status: u16) -> String {
    format!("Failed to fetch summaries ({status})")
}

/// Check whether the browser still holds a valid session cookie by issuing a
/// harmless authenticated read. Never fails the caller: transport errors and
/// non-success statuses all mean "not authenticated".
pub async fn probe_session() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({});
        let Ok(request) = gloo_net::http::Request::post(SUMMARIES_ENDPOINT).json(&payload) else {
            return false;
        };
        match request.send().await {
            Ok(resp) => resp.ok(),
            Err(e) => {
                leptos::logging::warn!("session probe failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Submit credentials via `POST /api/v1/auth/login`. Success sets the session
/// cookie; the body is opaque.
///
/// # Errors
///
/// Returns the backend `detail` message, or a generic fallback, when the
/// credentials are rejected or the request fails.
pub async fn login(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(LOGIN_ENDPOINT, email, password, LOGIN_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/v1/auth/register`. Success does not
/// establish a session.
///
/// # Errors
///
/// Returns the backend `detail` message, or a generic fallback, when the
/// registration is rejected or the request fails.
pub async fn register(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(REGISTER_ENDPOINT, email, password, REGISTER_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn post_credentials(
    endpoint: &str,
    email: &str,
    password: &str,
    fallback: &str,
) -> Result<(), String> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let resp = gloo_net::http::Request::post(endpoint)
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(error_detail(&body, fallback));
    }
    Ok(())
}

/// End the session via `POST /api/v1/auth/logout`. The response is ignored:
/// the caller clears local identity regardless of what the server says.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}

/// Fetch the current user's summaries via `POST /api/v1/summaries`.
///
/// # Errors
///
/// A non-success response is a hard failure for this fetch cycle; no detail
/// body is consulted.
pub async fn fetch_summaries() -> Result<Vec<SummaryRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({});
        let resp = gloo_net::http::Request::post(SUMMARIES_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(summaries_request_failed_message(resp.status()));
        }
        resp.json::<Vec<SummaryRecord>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Upload one document as a multipart request via `POST /api/v1/summaries/`
/// and wait for the resulting summary record. The whole file goes up in one
/// request; there is no chunking or progress reporting.
///
/// # Errors
///
/// Returns the backend `detail` message, or a generic fallback, when the
/// upload is rejected or the request fails.
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: web_sys::File) -> Result<SummaryRecord, String> {
    let form = web_sys::FormData::new().map_err(|_| UPLOAD_FALLBACK.to_owned())?;
    form.append_with_blob("file", &file)
        .map_err(|_| UPLOAD_FALLBACK.to_owned())?;

    let resp = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(error_detail(&body, UPLOAD_FALLBACK));
    }
    resp.json::<SummaryRecord>().await.map_err(|e| e.to_string())
}
