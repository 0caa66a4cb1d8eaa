//! Reverse proxy for the summarizer backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks same-origin; every `/api/v1/*` request is forwarded
//! to the upstream configured via `SUMMARIZER_API_URL`. The proxy relays the
//! session cookie in both directions and otherwise stays out of the way — the
//! backend remains the authority on auth and on which files it accepts.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced while forwarding a request upstream.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid upstream URL: {0}")]
    InvalidUpstream(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("response assembly failed: {0}")]
    Assembly(#[from] axum::http::Error),
}

/// Shared HTTP client plus the upstream origin for API forwarding.
#[derive(Clone)]
pub struct ApiProxy {
    client: reqwest::Client,
    upstream: String,
}

impl ApiProxy {
    /// Build a proxy for `upstream` (scheme + authority; a trailing slash is
    /// tolerated and stripped).
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::InvalidUpstream` when the origin does not parse
    /// as an absolute URL.
    pub fn new(upstream: impl Into<String>) -> Result<Self, ProxyError> {
        let upstream = normalize_upstream(upstream.into());
        reqwest::Url::parse(&upstream)
            .map_err(|e| ProxyError::InvalidUpstream(e.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            upstream,
        })
    }

    fn target_url(&self, uri: &Uri) -> String {
        upstream_url(&self.upstream, uri)
    }
}

/// Strip trailing slashes so path joins stay predictable.
fn normalize_upstream(mut upstream: String) -> String {
    while upstream.ends_with('/') {
        upstream.pop();
    }
    upstream
}

/// Join the upstream origin with the original request path and query. The
/// path is forwarded verbatim — including the upload endpoint's trailing
/// slash, which the backend routes on.
fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{upstream}{path_and_query}")
}

/// Request headers forwarded upstream. The cookie carries the backend
/// session; hop-by-hop and host headers stay behind, and reqwest recomputes
/// content-length from the body.
fn forward_request_header(name: &HeaderName) -> bool {
    matches!(name.as_str(), "cookie" | "content-type" | "accept")
}

/// Response headers relayed back to the browser.
fn forward_response_header(name: &HeaderName) -> bool {
    matches!(name.as_str(), "set-cookie" | "content-type")
}

/// Axum handler forwarding one `/api/v1/*` request upstream.
pub async fn forward(
    State(proxy): State<ApiProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match proxy_request(&proxy, method, &uri, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, path = uri.path(), "api proxy failed");
            bad_gateway()
        }
    }
}

async fn proxy_request(
    proxy: &ApiProxy,
    method: Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let mut request = proxy
        .client
        .request(method, proxy.target_url(uri))
        .body(body);
    for (name, value) in headers {
        if forward_request_header(name) {
            request = request.header(name, value);
        }
    }

    let upstream = request.send().await?;

    let mut builder = Response::builder().status(upstream.status());
    for (name, value) in upstream.headers() {
        if forward_response_header(name) {
            builder = builder.header(name, value);
        }
    }
    let bytes = upstream.bytes().await?;
    Ok(builder.body(Body::from(bytes))?)
}

/// 502 with the JSON error convention the client already understands.
fn bad_gateway() -> Response {
    let body = serde_json::json!({ "detail": "Summarizer backend is unreachable." });
    (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
}
