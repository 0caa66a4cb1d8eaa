use axum::http::Uri;

use super::*;

// =============================================================
// Upstream URL construction
// =============================================================

#[test]
fn normalize_strips_trailing_slashes() {
    assert_eq!(normalize_upstream("http://localhost:8000/".to_owned()), "http://localhost:8000");
    assert_eq!(normalize_upstream("http://localhost:8000".to_owned()), "http://localhost:8000");
}

#[test]
fn upstream_url_joins_origin_and_path() {
    let uri: Uri = "/api/v1/summaries".parse().unwrap();
    assert_eq!(
        upstream_url("http://localhost:8000", &uri),
        "http://localhost:8000/api/v1/summaries"
    );
}

#[test]
fn upstream_url_keeps_the_upload_trailing_slash() {
    let uri: Uri = "/api/v1/summaries/".parse().unwrap();
    assert_eq!(
        upstream_url("http://localhost:8000", &uri),
        "http://localhost:8000/api/v1/summaries/"
    );
}

#[test]
fn upstream_url_keeps_the_query_string() {
    let uri: Uri = "/api/v1/summaries?page=2".parse().unwrap();
    assert_eq!(
        upstream_url("http://localhost:8000", &uri),
        "http://localhost:8000/api/v1/summaries?page=2"
    );
}

// =============================================================
// Header forwarding
// =============================================================

#[test]
fn session_cookie_and_body_headers_go_upstream() {
    assert!(forward_request_header(&HeaderName::from_static("cookie")));
    assert!(forward_request_header(&HeaderName::from_static("content-type")));
    assert!(forward_request_header(&HeaderName::from_static("accept")));
}

#[test]
fn host_and_hop_by_hop_headers_stay_behind() {
    assert!(!forward_request_header(&HeaderName::from_static("host")));
    assert!(!forward_request_header(&HeaderName::from_static("connection")));
    assert!(!forward_request_header(&HeaderName::from_static("content-length")));
}

#[test]
fn set_cookie_comes_back_to_the_browser() {
    assert!(forward_response_header(&HeaderName::from_static("set-cookie")));
    assert!(forward_response_header(&HeaderName::from_static("content-type")));
    assert!(!forward_response_header(&HeaderName::from_static("transfer-encoding")));
}

// =============================================================
// Proxy construction
// =============================================================

#[test]
fn proxy_rejects_a_relative_upstream() {
    assert!(matches!(
        ApiProxy::new("not-a-url"),
        Err(ProxyError::InvalidUpstream(_))
    ));
}

#[test]
fn proxy_accepts_an_absolute_upstream() {
    assert!(ApiProxy::new("http://localhost:8000/").is_ok());
}
