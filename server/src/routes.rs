//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the API proxy and Leptos SSR rendering under a single Axum router:
//! `/api/v1/*` forwards upstream, `/pkg` serves compiled client assets, and
//! everything else renders the client app.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::proxy::{self, ApiProxy};

/// Assemble the full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` metadata / environment overrides).
pub fn app(api_proxy: ApiProxy) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(zbook_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || zbook_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let api_router = Router::new()
        .route("/api/v1/{*path}", any(proxy::forward))
        .with_state(api_proxy);

    Ok(api_router
        .merge(leptos_router)
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
