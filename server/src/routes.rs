//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health check, the Leptos SSR routes, the `/pkg` hydrate bundle
//! and the static site root under a single Axum router. Identity and todo
//! endpoints live on other servers. The client's production API base is the
//! relative `/api`, so deployments put a reverse proxy in front of this host
//! and the todo API that routes `/api/*` to the latter.
//!
//! Site root and `/pkg` paths come from the Leptos configuration
//! (`[workspace.metadata.leptos]` or `LEPTOS_SITE_ROOT`).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use daily_tasks::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not depend on the Leptos build output.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: health check + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join(leptos_options.site_pkg_dir.as_ref())))
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
