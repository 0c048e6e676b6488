//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos renders the landing page at `/`. The hydration bundle is served
//! from the site root's `/pkg`, `/healthz` answers liveness probes, and every
//! other path falls back to the public asset directory (robots.txt, favicon,
//! OG image).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::ServerError;

/// Non-Leptos routes: health probe, bundle, and static fallback.
pub fn site_routes(pkg_dir: &Path, public_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
}

/// Full application router: Leptos SSR merged with [`site_routes`].
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &AppConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(
        site_root = %site_root.display(),
        public_dir = %config.public_dir.display(),
        "serving static assets"
    );

    Ok(leptos_router
        .merge(site_routes(&site_root.join("pkg"), &config.public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
