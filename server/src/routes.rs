//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos login app with server-side rendering, its compiled
//! `/pkg` assets, and a health probe. The authentication API itself lives
//! on a separate backend that the browser calls directly.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR routes + static assets + `/healthz`.
///
/// `site_root` overrides the asset directory from the Leptos options.
pub fn app(leptos_options: LeptosOptions, site_root: Option<PathBuf>) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = site_root.unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
