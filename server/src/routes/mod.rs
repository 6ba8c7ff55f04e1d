//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the places proxy API routes and Leptos SSR rendering
//! under a single Axum router. The Leptos app owns every non-API path,
//! including the not-found fallback.

pub mod places;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes for the places proxy boundary.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/places/static-map", get(places::static_map))
        .route("/api/places/photo", get(places::photo))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full router: API routes plus the Leptos SSR front end. Degrades to an
/// API-only router when the Leptos configuration cannot be loaded, so the
/// proxy boundary keeps working regardless.
pub fn app(state: AppState) -> Router {
    match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos SSR unavailable — serving API routes only");
            api_routes(state)
        }
    }
}

/// Leptos SSR front end merged with the API routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    // The fallback serves static site assets (WASM, CSS) and renders the
    // shell for unmatched paths, which lands on the client's not-found page.
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(api_routes(state).merge(leptos_router))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
