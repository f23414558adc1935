//! HTTP API server for trash-cleaner.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;
mod viewer;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use trash_cleaner_service::CleanupService;

pub use api_types::VersionResponse;
pub use handlers::dispatcher::start_event_dispatcher;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub cleanup_service: Arc<CleanupService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/action", post(handlers::action::dispatch_action))
        .route("/api/progress", get(handlers::campaign::get_progress))
        .route("/api/status", get(handlers::campaign::get_status))
        .route("/api/settings", post(handlers::campaign::update_settings))
        .route("/api/run", post(handlers::campaign::run_now))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
