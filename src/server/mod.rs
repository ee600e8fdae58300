//! HTTP surface: router assembly and error mapping.
//!
//! The server layer is a thin adapter over [`crate::extract`]: handlers
//! deserialise the request, call the pipeline, and let the
//! `IntoResponse` impl in [`error`] translate failures into the wire
//! contract. Building the router from an injected [`state::AppState`]
//! keeps tests able to drive the full service in-process with
//! `tower::ServiceExt::oneshot`.

pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/extract", post(handlers::extract))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
