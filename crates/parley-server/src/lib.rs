//! HTTP server relaying chat messages to an LLM completion provider.
//!
//! Routes:
//!
//! - `GET /` — static home page
//! - `GET /health` — liveness probe
//! - `POST /chat` — one-shot completion for `{"message": ...}`

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use parley_llm::CompletionProvider;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state accessible from all handlers.
///
/// Built once before the listener starts and never mutated afterwards.
pub struct ServerState {
    pub provider: Box<dyn CompletionProvider>,
}

impl ServerState {
    pub fn new(provider: impl CompletionProvider + 'static) -> Self {
        Self { provider: Box::new(provider) }
    }
}

/// Builds the application router with request logging on every route
/// except the health probe.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::home::home))
        .route("/chat", post(handlers::chat::chat))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .with_state(state)
}
