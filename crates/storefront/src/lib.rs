//! Eblen Sushi storefront library.
//!
//! The binary in `main.rs` only wires process concerns (config, tracing,
//! Sentry, the listener). Everything a request touches lives here so it can
//! be exercised from tests through [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use middleware::{SecurityHeaders, request_id_middleware, security_headers_middleware};
pub use state::AppState;

/// Build the full application router.
///
/// Layers, innermost first: security headers, request ID, request tracing,
/// then the Sentry layers.
pub fn app(state: AppState) -> Router {
    let security = SecurityHeaders::new(storage::storage_origin(&state.config().storage).as_deref());
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .merge(routes::health_routes())
        .merge(routes::routes(state.config().trust_proxy_headers))
        .nest_service("/static", static_dir)
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn_with_state(
            security,
            security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
