//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (hero, catalog, reviews, contacts)
//! POST /reviews         - Review intake (rate limited per client IP)
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (database)
//! GET  /static/*        - Stylesheet and images
//! ```

pub mod home;
pub mod reviews;

use axum::{
    Router,
    extract::State,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::middleware::review_rate_limiter;
use crate::state::AppState;

/// Create the page routes.
///
/// Only matched review POSTs count against the rate limit; wrong methods get
/// their 405 without touching the visitor's quota.
pub fn routes(trust_proxy_headers: bool) -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route(
            "/reviews",
            post(reviews::create).route_layer(review_rate_limiter(trust_proxy_headers)),
        )
}

/// Create the health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    sqlx::query("SELECT 1")
        .execute(state.pool())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Readiness check failed");
            AppError::Unavailable(e.to_string())
        })?;
    Ok("ready")
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
