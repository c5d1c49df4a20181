//! Error responses and Sentry breadcrumbs.
//!
//! Request-path failures that are reported (store outages, failed inserts)
//! go through `tracing::error!`/`warn!`, which the Sentry tracing layer turns
//! into events. `AppError` only covers handlers that answer with an error
//! status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Error statuses a storefront handler can answer with.
#[derive(Debug, Error)]
pub enum AppError {
    /// A dependency is not reachable right now.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// No route for the path.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Don't expose dependency details to clients
            Self::Unavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable").into_response()
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
        }
    }
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("/menu".to_string());
        assert_eq!(err.to_string(), "Not found: /menu");

        let err = AppError::Unavailable("pool timed out".to_string());
        assert_eq!(err.to_string(), "Service unavailable: pool timed out");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::NotFound("/menu".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unavailable("db".to_string()).into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_unavailable_hides_details() {
        let response = AppError::Unavailable("password authentication failed".to_string())
            .into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap_or_default();
        assert_eq!(body.as_ref(), b"Service unavailable");
    }
}
