//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! The page ships no scripts, so the policy forbids them outright. Images may
//! come from the site itself and from the object storage origin.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

/// Precomputed header values, built once at startup.
#[derive(Clone, Debug)]
pub struct SecurityHeaders {
    csp: HeaderValue,
}

impl SecurityHeaders {
    /// Build the policy, allowing images from `image_origin` when given.
    ///
    /// An origin that cannot be carried in a header is ignored.
    #[must_use]
    pub fn new(image_origin: Option<&str>) -> Self {
        let policy = content_security_policy(image_origin);
        let csp = HeaderValue::from_str(&policy).unwrap_or_else(|_| {
            tracing::warn!("Image origin is not a valid header value, ignoring it");
            HeaderValue::from_static(STRICT_POLICY)
        });
        Self { csp }
    }

    /// The `Content-Security-Policy` value.
    #[must_use]
    pub const fn csp(&self) -> &HeaderValue {
        &self.csp
    }
}

const STRICT_POLICY: &str = "default-src 'none'; script-src 'none'; style-src 'self'; \
     font-src 'self'; img-src 'self'; connect-src 'none'; frame-src 'none'; \
     object-src 'none'; base-uri 'self'; form-action 'self'; frame-ancestors 'none'";

fn content_security_policy(image_origin: Option<&str>) -> String {
    let img_src = image_origin.map_or_else(
        || "img-src 'self'".to_string(),
        |origin| format!("img-src 'self' {origin}"),
    );
    STRICT_POLICY.replace("img-src 'self'", &img_src)
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Content-Security-Policy` - See [`SecurityHeaders::new`]
/// - `Permissions-Policy` - Deny sensitive features
/// - `Cross-Origin-Opener-Policy: same-origin` - Process isolation
pub async fn security_headers_middleware(
    State(security): State<SecurityHeaders>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(CONTENT_SECURITY_POLICY, security.csp.clone());
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "camera=(), geolocation=(), microphone=(), payment=(), usb=(), \
             interest-cohort=(), browsing-topics=()",
        ),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_without_storage() {
        let headers = SecurityHeaders::new(None);
        let csp = headers.csp().to_str().unwrap_or_default();
        assert!(csp.contains("img-src 'self';"));
        assert!(csp.contains("script-src 'none'"));
        assert!(csp.contains("form-action 'self'"));
    }

    #[test]
    fn test_policy_allows_storage_images() {
        let headers = SecurityHeaders::new(Some("https://abc.supabase.co"));
        let csp = headers.csp().to_str().unwrap_or_default();
        assert!(csp.contains("img-src 'self' https://abc.supabase.co;"));
    }

    #[test]
    fn test_invalid_origin_falls_back() {
        let headers = SecurityHeaders::new(Some("https://bad\nhost"));
        assert_eq!(headers.csp(), &HeaderValue::from_static(STRICT_POLICY));
    }
}
