//! Storefront router tests driven in-process.
//!
//! The database pool points at a closed port, so these exercise the paths a
//! visitor sees when the store is down as well as everything that never
//! reaches it (validation, notices, headers, static files).

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;

use eblen_integration_tests::{
    TEST_PEER, body_string, get, hermetic_app, hermetic_app_with, location, post_review,
    post_review_from, send, test_config,
};

// ============================================================================
// Home page
// ============================================================================

#[tokio::test]
async fn test_home_renders_with_store_down() {
    let app = hermetic_app(None);
    let response = send(&app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    for anchor in ["id=\"hero\"", "id=\"catalog\"", "id=\"reviews\"", "id=\"contacts\""] {
        assert!(body.contains(anchor), "missing section {anchor}");
    }
    assert!(body.contains("hero-placeholder"));
    assert!(body.contains("action=\"/reviews\""));
    assert!(!body.contains("class=\"panel card\""), "no cards without data");
}

#[tokio::test]
async fn test_home_uses_storage_hero_url() {
    let app = hermetic_app(Some("https://abc.supabase.co"));
    let body = body_string(send(&app, get("/")).await).await;

    assert!(body.contains(
        "https://abc.supabase.co/storage/v1/object/public/eblen-site-assets/utp-photo.png"
    ));
    assert!(!body.contains("hero-placeholder"));
}

#[tokio::test]
async fn test_home_shows_invalid_notice() {
    let app = hermetic_app(None);
    let body = body_string(send(&app, get("/?review=invalid")).await).await;
    assert!(body.contains("form-notice-error"));
}

#[tokio::test]
async fn test_home_shows_thanks_notice() {
    let app = hermetic_app(None);
    let body = body_string(send(&app, get("/?review=thanks")).await).await;
    assert!(body.contains("form-notice-success"));
}

#[tokio::test]
async fn test_home_ignores_repeated_review_param() {
    let app = hermetic_app(None);
    let response = send(&app, get("/?review=thanks&review=invalid")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_string(response).await.contains("form-notice"));
}

#[tokio::test]
async fn test_home_ignores_unknown_notice() {
    let app = hermetic_app(None);
    let body = body_string(send(&app, get("/?review=%3Cscript%3E")).await).await;
    assert!(!body.contains("form-notice"));
    assert!(!body.contains("<script>"));
}

// ============================================================================
// Review intake
// ============================================================================

#[tokio::test]
async fn test_invalid_review_redirects_with_notice() {
    let app = hermetic_app(None);

    for form in [
        "name=&stars=5&text=Great",
        "name=Anna&stars=0&text=Great",
        "name=Anna&stars=6&text=Great",
        "name=Anna&stars=abc&text=Great",
        "name=Anna&stars=5&text=%20%20",
    ] {
        let response = send(&app, post_review(form)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{form}");
        assert_eq!(location(&response), "/?review=invalid#reviews", "{form}");
    }
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let app = hermetic_app(None);
    let response = send(&app, post_review("name=Anna")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?review=invalid#reviews");
}

#[tokio::test]
async fn test_store_failure_redirects_without_notice() {
    let app = hermetic_app(None);
    let response = send(&app, post_review("name=%20Anna%20&stars=5&text=Great%21")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/#reviews");
}

#[tokio::test]
async fn test_review_submission_is_rate_limited() {
    let app = hermetic_app(None);

    for _ in 0..5 {
        let response = send(&app, post_review("name=&stars=5&text=x")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = send(&app, post_review("name=&stars=5&text=x")).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rotating_forwarded_for_does_not_bypass_limit() {
    let app = hermetic_app(None);

    let mut statuses = Vec::new();
    for i in 0..20 {
        let forwarded = format!("10.0.0.{i}, 203.0.113.10");
        let request = post_review_from(
            TEST_PEER,
            &[("x-forwarded-for", forwarded.as_str())],
            "name=&stars=5&text=x",
        );
        statuses.push(send(&app, request).await.status());
    }

    assert!(statuses[..5].iter().all(|s| *s == StatusCode::SEE_OTHER));
    assert!(statuses[5..].iter().all(|s| *s == StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn test_trusted_proxy_keys_on_last_forwarded_hop() {
    let mut config = test_config(None);
    config.trust_proxy_headers = true;
    let app = hermetic_app_with(config);

    // Same proxy peer, same client hop: spoofed leading hops share one quota.
    for i in 0..5 {
        let forwarded = format!("10.0.0.{i}, 198.51.100.7");
        let request = post_review_from(
            TEST_PEER,
            &[("x-forwarded-for", forwarded.as_str())],
            "name=&stars=5&text=x",
        );
        assert_eq!(send(&app, request).await.status(), StatusCode::SEE_OTHER);
    }
    let limited = post_review_from(
        TEST_PEER,
        &[("x-forwarded-for", "10.0.0.99, 198.51.100.7")],
        "name=&stars=5&text=x",
    );
    assert_eq!(send(&app, limited).await.status(), StatusCode::TOO_MANY_REQUESTS);

    // A different client behind the same proxy has its own quota.
    let other = post_review_from(
        TEST_PEER,
        &[("x-forwarded-for", "198.51.100.8")],
        "name=&stars=5&text=x",
    );
    assert_eq!(send(&app, other).await.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_reviews_rejects_get() {
    let app = hermetic_app(None);
    let response = send(&app, get("/reviews")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_wrong_method_does_not_use_quota() {
    let app = hermetic_app(None);

    for _ in 0..10 {
        let mut request = post_review("name=&stars=5&text=x");
        *request.method_mut() = axum::http::Method::PUT;
        assert_eq!(
            send(&app, request).await.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    let response = send(&app, post_review("name=&stars=5&text=x")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// ============================================================================
// Health, static files, fallbacks
// ============================================================================

#[tokio::test]
async fn test_liveness() {
    let app = hermetic_app(None);
    let response = send(&app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_without_database() {
    let app = hermetic_app(None);
    let response = send(&app, get("/health/ready")).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_string(response).await, "Service unavailable");
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let app = hermetic_app(None);
    let response = send(&app, get("/static/css/main.css")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains(".review-form"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = hermetic_app(None);
    let response = send(&app, get("/menu")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Response headers
// ============================================================================

#[tokio::test]
async fn test_security_headers_present() {
    let app = hermetic_app(Some("https://abc.supabase.co"));
    let response = send(&app, get("/")).await;
    let headers = response.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    let csp = headers
        .get("content-security-policy")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(csp.contains("https://abc.supabase.co"));
    assert!(csp.contains("script-src 'none'"));
}

#[tokio::test]
async fn test_request_id_generated() {
    let app = hermetic_app(None);
    let response = send(&app, get("/health")).await;
    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(id.len(), 36, "uuid v4 expected, got {id}");
}

#[tokio::test]
async fn test_request_id_propagated() {
    let app = hermetic_app(None);
    let request = axum::http::Request::builder()
        .uri("/health")
        .header("x-request-id", "edge-1234")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), "edge-1234");
}
