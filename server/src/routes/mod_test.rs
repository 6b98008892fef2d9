use axum::body::{Body, to_bytes};
use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| (key == "FRONTEND_ORIGINS").then(|| "https://recipefy.app/".to_owned())).unwrap()
}

/// Assemble the full router. Every caller sets the same output name, so
/// concurrent tests agree on the value.
fn test_app() -> Router {
    unsafe { std::env::set_var("LEPTOS_OUTPUT_NAME", "recipefy") };
    app(&test_config()).unwrap()
}

fn get(uri: &str, origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(origin) = origin {
        builder = builder.header(ORIGIN, origin);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// origin_header_values
// =============================================================================

#[test]
fn origin_header_values_keeps_valid_origins_in_order() {
    let origins = vec!["http://localhost:3000".to_owned(), "https://recipefy.app".to_owned()];
    let values = origin_header_values(&origins);
    assert_eq!(values, vec![
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("https://recipefy.app"),
    ]);
}

#[test]
fn origin_header_values_skips_invalid_entries() {
    let origins = vec!["bad\nvalue".to_owned(), "https://ok.test".to_owned()];
    assert_eq!(origin_header_values(&origins), vec![HeaderValue::from_static("https://ok.test")]);
}

// =============================================================================
// app
// =============================================================================

#[tokio::test]
async fn health_route_returns_ok_json() {
    let response = test_app().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn allowed_origin_gets_credentialed_cors_headers() {
    let response = test_app()
        .oneshot(get("/health", Some("https://recipefy.app")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN), Some(&HeaderValue::from_static("https://recipefy.app")));
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS), Some(&HeaderValue::from_static("true")));
}

#[tokio::test]
async fn default_local_origin_is_allowed() {
    let response = test_app()
        .oneshot(get("/health", Some("http://localhost:3000")))
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:3000"))
    );
}

#[tokio::test]
async fn unlisted_origin_gets_no_allow_origin_header() {
    let response = test_app()
        .oneshot(get("/health", Some("https://evil.test")))
        .await
        .unwrap();
    assert_eq!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN), None);
}

#[tokio::test]
async fn login_page_renders_three_provider_buttons() {
    let response = test_app().oneshot(get("/login", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert_eq!(html.matches("<button").count(), 3);
    for label in ["Continue with Apple", "Continue with Google", "Continue with Email"] {
        assert!(html.contains(label), "missing {label:?}");
    }
}
