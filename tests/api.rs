use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use shopify_seo::api::{build_router, AppState};
use shopify_seo::config::Settings;
use shopify_seo::db::Database;

fn create_test_state() -> AppState {
    let db = Database::in_memory().unwrap();
    let settings = Settings::new("test-key", "test-secret", "https://seo.example");
    AppState::new(db, settings).unwrap()
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "shopify-seo");
}

#[tokio::test]
async fn test_root_endpoint() {
    let state = create_test_state();
    let response = app(&state).oneshot(make_request("GET", "/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Shopify SEO Checker API is running");
}

#[tokio::test]
async fn test_install_redirects_to_shopify() {
    let state = create_test_state();
    let req = make_request("GET", "/api/v1/auth/install?shop=demo.myshopify.com", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = response.headers()["location"].to_str().unwrap();
    assert!(location.starts_with("https://demo.myshopify.com/admin/oauth/authorize?"));
    assert!(location.contains("client_id=test-key"));
}

#[tokio::test]
async fn test_legacy_install_path() {
    let state = create_test_state();
    let req = make_request("GET", "/install?shop=demo.myshopify.com", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_install_missing_shop() {
    let state = create_test_state();
    let req = make_request("GET", "/api/v1/auth/install", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid shop: Missing 'shop' parameter");
}

#[tokio::test]
async fn test_callback_without_code_is_bad_request() {
    let state = create_test_state();
    let req = make_request("GET", "/api/v1/auth/callback?shop=demo.myshopify.com", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_themes_requires_authentication() {
    let state = create_test_state();
    let req = make_request("GET", "/api/v1/themes?shop=demo.myshopify.com", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Shop demo.myshopify.com not authenticated");
}

#[tokio::test]
async fn test_theme_asset_requires_parameters() {
    let state = create_test_state();
    let req = make_request("GET", "/api/v1/themes/asset?shop=demo.myshopify.com", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_seo_check_requires_authentication() {
    let state = create_test_state();
    for uri in ["/api/v1/seo/check?shop=demo.myshopify.com", "/seo-check?shop=demo.myshopify.com"] {
        let response = app(&state).oneshot(make_request("GET", uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn test_seo_check_rejects_invalid_shop() {
    let state = create_test_state();
    let req = make_request("GET", "/api/v1/seo/check?shop=evil.com%2Fadmin", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_supplied_markup() {
    let state = create_test_state();
    let req = make_request("POST", "/api/v1/seo/analyze", Some(json!({
        "asset_key": "sections/gallery.liquid",
        "content": "<img src=\"a.jpg\" alt=\"Mug\"><img src=\"b.jpg\" alt=\"Bowl\"><img src=\"c.jpg\">"
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["asset_key"], "sections/gallery.liquid");
    assert!(body["warnings"].as_array().unwrap().contains(&json!("1 image(s) missing alt text")));
    assert!(body["checks_passed"].as_array().unwrap().contains(&json!("2/3 images have alt text")));
    assert!(body.get("error").is_none());
}
