// tests/e2e_http.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(payload) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let direct = slugline::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn create_then_resolve_in_each_locale() {
    let app = support::make_test_router();

    let (status, created) = send(
        &app,
        "POST",
        "/api/v1/records",
        Some(json!({ "titles": { "en": "A Title", "de": "Ein Titel" } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, german) = send(&app, "GET", "/api/v1/records/by-slug/ein-titel?locale=de", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(german["id"], id);
    assert_eq!(german["matched_by"], "exact_locale");
    assert_eq!(german["translations"].as_array().unwrap().len(), 2);

    let (status, fallback) = send(&app, "GET", "/api/v1/records/by-slug/a-title?locale=fr", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fallback["matched_by"], "default_locale");

    let (status, by_id) = send(&app, "GET", &format!("/api/v1/records/by-slug/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["matched_by"], "primary_key");
}

#[tokio::test]
async fn second_record_gets_numbered_slug() {
    let app = support::make_test_router();
    let payload = json!({ "titles": { "en": "A Title" } });

    let (_, first) = send(&app, "POST", "/api/v1/records", Some(payload.clone())).await;
    let (_, second) = send(&app, "POST", "/api/v1/records", Some(payload)).await;

    assert_eq!(first["translations"][0]["slug"], "a-title");
    assert_eq!(second["translations"][0]["slug"], "a-title--2");

    let (status, next) = send(&app, "GET", "/api/v1/slugs/next?text=A%20Title&locale=en", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(next["slug"], "a-title--3");
}

#[tokio::test]
async fn set_slug_and_delete_record() {
    let app = support::make_test_router();
    let (_, created) = send(
        &app,
        "POST",
        "/api/v1/records",
        Some(json!({ "titles": { "en": "Draft" } })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/v1/records/{id}/slugs/en"),
        Some(json!({ "text": "Final Title" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["slug"], "final-title");

    let (status, _) = send(&app, "GET", "/api/v1/records/by-slug/draft", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/records/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/records/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn invalid_locale_is_bad_request() {
    let app = support::make_test_router();
    let (status, body) = send(&app, "GET", "/api/v1/records/by-slug/x?locale=en%20us", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("locale"));
}
