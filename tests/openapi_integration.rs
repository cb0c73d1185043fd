// tests/openapi_integration.rs
use axum::http::StatusCode;

mod support;

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::seeded_app().await;

    let (status, doc) = support::get_json(&app.router, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Publartz API");

    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/v1/categories",
        "/api/v1/articles/by-slug/{slug}/share",
        "/api/v1/auth/login",
        "/api/v1/admin/images",
        "/api/v1/admin/comments/{id}/approval",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(doc["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn health_reports_a_reachable_database() {
    let app = support::seeded_app().await;
    let (status, body) = support::get_json(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    app.pool.close().await;
    let (status, body) = support::get_json(&app.router, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}
