// tests/support/helpers.rs
use super::mocks::{StrictPasswordHasher, TEST_KEY};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use publartz_core::application::{
    ports::security::TokenManager,
    services::{Adapters, ApplicationServices, ServiceSettings},
};
use publartz_core::infrastructure::{
    database,
    media::DataUriImageEncoder,
    security::{session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager},
    seed,
    time::SystemClock,
    wiring,
};
use publartz_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::SqlitePool;
use std::{sync::Arc, time::Duration};
use tower::util::ServiceExt as _;

pub const ADMIN_EMAIL: &str = "admin@publartz.id";
pub const ADMIN_PASSWORD: &str = "rahasia-admin";

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub pool: Arc<SqlitePool>,
}

/// 移行済みのインメモリ SQLite プール
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrations");
    Arc::new(pool)
}

/// Full router over in-memory SQLite with one bootstrap admin.
/// Rate limiting is off: oneshot requests carry no peer address.
pub async fn spawn_app(settings: ServiceSettings, with_samples: bool) -> TestApp {
    let pool = memory_pool().await;
    let repositories = wiring::sqlite_repositories(&pool);

    if with_samples {
        seed::seed_sample_articles(
            repositories.article_read.as_ref(),
            repositories.article_write.as_ref(),
        )
        .await
        .expect("seed sample articles");
    }

    let token_manager: Arc<dyn TokenManager> = Arc::new(
        BiscuitTokenManager::new(TEST_KEY, Duration::from_secs(3600)).expect("token manager"),
    );
    let adapters = Adapters {
        password_hasher: Arc::new(StrictPasswordHasher),
        token_manager,
        session_store: Arc::new(InMemorySessionRevocationStore::new()),
        image_encoder: Arc::new(DataUriImageEncoder),
        clock: Arc::new(SystemClock),
    };
    let services = Arc::new(ApplicationServices::new(repositories, adapters, &settings));
    services
        .auth
        .bootstrap_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("bootstrap admin");

    let state = HttpState {
        services: Arc::clone(&services),
        db_pool: pool.as_ref().clone(),
    };
    let origins = vec!["http://localhost:3000".to_string()];
    let router = build_router(state, &origins, false);

    TestApp {
        router,
        services,
        pool,
    }
}

/// Catalog seeded with the six sample articles and default settings.
pub async fn seeded_app() -> TestApp {
    spawn_app(ServiceSettings::default(), true).await
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("build request")
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("build request")
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 16 * 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(request).await.expect("router call");
    let status = resp.status();
    (status, read_json(resp).await)
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, empty_request(Method::GET, uri, None)).await
}

/// Sign in as the bootstrap admin and return the bearer token.
pub async fn login(router: &Router) -> String {
    let (status, body) = send(
        router,
        json_request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            &serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"]["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Assert an `ErrorResponse` body with the expected status and reason phrase.
pub fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    assert_eq!(body["error"].as_str(), Some(expected_error), "body: {body}");
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message, body: {body}"
    );
}
