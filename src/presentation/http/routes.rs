// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin_articles, articles, auth, comments, images, preferences},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Upper bound for request bodies; cover images travel inline.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn build_router(state: HttpState, allowed_origins: &[String], rate_limit: bool) -> Router {
    let router = api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(Extension(state));

    match rate_limit.then(rate_limit_layer).flatten() {
        Some(limiter) => router.layer(limiter),
        None => router,
    }
}

fn api_routes() -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/categories", get(articles::list_categories))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/by-slug/{slug}/share",
            get(articles::get_share_links),
        )
        .route(
            "/api/v1/articles/{id}/comments",
            get(comments::list_comments).post(comments::submit_comment),
        )
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route(
            "/api/v1/admin/articles",
            get(admin_articles::dashboard).post(admin_articles::create_article),
        )
        .route(
            "/api/v1/admin/articles/slug",
            post(admin_articles::preview_slug),
        )
        .route(
            "/api/v1/admin/articles/{id}",
            get(admin_articles::get_article)
                .put(admin_articles::update_article)
                .delete(admin_articles::delete_article),
        )
        .route("/api/v1/admin/images", post(images::upload_image))
        .route("/api/v1/admin/comments", get(comments::list_for_moderation))
        .route(
            "/api/v1/admin/comments/{id}/approval",
            post(comments::set_approval),
        )
        .route(
            "/api/v1/admin/comments/{id}",
            delete(comments::delete_comment),
        )
        .route("/api/v1/preferences/theme", get(preferences::get_theme))
        .route(
            "/api/v1/preferences/theme/toggle",
            post(preferences::toggle_theme),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable.", body = StatusResponse),
        (status = 503, description = "Database is unreachable.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> (StatusCode, Json<StatusResponse>) {
    match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "ok".into(),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "unavailable".into(),
                }),
            )
        }
    }
}
