// src/presentation/http/controllers/admin_articles.rs
//! Authoring console endpoints. Every handler requires a signed-in admin.

use crate::application::{
    commands::articles::ArticleDraft,
    dto::{ArticleDto, DashboardDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlugPreviewRequest {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewResponse {
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles",
    responses(
        (status = 200, description = "All articles including drafts, with counts.", body = DashboardDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .article_queries
        .dashboard(&admin)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article as stored, drafts included.", body = ArticleDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_for_edit(&admin, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles",
    request_body = ArticleDraft,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Missing or invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already used.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Json(draft): Json<ArticleDraft>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let created = state
        .services
        .article_commands
        .create_article(&admin, draft)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleDraft,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Missing or invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already used.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
    Json(draft): Json<ArticleDraft>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(&admin, id, draft)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article and its comments removed.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(&admin, id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles/slug",
    request_body = SlugPreviewRequest,
    responses(
        (status = 200, description = "Slug derived from the title.", body = SlugPreviewResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Json(payload): Json<SlugPreviewRequest>,
) -> Json<SlugPreviewResponse> {
    Json(SlugPreviewResponse {
        slug: state.services.article_commands.preview_slug(&payload.title),
    })
}
