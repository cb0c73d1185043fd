// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::SubmitCommentCommand, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ModerationParams {
    /// Restrict the listing to one article.
    #[serde(default)]
    pub article_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApprovalRequest {
    pub approved: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments, oldest first. Emails are never included.", body = [CommentDto]),
        (status = 404, description = "Unknown or unpublished article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_for_article(article_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = SubmitCommentCommand,
    responses(
        (status = 201, description = "Comment stored.", body = CommentDto),
        (status = 400, description = "Rejected fields are listed in `details`.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown or unpublished article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
    Json(payload): Json<SubmitCommentCommand>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let stored = state
        .services
        .comment_commands
        .submit_comment(article_id, payload)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(stored.public())))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/comments",
    params(ModerationParams),
    responses(
        (status = 200, description = "All comments, newest first.", body = [CommentDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_for_moderation(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Query(params): Query<ModerationParams>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_for_moderation(&admin, params.article_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/comments/{id}/approval",
    params(("id" = String, Path, description = "Comment id")),
    request_body = ApprovalRequest,
    responses(
        (status = 200, description = "Approval flag updated.", body = CommentDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn set_approval(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ApprovalRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .set_approval(&admin, &id, payload.approved)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/comments/{id}",
    params(("id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment removed.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .comment_commands
        .delete_comment(&admin, &id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
