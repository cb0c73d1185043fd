// src/presentation/http/controllers/articles.rs
//! Public catalog and article detail.

use crate::application::{
    dto::{ArticleDetailDto, ArticleDto, CatalogPageDto},
    queries::articles::CatalogRequest,
    sharing::ShareLinks,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogParams {
    /// Case-insensitive match against title and summary.
    #[serde(default)]
    pub q: Option<String>,
    /// Exact category name; empty or absent means all categories.
    #[serde(default)]
    pub category: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(CatalogParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = CatalogPageDto<ArticleDto>),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CatalogParams>,
) -> HttpResult<Json<CatalogPageDto<ArticleDto>>> {
    let request = CatalogRequest {
        term: params.q,
        category: params.category,
        page: params.page,
    };

    state
        .services
        .article_queries
        .catalog(request)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Fixed category set, in display order.", body = [String])
    ),
    tag = "Articles"
)]
pub async fn list_categories(Extension(state): Extension<HttpState>) -> Json<Vec<String>> {
    Json(state.services.article_queries.categories())
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with related articles.", body = ArticleDetailDto),
        (status = 404, description = "No published article has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .detail_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}/share",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Canonical URL and social intent links.", body = ShareLinks),
        (status = 404, description = "No published article has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_share_links(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ShareLinks>> {
    state
        .services
        .article_queries
        .share_links(&slug)
        .await
        .into_http()
        .map(Json)
}
