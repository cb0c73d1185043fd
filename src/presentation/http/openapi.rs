// src/presentation/http/openapi.rs
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::list_categories,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::get_share_links,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::submit_comment,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::admin_articles::dashboard,
        crate::presentation::http::controllers::admin_articles::get_article,
        crate::presentation::http::controllers::admin_articles::create_article,
        crate::presentation::http::controllers::admin_articles::update_article,
        crate::presentation::http::controllers::admin_articles::delete_article,
        crate::presentation::http::controllers::admin_articles::preview_slug,
        crate::presentation::http::controllers::images::upload_image,
        crate::presentation::http::controllers::comments::list_for_moderation,
        crate::presentation::http::controllers::comments::set_approval,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::preferences::get_theme,
        crate::presentation::http::controllers::preferences::toggle_theme,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::error::FieldViolation,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::DashboardDto,
            crate::application::dto::DashboardStats,
            crate::application::dto::CommentDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::AdminDto,
            crate::application::dto::LoginResultDto,
            crate::application::dto::CurrentUserDto,
            crate::application::commands::articles::ArticleDraft,
            crate::application::commands::comments::SubmitCommentCommand,
            crate::application::commands::auth::LoginCommand,
            crate::application::sharing::ShareLinks,
            crate::application::theme::Theme,
            crate::application::theme::ThemeDto,
            crate::presentation::http::controllers::admin_articles::SlugPreviewRequest,
            crate::presentation::http::controllers::admin_articles::SlugPreviewResponse,
            crate::presentation::http::controllers::comments::ApprovalRequest,
            crate::presentation::http::controllers::images::ImageResponse,
            crate::presentation::http::controllers::images::ImageUpload
        )
    ),
    tags(
        (name = "Articles", description = "Public catalog and article detail"),
        (name = "Comments", description = "Reader comments"),
        (name = "Auth", description = "Admin sign-in and session endpoints"),
        (name = "Admin", description = "Authoring and moderation console"),
        (name = "Preferences", description = "Display preferences"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Publartz API",
        description = "Article catalog, comments and authoring console",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route(OPENAPI_JSON_PATH, get(serve_openapi))
        .merge(redoc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in [
            "/api/v1/articles",
            "/api/v1/articles/by-slug/{slug}",
            "/api/v1/articles/{id}/comments",
            "/api/v1/admin/articles/{id}",
            "/api/v1/preferences/theme/toggle",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
