// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{articles::ArticleCommandService, auth::AuthService, comments::CommentCommandService},
        error::ApplicationError,
        ports::{
            media::ImageEncoder,
            preferences::PreferenceStore,
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
        },
        queries::{articles::ArticleQueryService, comments::CommentQueryService},
        theme::ThemeService,
    },
    domain::{
        admin::AdminRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
    },
};

/// Tunables that shape service behaviour, taken from configuration.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub page_size: u32,
    pub related_limit: usize,
    pub comments_require_approval: bool,
    pub sanitize_article_body: bool,
    pub public_base_url: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            page_size: 6,
            related_limit: crate::domain::article::DEFAULT_RELATED_LIMIT,
            comments_require_approval: false,
            sanitize_article_body: true,
            public_base_url: "http://localhost:8080".into(),
        }
    }
}

/// Repository implementations the services are wired against.
#[derive(Clone)]
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub admins: Arc<dyn AdminRepository>,
    pub preferences: Arc<dyn PreferenceStore>,
}

/// Security and system adapters.
#[derive(Clone)]
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub session_store: Arc<dyn SessionRevocationStore>,
    pub image_encoder: Arc<dyn ImageEncoder>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub auth: Arc<AuthService>,
    pub theme: Arc<ThemeService>,
    image_encoder: Arc<dyn ImageEncoder>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters, settings: &ServiceSettings) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&adapters.clock),
            settings.sanitize_article_body,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            settings.page_size,
            settings.related_limit,
            settings.public_base_url.clone(),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_read),
            Arc::clone(&adapters.clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_read),
            settings.comments_require_approval,
        ));

        let auth = Arc::new(AuthService::new(
            Arc::clone(&repos.admins),
            Arc::clone(&adapters.password_hasher),
            Arc::clone(&adapters.token_manager),
            Arc::clone(&adapters.session_store),
            Arc::clone(&adapters.clock),
        ));

        let theme = Arc::new(ThemeService::new(Arc::clone(&repos.preferences)));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            auth,
            theme,
            image_encoder: adapters.image_encoder,
        }
    }

    /// Turn an uploaded cover image into a `data:` URI.
    pub async fn encode_cover_image(&self, filename: &str, bytes: Vec<u8>) -> ApplicationResult<String> {
        if bytes.is_empty() {
            return Err(ApplicationError::validation("uploaded image is empty"));
        }
        self.image_encoder.encode(filename, bytes).await
    }
}
