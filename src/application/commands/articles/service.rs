// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository, derive_slug},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) sanitize_body: bool,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
        sanitize_body: bool,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
            sanitize_body,
        }
    }

    /// Slug the form would derive for `title`.
    pub fn preview_slug(&self, title: &str) -> String {
        derive_slug(title)
    }

    /// Fails with `Conflict` when another article already uses `slug`.
    pub(super) async fn ensure_slug_available(
        &self,
        slug: &ArticleSlug,
        current: Option<ArticleId>,
    ) -> ApplicationResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != current => Err(ApplicationError::conflict(
                format!("slug '{slug}' is already used by another article"),
            )),
            _ => Ok(()),
        }
    }
}
