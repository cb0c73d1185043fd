// src/application/commands/articles/update.rs
use super::{ArticleCommandService, ArticleDraft};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedAdmin},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleUpdate},
};
use tracing::info;

impl ArticleCommandService {
    /// Replace every editable field. `created_at` is preserved by the repository.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedAdmin,
        id: i64,
        draft: ArticleDraft,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let content = draft.into_content(self.sanitize_body)?;
        self.ensure_slug_available(&content.slug, Some(id)).await?;

        let updated = self
            .write_repo
            .update(ArticleUpdate::new(id, content, self.clock.now()))
            .await
            .map_err(|err| ApplicationError::from(err).normalize())?;

        info!(article_id = %id, admin = %actor.email, "article updated");
        Ok(updated.into())
    }
}
