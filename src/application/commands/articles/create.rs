// src/application/commands/articles/create.rs
use super::{ArticleCommandService, ArticleDraft};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedAdmin},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{NewArticle, is_known_category},
};
use tracing::{info, warn};

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedAdmin,
        draft: ArticleDraft,
    ) -> ApplicationResult<ArticleDto> {
        let content = draft.into_content(self.sanitize_body)?;
        if !is_known_category(&content.category) {
            warn!(category = %content.category, slug = %content.slug, "article filed under an unlisted category");
        }
        self.ensure_slug_available(&content.slug, None).await?;

        let new_article = NewArticle::new(content, self.clock.now());
        let created = self
            .write_repo
            .insert(new_article)
            .await
            .map_err(|err| ApplicationError::from(err).normalize())?;

        info!(article_id = %created.id, slug = %created.slug, admin = %actor.email, "article created");
        Ok(created.into())
    }
}
