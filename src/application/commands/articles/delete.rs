// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedAdmin,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};
use tracing::info;

impl ArticleCommandService {
    /// Removes the article; its comments go with it.
    pub async fn delete_article(&self, actor: &AuthenticatedAdmin, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo
            .delete(id)
            .await
            .map_err(|err| ApplicationError::from(err).normalize())?;

        info!(article_id = %id, admin = %actor.email, "article deleted");
        Ok(())
    }
}
