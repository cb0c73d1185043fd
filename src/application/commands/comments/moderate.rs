// src/application/commands/comments/moderate.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedAdmin, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};
use tracing::info;

impl CommentCommandService {
    pub async fn set_approval(
        &self,
        actor: &AuthenticatedAdmin,
        id: &str,
        approved: bool,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::parse(id)?;
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let updated = self
            .comment_repo
            .set_approval(id, approved, self.clock.now())
            .await
            .map_err(|err| ApplicationError::from(err).normalize())?;

        info!(comment_id = %id, approved, admin = %actor.email, "comment moderated");
        Ok(updated.into())
    }

    pub async fn delete_comment(&self, actor: &AuthenticatedAdmin, id: &str) -> ApplicationResult<()> {
        let id = CommentId::parse(id)?;
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        self.comment_repo
            .delete(id)
            .await
            .map_err(|err| ApplicationError::from(err).normalize())?;

        info!(comment_id = %id, admin = %actor.email, "comment deleted");
        Ok(())
    }
}
