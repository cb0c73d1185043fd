// src/application/commands/comments/submit.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult, FieldViolation},
    },
    domain::{
        article::ArticleId,
        comment::{CommentDraft, NewComment},
    },
};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SubmitCommentCommand {
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl CommentCommandService {
    /// Validate and store a reader comment. Every rule is checked before the
    /// repository is touched; a repository failure is returned unchanged.
    pub async fn submit_comment(
        &self,
        article_id: i64,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let draft = CommentDraft::new(command.author_name, command.author_email, command.content);
        let valid = draft.validate().map_err(|errors| {
            ApplicationError::InvalidFields(
                errors
                    .into_iter()
                    .map(|err| FieldViolation::new(err.field(), err.code(), err.to_string()))
                    .collect(),
            )
        })?;

        let article_id = ArticleId::new(article_id)?;
        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .filter(|article| article.published)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comment = NewComment::new(article.id, valid, self.clock.now());
        let stored = self.comment_repo.insert(comment).await.map_err(|err| {
            error!(error = %err, article_id = %article.id, "failed to store comment");
            ApplicationError::from(err).normalize()
        })?;

        info!(comment_id = %stored.id, article_id = %article.id, "comment submitted");
        Ok(stored.into())
    }
}
