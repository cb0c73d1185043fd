use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedAdmin, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        comment::CommentRepository,
    },
};

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    require_approval: bool,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        require_approval: bool,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            require_approval,
        }
    }

    /// Reader view of an article's comments, oldest first. Pending comments
    /// are hidden only when approval is required.
    pub async fn list_for_article(&self, article_id: i64) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::new(article_id)?;
        self.article_repo
            .find_by_id(article_id)
            .await?
            .filter(|article| article.published)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments = self
            .comment_repo
            .list_by_article(article_id, self.require_approval)
            .await?;
        Ok(comments
            .into_iter()
            .map(|comment| CommentDto::from(comment).public())
            .collect())
    }

    /// Moderation view, newest first.
    pub async fn list_for_moderation(
        &self,
        _actor: &AuthenticatedAdmin,
        article_id: Option<i64>,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = article_id.map(ArticleId::new).transpose()?;
        let comments = self.comment_repo.list_all(article_id).await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}
