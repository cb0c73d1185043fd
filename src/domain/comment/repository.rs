// src/domain/comment/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of one article, oldest first. `approved_only` hides pending ones.
    async fn list_by_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>>;
    /// Moderation listing, newest first, optionally narrowed to one article.
    async fn list_all(&self, article_id: Option<ArticleId>) -> DomainResult<Vec<Comment>>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn set_approval(
        &self,
        id: CommentId,
        approved: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
