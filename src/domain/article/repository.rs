// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Persists the update and returns the stored row. Missing ids yield `NotFound`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

/// Listings are ordered newest first by `created_at`.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list_published(&self) -> DomainResult<Vec<Article>>;
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Looks up any article, drafts included.
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
}
