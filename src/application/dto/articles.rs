use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Rich-text markup.
    pub content: String,
    pub summary: String,
    /// Plain URI or `data:` URI; empty when the article has no cover.
    pub image: String,
    pub category: String,
    pub author: String,
    pub published: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.body.into_inner(),
            summary: article.summary,
            image: article.image.as_str().to_string(),
            category: article.category,
            author: article.author.into_inner(),
            published: article.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        article.clone().into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub article: ArticleDto,
    pub related: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total: u64,
    pub published: u64,
    pub drafts: u64,
}

impl DashboardStats {
    pub fn from_articles(articles: &[Article]) -> Self {
        let total = articles.len() as u64;
        let published = articles.iter().filter(|a| a.published).count() as u64;
        Self {
            total,
            published,
            drafts: total - published,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub stats: DashboardStats,
    pub articles: Vec<ArticleDto>,
}
