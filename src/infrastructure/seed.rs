// src/infrastructure/seed.rs
//! Sample catalog used for demos and the HTTP test-suite.

use crate::domain::{
    article::{
        ArticleBody, ArticleContent, ArticleReadRepository, ArticleSlug, ArticleTitle,
        ArticleWriteRepository, AuthorName, CoverImage, NewArticle,
    },
    errors::DomainError,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const SAMPLE_ARTICLES: &str = include_str!("seed/sample_articles.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("sample data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
struct SampleArticle {
    title: String,
    slug: String,
    summary: String,
    image: String,
    category: String,
    author: String,
    created_at: DateTime<Utc>,
    published: bool,
    content: String,
}

impl SampleArticle {
    fn into_new_article(self) -> Result<NewArticle, DomainError> {
        let content = ArticleContent {
            title: ArticleTitle::new(self.title)?,
            slug: ArticleSlug::new(self.slug)?,
            body: ArticleBody::new(self.content)?,
            summary: self.summary,
            image: CoverImage::parse(&self.image),
            category: self.category,
            author: AuthorName::new(Some(&self.author)),
            published: self.published,
        };
        Ok(NewArticle::new(content, self.created_at))
    }
}

fn sample_articles() -> Result<Vec<NewArticle>, SeedError> {
    let raw: Vec<SampleArticle> = serde_json::from_str(SAMPLE_ARTICLES)?;
    raw.into_iter()
        .map(|sample| sample.into_new_article().map_err(SeedError::from))
        .collect()
}

/// Inserts the six sample articles, oldest first, when the catalog is empty.
/// Returns how many rows were written.
pub async fn seed_sample_articles(
    read: &dyn ArticleReadRepository,
    write: &dyn ArticleWriteRepository,
) -> Result<usize, SeedError> {
    if !read.list_all().await?.is_empty() {
        info!("catalog already populated, skipping sample articles");
        return Ok(0);
    }

    let articles = sample_articles()?;
    let count = articles.len();
    for article in articles {
        write.insert(article).await?;
    }
    info!(count, "sample articles seeded");
    Ok(count)
}
