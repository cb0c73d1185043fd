// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleTitle, AuthorName, CoverImage,
};
use chrono::{DateTime, Utc};

/// Editable fields of an article, shared by inserts and updates.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub summary: String,
    pub image: CoverImage,
    pub category: String,
    pub author: AuthorName,
    pub published: bool,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub summary: String,
    pub image: CoverImage,
    pub category: String,
    pub author: AuthorName,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Replace every editable field. `created_at` is never touched.
    pub fn apply(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        let ArticleContent {
            title,
            slug,
            body,
            summary,
            image,
            category,
            author,
            published,
        } = content;
        self.title = title;
        self.slug = slug;
        self.body = body;
        self.summary = summary;
        self.image = image;
        self.category = category;
        self.author = author;
        self.published = published;
        self.updated_at = now;
    }

    pub fn content(&self) -> ArticleContent {
        ArticleContent {
            title: self.title.clone(),
            slug: self.slug.clone(),
            body: self.body.clone(),
            summary: self.summary.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
            author: self.author.clone(),
            published: self.published,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    /// New articles start with both timestamps equal.
    pub const fn new(content: ArticleContent, now: DateTime<Utc>) -> Self {
        Self {
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub content: ArticleContent,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub const fn new(id: ArticleId, content: ArticleContent, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            updated_at,
        }
    }
}
