// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use publartz_core::application::commands::articles::ArticleDraft;
use publartz_core::domain::article::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    summary: String,
    category: String,
    published: bool,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Artikel {id}"),
            slug: format!("artikel-{id}"),
            body: "<p>Isi artikel</p>".into(),
            summary: "Ringkasan".into(),
            category: "Teknologi".into(),
            published: true,
            created_at: fixed_now() - Duration::days(30) + Duration::days(id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            summary: self.summary,
            image: CoverImage::None,
            category: self.category,
            author: AuthorName::default(),
            published: self.published,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// A draft that passes every authoring check.
pub fn valid_draft(title: &str, slug: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.into(),
        slug: slug.into(),
        content: "<p>Konten <strong>lengkap</strong></p>".into(),
        summary: "Ringkasan singkat".into(),
        image: "https://images.example.com/cover.jpg".into(),
        category: "teknologi".into(),
        author: None,
        published: true,
    }
}
