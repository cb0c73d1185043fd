// src/application/commands/articles/draft.rs
use crate::{
    application::error::{ApplicationError, FieldViolation},
    domain::{
        article::{
            ArticleBody, ArticleContent, ArticleSlug, ArticleTitle, AuthorName, CoverImage,
            normalize_category,
        },
        richtext::{plain_text, sanitize_markup},
    },
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Article fields as submitted by the authoring form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ArticleDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl ArticleDraft {
    /// Check the required fields and build the content to persist.
    pub fn into_content(self, sanitize_body: bool) -> Result<ArticleContent, ApplicationError> {
        let content = if sanitize_body {
            sanitize_markup(&self.content)
        } else {
            self.content
        };
        let category = normalize_category(&self.category);

        let mut violations = Vec::new();
        for (field, value) in [
            ("title", self.title.as_str()),
            ("slug", self.slug.as_str()),
            ("category", category.as_str()),
            ("summary", self.summary.as_str()),
        ] {
            if value.trim().is_empty() {
                violations.push(FieldViolation::required(field));
            }
        }
        if plain_text(&content).trim().is_empty() {
            violations.push(FieldViolation::required("content"));
        }
        if !violations.is_empty() {
            return Err(ApplicationError::InvalidFields(violations));
        }

        Ok(ArticleContent {
            title: ArticleTitle::new(self.title.trim())?,
            slug: ArticleSlug::new(self.slug.trim())?,
            body: ArticleBody::new(content)?,
            summary: self.summary.trim().to_string(),
            image: CoverImage::parse(&self.image),
            category,
            author: AuthorName::new(self.author.as_deref()),
            published: self.published,
        })
    }
}
