// src/application/authoring/mod.rs
//! In-memory state of the admin article form.

use crate::application::{commands::articles::ArticleDraft, dto::ArticleDto};
use crate::domain::{
    article::{CATEGORIES, derive_slug, is_known_category, normalize_category},
    richtext::Surface,
};

pub const BODY_PLACEHOLDER: &str = "Tulis konten artikel di sini...";

/// Whether the slug still follows the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugMode {
    #[default]
    Derived,
    Manual,
}

#[derive(Debug, Clone)]
pub struct ArticleForm {
    editing: Option<i64>,
    title: String,
    slug: String,
    slug_mode: SlugMode,
    summary: String,
    category: String,
    image: String,
    author: String,
    published: bool,
    body: Surface,
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleForm {
    pub fn new() -> Self {
        Self {
            editing: None,
            title: String::new(),
            slug: String::new(),
            slug_mode: SlugMode::Derived,
            summary: String::new(),
            category: String::new(),
            image: String::new(),
            author: String::new(),
            published: false,
            body: Surface::new("", Some(BODY_PLACEHOLDER.to_string())),
        }
    }

    /// Populate the form from a stored article. The slug keeps following the
    /// title only if it currently equals the derived form.
    pub fn load(article: &ArticleDto) -> Self {
        let slug_mode = if article.slug == derive_slug(&article.title) {
            SlugMode::Derived
        } else {
            SlugMode::Manual
        };
        Self {
            editing: Some(article.id),
            title: article.title.clone(),
            slug: article.slug.clone(),
            slug_mode,
            summary: article.summary.clone(),
            category: article.category.clone(),
            image: article.image.clone(),
            author: article.author.clone(),
            published: article.published,
            body: Surface::new(&article.content, Some(BODY_PLACEHOLDER.to_string())),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub const fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub const fn slug_mode(&self) -> SlugMode {
        self.slug_mode
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Choices for the category picker: the fixed list, plus the current
    /// category at the end when it is not one of them.
    pub fn category_options(&self) -> Vec<&str> {
        let mut options: Vec<&str> = CATEGORIES.to_vec();
        if !self.category.is_empty() && !is_known_category(&self.category) {
            options.push(self.category.as_str());
        }
        options
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if self.slug_mode == SlugMode::Derived {
            self.slug = derive_slug(&self.title);
        }
    }

    /// A direct slug edit pins the slug; clearing it hands control back to the title.
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        let slug = slug.into();
        if slug.trim().is_empty() {
            self.slug = String::new();
            self.slug_mode = SlugMode::Derived;
        } else {
            self.slug = slug;
            self.slug_mode = SlugMode::Manual;
        }
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = normalize_category(category);
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub const fn set_published(&mut self, published: bool) {
        self.published = published;
    }

    pub const fn body(&self) -> &Surface {
        &self.body
    }

    pub const fn body_mut(&mut self) -> &mut Surface {
        &mut self.body
    }

    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.body.markup(),
            summary: self.summary.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
            author: Some(self.author.clone()).filter(|a| !a.trim().is_empty()),
            published: self.published,
        }
    }
}
