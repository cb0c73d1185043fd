// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_blank_string {
    ($name:ident, $what:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($what, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_blank_string!(ArticleTitle, "title");
non_blank_string!(ArticleSlug, "slug");
non_blank_string!(ArticleBody, "content");

/// Display name of the article's author. Blank input falls back to
/// [`DEFAULT_AUTHOR`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self(DEFAULT_AUTHOR.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for AuthorName {
    fn default() -> Self {
        Self(DEFAULT_AUTHOR.to_string())
    }
}

/// Cover image reference: either a plain URI or an embedded `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverImage {
    None,
    Url(String),
    DataUri(String),
}

impl CoverImage {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::None
        } else if trimmed.starts_with("data:") {
            Self::DataUri(trimmed.to_string())
        } else {
            Self::Url(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::Url(value) | Self::DataUri(value) => value,
        }
    }

    pub const fn is_embedded(&self) -> bool {
        matches!(self, Self::DataUri(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_author_defaults_to_admin() {
        assert_eq!(AuthorName::new(None).as_str(), "Admin");
        assert_eq!(AuthorName::new(Some("   ")).as_str(), "Admin");
        assert_eq!(AuthorName::new(Some(" Rina ")).as_str(), "Rina");
    }

    #[test]
    fn cover_image_distinguishes_data_uris() {
        assert!(CoverImage::parse("data:image/png;base64,AAAA").is_embedded());
        assert_eq!(
            CoverImage::parse("https://example.com/a.jpg"),
            CoverImage::Url("https://example.com/a.jpg".into())
        );
        assert_eq!(CoverImage::parse("  "), CoverImage::None);
    }

    #[test]
    fn slug_rejects_blank() {
        assert!(ArticleSlug::new(" ").is_err());
        assert!(ArticleId::new(0).is_err());
    }
}
