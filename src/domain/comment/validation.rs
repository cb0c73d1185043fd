// src/domain/comment/validation.rs
use thiserror::Error;

/// Upper bound on trimmed comment length, counted in characters.
pub const MAX_COMMENT_LENGTH: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommentValidationError {
    #[error("name is required")]
    MissingAuthor,
    #[error("comment is required")]
    MissingContent,
    #[error("comment is too long (maximum {MAX_COMMENT_LENGTH} characters)")]
    ContentTooLong,
}

impl CommentValidationError {
    pub const fn field(self) -> &'static str {
        match self {
            Self::MissingAuthor => "author_name",
            Self::MissingContent | Self::ContentTooLong => "content",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingAuthor => "missing_author",
            Self::MissingContent => "missing_content",
            Self::ContentTooLong => "content_too_long",
        }
    }
}

/// Raw comment form values as submitted by a reader.
#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
}

/// Trimmed, validated comment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
}

impl CommentDraft {
    pub fn new(
        author_name: impl Into<String>,
        author_email: Option<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_name: author_name.into(),
            author_email,
            content: content.into(),
        }
    }

    /// Check every rule and report all violations at once.
    pub fn validate(&self) -> Result<ValidComment, Vec<CommentValidationError>> {
        let author_name = self.author_name.trim();
        let content = self.content.trim();
        let mut errors = Vec::new();

        if author_name.is_empty() {
            errors.push(CommentValidationError::MissingAuthor);
        }
        if content.is_empty() {
            errors.push(CommentValidationError::MissingContent);
        }
        if content.chars().count() > MAX_COMMENT_LENGTH {
            errors.push(CommentValidationError::ContentTooLong);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let author_email = self
            .author_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);

        Ok(ValidComment {
            author_name: author_name.to_string(),
            author_email,
            content: content.to_string(),
        })
    }
}
