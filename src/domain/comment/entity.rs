// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::validation::ValidComment;
use crate::domain::comment::value_objects::CommentId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated comment ready for insertion. Always starts unapproved.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(article_id: ArticleId, valid: ValidComment, now: DateTime<Utc>) -> Self {
        let ValidComment {
            author_name,
            author_email,
            content,
        } = valid;
        Self {
            id: CommentId::generate(),
            article_id,
            author_name,
            author_email,
            content,
            is_approved: false,
            created_at: now,
            updated_at: now,
        }
    }
}
