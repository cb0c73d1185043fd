// src/infrastructure/repositories/mod.rs
pub mod error;
mod sqlite_admin;
mod sqlite_article;
mod sqlite_comment;
mod sqlite_preferences;

pub use sqlite_admin::SqliteAdminRepository;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_comment::SqliteCommentRepository;
pub use sqlite_preferences::SqlitePreferenceStore;
