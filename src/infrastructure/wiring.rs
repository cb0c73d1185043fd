// src/infrastructure/wiring.rs
use crate::application::{
    ports::security::TokenManager,
    services::{Adapters, Repositories},
};
use crate::infrastructure::{
    media::DataUriImageEncoder,
    repositories::{
        SqliteAdminRepository, SqliteArticleReadRepository, SqliteArticleWriteRepository,
        SqliteCommentRepository, SqlitePreferenceStore,
    },
    security::{password::Argon2PasswordHasher, session_store::InMemorySessionRevocationStore},
    time::SystemClock,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// SQLite-backed repositories sharing one pool.
pub fn sqlite_repositories(pool: &Arc<SqlitePool>) -> Repositories {
    Repositories {
        article_write: Arc::new(SqliteArticleWriteRepository::new(Arc::clone(pool))),
        article_read: Arc::new(SqliteArticleReadRepository::new(Arc::clone(pool))),
        comments: Arc::new(SqliteCommentRepository::new(Arc::clone(pool))),
        admins: Arc::new(SqliteAdminRepository::new(Arc::clone(pool))),
        preferences: Arc::new(SqlitePreferenceStore::new(
            Arc::clone(pool),
            Arc::new(SystemClock),
        )),
    }
}

/// Production adapters around the given token manager.
pub fn default_adapters(token_manager: Arc<dyn TokenManager>) -> Adapters {
    Adapters {
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager,
        session_store: Arc::new(InMemorySessionRevocationStore::new()),
        image_encoder: Arc::new(DataUriImageEncoder),
        clock: Arc::new(SystemClock),
    }
}
