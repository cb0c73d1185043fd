use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{preferences::PreferenceStore, time::Clock},
    theme::Theme,
};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::warn;

const THEME_KEY: &str = "theme";

pub struct SqlitePreferenceStore {
    pool: Arc<SqlitePool>,
    clock: Arc<dyn Clock>,
}

impl SqlitePreferenceStore {
    pub fn new(pool: Arc<SqlitePool>, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn load_theme(&self) -> ApplicationResult<Option<Theme>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM preferences WHERE key = ?")
                .bind(THEME_KEY)
                .fetch_optional(&*self.pool)
                .await
                .map_err(|err| ApplicationError::from(map_sqlx(err)))?;

        Ok(value.and_then(|raw| match raw.parse() {
            Ok(theme) => Some(theme),
            Err(reason) => {
                warn!(%reason, "ignoring stored theme");
                None
            }
        }))
    }

    async fn save_theme(&self, theme: Theme) -> ApplicationResult<()> {
        sqlx::query(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?, ?, ?) \
             ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(THEME_KEY)
        .bind(theme.as_str())
        .bind(self.clock.now())
        .execute(&*self.pool)
        .await
        .map_err(|err| ApplicationError::from(map_sqlx(err)))?;
        Ok(())
    }
}
