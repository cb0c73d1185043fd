// src/application/ports/preferences.rs
use crate::application::{ApplicationResult, theme::Theme};
use async_trait::async_trait;

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn load_theme(&self) -> ApplicationResult<Option<Theme>>;
    async fn save_theme(&self, theme: Theme) -> ApplicationResult<()>;
}
