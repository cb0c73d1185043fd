// src/application/theme/mod.rs
use crate::application::{ApplicationResult, ports::preferences::PreferenceStore};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThemeDto {
    pub theme: Theme,
    /// False while the theme still comes from the client's system hint.
    pub saved: bool,
}

#[derive(Debug, Clone, Copy)]
struct ThemeState {
    theme: Theme,
    saved: bool,
}

/// Process-wide light/dark flag. Initialised from the store on first use and
/// written through on every toggle.
pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
    state: RwLock<Option<ThemeState>>,
}

impl ThemeService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            state: RwLock::new(None),
        }
    }

    /// Current theme. `system_hint` is the client's preferred scheme, used
    /// only while nothing has been saved.
    pub async fn current(&self, system_hint: Option<Theme>) -> ApplicationResult<ThemeDto> {
        if let Some(state) = *self.state.read().await {
            if state.saved {
                return Ok(to_dto(state));
            }
        }

        let mut guard = self.state.write().await;
        let state = match self.store.load_theme().await? {
            Some(theme) => ThemeState { theme, saved: true },
            None => ThemeState {
                theme: system_hint.unwrap_or_default(),
                saved: false,
            },
        };
        *guard = Some(state);
        Ok(to_dto(state))
    }

    pub async fn toggle(&self, system_hint: Option<Theme>) -> ApplicationResult<ThemeDto> {
        let current = self.current(system_hint).await?.theme;
        let mut guard = self.state.write().await;
        let next = current.toggled();
        self.store.save_theme(next).await?;
        let state = ThemeState {
            theme: next,
            saved: true,
        };
        *guard = Some(state);
        tracing::debug!(theme = %next, "theme toggled");
        Ok(to_dto(state))
    }
}

const fn to_dto(state: ThemeState) -> ThemeDto {
    ThemeDto {
        theme: state.theme,
        saved: state.saved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        theme: Mutex<Option<Theme>>,
        saves: Mutex<u32>,
    }

    #[async_trait]
    impl PreferenceStore for MemoryStore {
        async fn load_theme(&self) -> ApplicationResult<Option<Theme>> {
            Ok(*self.theme.lock().unwrap())
        }

        async fn save_theme(&self, theme: Theme) -> ApplicationResult<()> {
            *self.theme.lock().unwrap() = Some(theme);
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn unsaved_theme_follows_system_hint() {
        let service = ThemeService::new(Arc::new(MemoryStore::default()));
        let dto = service.current(Some(Theme::Dark)).await.unwrap();
        assert_eq!(dto, ThemeDto { theme: Theme::Dark, saved: false });
        let dto = service.current(None).await.unwrap();
        assert_eq!(dto.theme, Theme::Light);
    }

    #[tokio::test]
    async fn toggle_writes_through_and_wins_over_hint() {
        let store = Arc::new(MemoryStore::default());
        let service = ThemeService::new(store.clone());

        let dto = service.toggle(None).await.unwrap();
        assert_eq!(dto, ThemeDto { theme: Theme::Dark, saved: true });
        assert_eq!(*store.theme.lock().unwrap(), Some(Theme::Dark));

        let dto = service.current(Some(Theme::Light)).await.unwrap();
        assert_eq!(dto.theme, Theme::Dark);

        service.toggle(None).await.unwrap();
        assert_eq!(*store.saves.lock().unwrap(), 2);
        assert_eq!(*store.theme.lock().unwrap(), Some(Theme::Light));
    }

    #[tokio::test]
    async fn saved_theme_is_loaded_from_store() {
        let store = MemoryStore::default();
        *store.theme.lock().unwrap() = Some(Theme::Dark);
        let service = ThemeService::new(Arc::new(store));
        assert_eq!(service.current(Some(Theme::Light)).await.unwrap().theme, Theme::Dark);
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
