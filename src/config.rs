// src/config.rs
use crate::application::services::ServiceSettings;
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    public_base_url: String,
    page_size: u32,
    related_limit: usize,
    comments_require_approval: bool,
    sanitize_article_body: bool,
    seed_sample_articles: bool,
    admin_credentials: Option<(String, String)>,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://publartz.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_public_base_url() -> String {
    "http://localhost:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const DEFAULT_TOKEN_TTL: u64 = 3600;
const DEFAULT_PAGE_SIZE: u32 = 6;
const DEFAULT_RELATED_LIMIT: usize = 3;

fn parse_number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got '{raw}'"))),
        _ => Ok(default),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = non_blank(&lookup, "DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = non_blank(&lookup, "LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let biscuit_private_key = non_blank(&lookup, "BISCUIT_ROOT_PRIVATE_KEY")
            .ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;
        if biscuit_private_key.len() != 64
            || !biscuit_private_key.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs = parse_number(&lookup, "TOKEN_TTL_SECONDS", DEFAULT_TOKEN_TTL)?;
        if token_ttl_secs == 0 {
            return Err(ConfigError::Invalid("TOKEN_TTL_SECONDS must be positive".into()));
        }

        let allowed_origins = non_blank(&lookup, "ALLOWED_ORIGINS").map_or_else(
            default_allowed_origins,
            |raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            },
        );

        let public_base_url = non_blank(&lookup, "PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_public_base_url);

        let page_size = parse_number(&lookup, "CATALOG_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid("CATALOG_PAGE_SIZE must be positive".into()));
        }
        let related_limit = parse_number(&lookup, "RELATED_LIMIT", DEFAULT_RELATED_LIMIT)?;

        let admin_credentials = match (
            non_blank(&lookup, "ADMIN_EMAIL"),
            lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty()),
        ) {
            (Some(email), Some(password)) => Some((email, password)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_EMAIL")),
        };

        Ok(Self {
            database_url,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            public_base_url,
            page_size,
            related_limit,
            comments_require_approval: parse_flag(&lookup, "COMMENTS_REQUIRE_APPROVAL", false)?,
            sanitize_article_body: parse_flag(&lookup, "SANITIZE_ARTICLE_BODY", true)?,
            seed_sample_articles: parse_flag(&lookup, "SEED_SAMPLE_ARTICLES", false)?,
            admin_credentials,
            rate_limit_enabled: parse_flag(&lookup, "RATE_LIMIT_ENABLED", true)?,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub const fn seed_sample_articles(&self) -> bool {
        self.seed_sample_articles
    }

    /// Email and password of the admin to create on first start, if configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        self.admin_credentials
            .as_ref()
            .map(|(email, password)| (email.as_str(), password.as_str()))
    }

    pub const fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            page_size: self.page_size,
            related_limit: self.related_limit,
            comments_require_approval: self.comments_require_approval,
            sanitize_article_body: self.sanitize_article_body,
            public_base_url: self.public_base_url.clone(),
        }
    }
}
