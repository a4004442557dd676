// src/config.rs
use crate::application::services::SlugSettings;
use crate::domain::translation::{Locale, SlugSeparator};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    default_locale: Locale,
    slug_separator: SlugSeparator,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Which translation store a database URL selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite,
    Postgres,
}

fn default_database_url() -> String {
    "sqlite://slugline.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_locale() -> String {
    "en".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`,
    /// which keeps tests away from the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let default_locale = Locale::new(lookup("DEFAULT_LOCALE").unwrap_or_else(default_locale))
            .map_err(|err| ConfigError::Invalid(format!("DEFAULT_LOCALE: {err}")))?;

        let slug_separator = match lookup("SLUG_SEPARATOR") {
            Some(raw) => SlugSeparator::new(raw)
                .map_err(|err| ConfigError::Invalid(format!("SLUG_SEPARATOR: {err}")))?,
            None => SlugSeparator::default(),
        };

        let config = Self {
            database_url,
            listen_addr,
            default_locale,
            slug_separator,
        };
        config.backend()?;
        Ok(config)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn slug_separator(&self) -> &SlugSeparator {
        &self.slug_separator
    }

    pub fn backend(&self) -> Result<StoreBackend, ConfigError> {
        let url = self.database_url.as_str();
        if url == "memory:" {
            Ok(StoreBackend::Memory)
        } else if url.starts_with("sqlite:") {
            Ok(StoreBackend::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(StoreBackend::Postgres)
        } else {
            Err(ConfigError::Invalid(format!(
                "unsupported DATABASE_URL scheme: {url}"
            )))
        }
    }

    pub fn slug_settings(&self) -> SlugSettings {
        SlugSettings {
            default_locale: self.default_locale.clone(),
            separator: self.slug_separator.clone(),
        }
    }
}
