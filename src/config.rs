//! Configuration management for the plume localizer
//!
//! Configuration loads from environment variables (`PLUME_*`) or a TOML
//! file, with working defaults for a site served from localhost.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::language::{LanguageCode, FALLBACK_LANGUAGE};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Translation fetch configuration
    pub fetch: FetchConfig,

    /// Language resolution configuration
    pub language: LanguageConfig,

    /// Selection persistence configuration
    pub state: StateConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Translation fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Site root the translation files are served under
    pub base_url: String,

    /// Directory of translation files relative to the site root
    pub data_path: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

/// Language resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Fallback code when neither storage nor the host preference
    /// yields a language
    pub fallback: String,
}

/// Selection persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the JSON selection state file
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PLUME_BASE_URL")
            .unwrap_or_else(|_| String::from("http://localhost:8000/"));

        let data_path =
            std::env::var("PLUME_DATA_PATH").unwrap_or_else(|_| String::from("assets/data"));

        let request_timeout_secs = std::env::var("PLUME_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let user_agent = std::env::var("PLUME_USER_AGENT")
            .unwrap_or_else(|_| format!("plume/{}", env!("CARGO_PKG_VERSION")));

        let fallback = std::env::var("PLUME_FALLBACK_LANGUAGE")
            .unwrap_or_else(|_| String::from(FALLBACK_LANGUAGE));

        let state_path = std::env::var("PLUME_STATE_PATH")
            .unwrap_or_else(|_| String::from("data/selection.json"))
            .into();

        let log_level = std::env::var("PLUME_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format = std::env::var("PLUME_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            fetch: FetchConfig {
                base_url,
                data_path,
                request_timeout_secs,
                user_agent,
            },
            language: LanguageConfig { fallback },
            state: StateConfig { path: state_path },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if url::Url::parse(&self.fetch.base_url).is_err() {
            anyhow::bail!("base_url is not a valid URL: {}", self.fetch.base_url);
        }

        if self.fetch.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if LanguageCode::parse(&self.language.fallback).is_none() {
            anyhow::bail!("fallback is not a language code: {}", self.language.fallback);
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.request_timeout_secs)
    }

    /// Fallback language as a parsed code.
    #[must_use]
    pub fn fallback_language(&self) -> LanguageCode {
        LanguageCode::parse(&self.language.fallback).unwrap_or_else(LanguageCode::fallback)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig {
                base_url: String::from("http://localhost:8000/"),
                data_path: String::from("assets/data"),
                request_timeout_secs: 30,
                user_agent: format!("plume/{}", env!("CARGO_PKG_VERSION")),
            },
            language: LanguageConfig {
                fallback: String::from(FALLBACK_LANGUAGE),
            },
            state: StateConfig {
                path: PathBuf::from("data/selection.json"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
