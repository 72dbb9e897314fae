//! Translation document retrieval
//!
//! Translation files are static JSON resources served alongside the page
//! as `assets/data/lang-<code>.json`. Each localization pass issues one
//! fetch, no retries, no backoff. A failed fetch abandons the pass and
//! leaves the page as it was, which is the whole failure contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::FetchConfig;
use crate::document::TranslationDocument;
use crate::language::LanguageCode;

/// Default directory of translation files relative to the site root.
pub const DEFAULT_DATA_PATH: &str = "assets/data";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while retrieving a translation document
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// HTTP request error (network failure, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("server returned status {0}")]
    Status(u16),

    /// Response body is not a decodable translation document
    #[error("malformed translation document: {0}")]
    Decode(String),

    /// Base URL or resource path does not form a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Source of translation documents, keyed by language code.
#[async_trait]
pub trait TranslationSource: Send + Sync {
    async fn fetch(&self, code: &LanguageCode) -> Result<TranslationDocument, FetchError>;
}

/// HTTP-backed [`TranslationSource`].
pub struct HttpTranslationSource {
    client: Client,
    base_url: Url,
    data_path: String,
}

impl HttpTranslationSource {
    /// Create a source rooted at `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` for an unparseable base URL and
    /// `FetchError::Http` if the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_config(
            base_url,
            DEFAULT_DATA_PATH,
            DEFAULT_TIMEOUT,
            &format!("plume/{}", env!("CARGO_PKG_VERSION")),
        )
    }

    /// Create a source with explicit data path, timeout, and user agent.
    pub fn with_config(
        base_url: &str,
        data_path: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(user_agent)
            .build()?;

        // A trailing slash keeps Url::join from eating the last path segment
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            data_path: data_path.trim_matches('/').to_string(),
        })
    }

    /// Build a source from the fetch section of the configuration.
    pub fn from_config(config: &FetchConfig) -> Result<Self, FetchError> {
        Self::with_config(
            &config.base_url,
            &config.data_path,
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )
    }

    /// Relative resource path for a language, e.g. `assets/data/lang-en.json`.
    pub fn resource_path(&self, code: &LanguageCode) -> String {
        if self.data_path.is_empty() {
            format!("lang-{code}.json")
        } else {
            format!("{}/lang-{code}.json", self.data_path)
        }
    }
}

#[async_trait]
impl TranslationSource for HttpTranslationSource {
    async fn fetch(&self, code: &LanguageCode) -> Result<TranslationDocument, FetchError> {
        let path = self.resource_path(code);
        let url = self
            .base_url
            .join(&path)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url = %url, language = %code, "fetching translation document");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json::<TranslationDocument>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e.to_string())
            } else {
                FetchError::Http(e)
            }
        })
    }
}
