//! Startup configuration for the Coddie API client.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use thiserror::Error;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.coddie.dev/api/mcp";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is required. Please provide --api-key argument.")]
    MissingApiKey,

    #[error("Invalid API key provided. Please provide a valid API key after --api-key flag.")]
    InvalidApiKey,

    #[error("Invalid base URL '{0}': must be an absolute http(s) URL")]
    InvalidBaseUrl(String),
}

/// Bearer credential for the Coddie API.
///
/// Only constructible through [`ApiKey::from_str`], so a held key is never
/// blank. The value is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromStr for ApiKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        // A flag directly after --api-key means the value was omitted.
        if key.starts_with("--") || key.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidApiKey);
        }
        Ok(Self(key.to_string()))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Process-wide client configuration, built once in `main` and shared by
/// reference.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: ApiKey,
    base_url: Url,
}

impl Config {
    pub fn new(api_key: ApiKey, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url =
            Url::parse(trimmed).map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            api_key,
            base_url: url,
        })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Base URL, guaranteed to be an absolute http(s) URL. Trailing slashes
    /// given on the command line are dropped; a bare host still prints as
    /// `http://host/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
