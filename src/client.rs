//! HTTP client for the Coddie API.
//!
//! Every operation is a single authenticated `GET`. Responses go through
//! [`envelope::unwrap`] and are then decoded into the raw entity types from
//! [`crate::models`]. Failures are returned as [`ClientError`] so callers can
//! tell "not found" apart from "request failed".

use reqwest::{header, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ApiKey, Config};
use crate::envelope::{self, EnvelopeError};
use crate::models::*;

const USER_AGENT: &str = concat!("coddie-mcp-server/", env!("CARGO_PKG_VERSION"));

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: API key missing, invalid or revoked")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Cannot build request URL from base {0}")]
    InvalidUrl(Url),

    #[error("Invalid identifier '{0}'")]
    InvalidIdentifier(String),
}

/// HTTP client for the Coddie API.
#[derive(Debug, Clone)]
pub struct CoddieClient {
    base_url: Url,
    api_key: ApiKey,
    client: Client,
}

impl CoddieClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url().clone(),
            api_key: config.api_key().clone(),
            client: Client::new(),
        }
    }

    /// Append identifiers to the base URL as individual, percent-encoded path
    /// segments. An identifier containing `/` or `?` stays inside its segment.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        // Empty and dot segments would address a different resource.
        if let Some(bad) = segments
            .iter()
            .find(|s| matches!(s.trim(), "" | "." | ".."))
        {
            return Err(ClientError::InvalidIdentifier(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue the request and return the unwrapped payload.
    async fn fetch(&self, segments: &[&str]) -> Result<Value, ClientError> {
        let url = self.url(segments)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(self.api_key.expose())
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "response status");
        tracing::debug!(%body, "response body");

        if !status.is_success() {
            return Err(match status {
                StatusCode::NOT_FOUND => ClientError::NotFound(body),
                StatusCode::BAD_REQUEST => ClientError::BadRequest(body),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized,
                _ => ClientError::Server(format!("{}: {}", status, body)),
            });
        }

        let json: Value = serde_json::from_str(&body)?;
        Ok(envelope::unwrap(json)?)
    }

    /// Fetch a collection. A `null` payload is an empty collection.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Vec<T>, ClientError> {
        match self.fetch(segments).await? {
            Value::Null => Ok(Vec::new()),
            payload => Ok(serde_json::from_value(payload)?),
        }
    }

    /// Fetch a single entity. A `null` payload means it does not exist.
    async fn fetch_one<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        match self.fetch(segments).await? {
            Value::Null => Err(ClientError::NotFound(segments.join("/"))),
            payload => Ok(serde_json::from_value(payload)?),
        }
    }

    // ============================================================
    // Project Operations
    // ============================================================

    /// List all projects of the authenticated user.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.fetch_list(&["projects"]).await
    }

    /// Get a project by ID.
    pub async fn get_project(&self, project_id: &str) -> Result<Project, ClientError> {
        self.fetch_one(&["projects", project_id]).await
    }

    // ============================================================
    // Feature Operations
    // ============================================================

    /// List the features of a project.
    pub async fn list_features(&self, project_id: &str) -> Result<Vec<Feature>, ClientError> {
        self.fetch_list(&["projects", project_id, "features"]).await
    }

    // ============================================================
    // Phase and Step Operations
    // ============================================================

    /// List the development phases of a project.
    pub async fn list_phases(&self, project_id: &str) -> Result<Vec<Phase>, ClientError> {
        self.fetch_list(&["projects", project_id, "phases"]).await
    }

    /// Get a phase by ID.
    pub async fn get_phase(&self, project_id: &str, phase_id: &str) -> Result<Phase, ClientError> {
        self.fetch_one(&["projects", project_id, "phases", phase_id])
            .await
    }

    /// List the implementation steps of a phase.
    pub async fn list_steps(
        &self,
        project_id: &str,
        phase_id: &str,
    ) -> Result<Vec<Step>, ClientError> {
        self.fetch_list(&["projects", project_id, "phases", phase_id, "steps"])
            .await
    }

    // ============================================================
    // Rule Operations
    // ============================================================

    /// List the editor rules of a project.
    pub async fn list_rules(&self, project_id: &str) -> Result<Vec<Rule>, ClientError> {
        self.fetch_list(&["projects", project_id, "rules"]).await
    }

    /// Get a rule by ID.
    pub async fn get_rule(&self, project_id: &str, rule_id: &str) -> Result<Rule, ClientError> {
        self.fetch_one(&["projects", project_id, "rules", rule_id])
            .await
    }
}
