//! # wordlens-api
//!
//! HTTP client for the `dictionaryapi.dev` word-definition endpoint.
//!
//! One lookup is one `GET {base_url}/{word}`. The response body decides the
//! outcome: a JSON sequence yields its first entry, any other JSON value means
//! the word has no definitions, and everything else is an [`ApiError`].

mod error;
mod http;

pub use error::ApiError;

use std::future::Future;

use wordlens_config::ApiConfig;
use wordlens_core::{DictionaryEntry, Query};

// ── Types ──────────────────────────────────────────────────────────

/// Result of a lookup that reached the API and got a JSON answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// First entry of the returned sequence.
    Found(DictionaryEntry),
    /// The API answered with a non-sequence payload. `title` carries the
    /// API's own label when it sent one.
    NotFound { title: Option<String> },
}

/// Anything that can resolve a normalized query to a lookup outcome.
///
/// The widget depends on this seam instead of on [`DictionaryClient`], so
/// hosts and tests can substitute their own source.
pub trait DictionarySource: Send + Sync {
    /// Look up `query`, issuing at most one request.
    fn lookup(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<LookupOutcome, ApiError>> + Send;
}

impl<T: DictionarySource> DictionarySource for std::sync::Arc<T> {
    fn lookup(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<LookupOutcome, ApiError>> + Send {
        (**self).lookup(query)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the dictionary endpoint.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] if the configuration is invalid
    /// or the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        config
            .validate()
            .map_err(|e| ApiError::InvalidEndpoint(e.to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::InvalidEndpoint(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for `query`, with the word percent-encoded as a
    /// single path segment.
    #[must_use]
    pub fn entry_url(&self, query: &Query) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(query.as_str()))
    }

    /// Look up `query` against the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the body is not JSON, the
    /// sequence is empty, or its first entry cannot be parsed.
    pub async fn lookup(&self, query: &Query) -> Result<LookupOutcome, ApiError> {
        let url = self.entry_url(query);
        tracing::debug!(%query, %url, "dictionary lookup");

        let resp = self.http.get(&url).send().await?;
        let payload = http::read_payload(resp).await?;
        http::classify(query, payload)
    }
}

impl DictionarySource for DictionaryClient {
    fn lookup(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<LookupOutcome, ApiError>> + Send {
        Self::lookup(self, query)
    }
}
