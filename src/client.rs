//! HTTP access to the remote lexical search service.

use std::time::Duration;

use serde_json::error::Category;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::query::WordQuery;
use crate::types::{LookupError, Result, WordEntry};

/// Client for the `/words` endpoint.
///
/// Holds a configured [`reqwest::Client`]; cloning is cheap and clones share
/// the underlying connection pool. Each [`search`](Client::search) call owns
/// its query and its in-flight request independently, so a single client can
/// serve concurrent lookups.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one lookup and decode the response.
    ///
    /// The query is consumed; build a new one for the next lookup. The call
    /// always resolves: success with the decoded entries, or exactly one
    /// [`LookupError`] for a transport failure, a non-2xx status, or a
    /// malformed body. No partial result lists are produced.
    pub async fn search(&self, query: WordQuery) -> Result<Vec<WordEntry>> {
        let url = format!("{}/words?{}", self.base_url, query.encode());
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("lookup rejected with status {}", status.as_u16());
            return Err(LookupError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let entries: Vec<WordEntry> = serde_json::from_str(&body).map_err(|e| {
            let kind = match e.classify() {
                Category::Syntax => "corrupted data",
                Category::Data => "schema mismatch",
                Category::Eof => "truncated body",
                Category::Io => "read failure",
            };
            warn!("failed to decode lookup response ({}): {}", kind, e);
            e
        })?;

        debug!("lookup returned {} entries", entries.len());
        Ok(entries)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
