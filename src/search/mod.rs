//! Web Search
//!
//! A narrow synchronous-in-spirit search capability: one query in, raw
//! text findings out. No retries, no pagination; failures surface as
//! `ForgeError::Search` for the caller to handle.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::types::{ForgeError, Result};

const DEFAULT_API_BASE: &str = "https://serpapi.com";

/// Maximum organic results flattened into the findings text
const MAX_RESULTS: usize = 8;

/// Abstract client that hits an external search API.
#[async_trait]
pub trait WebSearchClient: Send + Sync {
    /// Execute one search and return its findings as free text.
    async fn search(&self, query: &str) -> Result<String>;
}

/// Shared search client handle.
pub type SharedSearchClient = Arc<dyn WebSearchClient>;

/// SerpApi-backed search client.
pub struct SerpApiClient {
    api_key: SecretString,
    api_base: String,
    engine: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("engine", &self.engine)
            .finish()
    }
}

impl SerpApiClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .or_else(|| std::env::var("SERPAPI_API_KEY").ok())
            .ok_or_else(|| {
                ForgeError::Config(
                    "SerpApi key not found. Set SERPAPI_API_KEY env var or provide in config"
                        .to_string(),
                )
            })?;

        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForgeError::Search(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key_str),
            api_base,
            engine: config.engine,
            client,
        })
    }
}

#[async_trait]
impl WebSearchClient for SerpApiClient {
    async fn search(&self, query: &str) -> Result<String> {
        info!("Searching the web ({}) for: {}", self.engine, query);

        let url = format!("{}/search.json", self.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", self.engine.as_str()),
                ("q", query),
                ("api_key", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| ForgeError::Search(format!("search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ForgeError::Search(format!(
                "search API error ({}): {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ForgeError::Search(format!("failed to parse search response: {}", e)))?;

        debug!("Flattening search response");
        flatten_findings(&body)
            .ok_or_else(|| ForgeError::Search(format!("no results found for '{}'", query)))
    }
}

/// Flatten a SerpApi response into free-text findings.
///
/// Answer-box text comes first when present, followed by up to
/// `MAX_RESULTS` organic results as `title: snippet` lines.
fn flatten_findings(body: &Value) -> Option<String> {
    let mut lines = Vec::new();

    if let Some(answer_box) = body.get("answer_box") {
        for key in ["answer", "snippet"] {
            if let Some(text) = answer_box.get(key).and_then(Value::as_str) {
                lines.push(text.to_string());
                break;
            }
        }
    }

    if let Some(results) = body.get("organic_results").and_then(Value::as_array) {
        for result in results.iter().take(MAX_RESULTS) {
            let title = result.get("title").and_then(Value::as_str);
            let snippet = result.get("snippet").and_then(Value::as_str);
            match (title, snippet) {
                (Some(t), Some(s)) => lines.push(format!("{}: {}", t, s)),
                (None, Some(s)) => lines.push(s.to_string()),
                (Some(t), None) => lines.push(t.to_string()),
                (None, None) => {}
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
