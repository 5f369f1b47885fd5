//! Scripted stub collaborators for pipeline tests.
//!
//! Responses are consumed in order; call counts allow asserting that gated
//! stages were never reached.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::ai::provider::LlmProvider;
use crate::search::WebSearchClient;
use crate::types::{ForgeError, Result};

/// LLM provider returning pre-scripted responses in order.
pub struct StubProvider {
    responses: Mutex<Vec<std::result::Result<String, String>>>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn with_responses(responses: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ForgeError::LlmApi("stub script exhausted".to_string()));
        }
        responses.remove(0).map_err(ForgeError::LlmApi)
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}

/// Search client returning one fixed result.
pub struct StubSearchClient {
    result: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl StubSearchClient {
    pub fn returning(result: impl Into<String>) -> Self {
        Self {
            result: Ok(result.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WebSearchClient for StubSearchClient {
    async fn search(&self, _query: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(ForgeError::Search)
    }
}
