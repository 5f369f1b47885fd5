//! LLM Provider Abstraction
//!
//! Defines the LlmProvider trait for free-text completion.
//!
//! Providers differ in whether they return plain strings or structured
//! response objects; `normalize_content` flattens both shapes to a plain
//! string at this boundary, so no caller ever branches on response shape.

mod ollama;
mod openai;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::types::{ForgeError, Result};

/// Shared LLM provider handle passed to every pipeline stage.
pub type SharedProvider = Arc<dyn LlmProvider>;

/// LLM Provider trait for free-text generation
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Render a completion for the prompt, normalized to plain text.
    ///
    /// Implementations must return a non-structured string; callers treat
    /// the payload as opaque prose.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is available
    async fn health_check(&self) -> Result<bool>;
}

/// Create a shared provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiProvider::new(config.clone())?)),
        "ollama" => Ok(Arc::new(OllamaProvider::new(config.clone())?)),
        _ => Err(ForgeError::Config(format!(
            "Unknown provider: {}. Supported: openai, ollama",
            config.provider
        ))),
    }
}

/// Flatten a completion payload to plain text.
///
/// Chat APIs return message content either as a plain string or as an
/// array of typed parts (`{"type": "text", "text": ...}`). Returns `None`
/// for shapes carrying no text at all.
pub(crate) fn normalize_content(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(parts) => {
            let text: Vec<&str> = parts
                .iter()
                .filter_map(|part| match part {
                    Value::String(s) => Some(s.as_str()),
                    Value::Object(obj) => obj.get("text").and_then(Value::as_str),
                    _ => None,
                })
                .collect();
            if text.is_empty() {
                None
            } else {
                Some(text.join(""))
            }
        }
        Value::Object(obj) => obj
            .get("text")
            .or_else(|| obj.get("content"))
            .and_then(|v| normalize_content(v)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_plain_string() {
        assert_eq!(
            normalize_content(&json!("plain text")),
            Some("plain text".to_string())
        );
    }

    #[test]
    fn test_normalize_content_parts() {
        let value = json!([
            {"type": "text", "text": "first "},
            {"type": "text", "text": "second"},
        ]);
        assert_eq!(normalize_content(&value), Some("first second".to_string()));
    }

    #[test]
    fn test_normalize_nested_object() {
        let value = json!({"content": "inner text"});
        assert_eq!(normalize_content(&value), Some("inner text".to_string()));
    }

    #[test]
    fn test_normalize_textless_shape() {
        assert_eq!(normalize_content(&json!(42)), None);
        assert_eq!(normalize_content(&json!([{"type": "image"}])), None);
    }

    #[test]
    fn test_create_provider_rejects_unknown() {
        let config = LlmConfig {
            provider: "mystery".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            create_provider(&config),
            Err(ForgeError::Config(_))
        ));
    }
}
