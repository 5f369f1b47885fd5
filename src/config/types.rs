//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/paperforge/) and project (.paperforge/)
//! level configuration. Credentials live here (or in env vars read at
//! provider construction), never in process-wide mutable state.

use serde::{Deserialize, Serialize};

use crate::constants::{chunking, network, summary};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Web search settings
    pub search: SearchConfig,

    /// Document chunking and summary reduction settings
    pub chunking: ChunkingConfig,

    /// Drafting settings
    pub drafting: DraftingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            search: SearchConfig::default(),
            chunking: ChunkingConfig::default(),
            drafting: DraftingConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ForgeError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::types::ForgeError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(crate::types::ForgeError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.search.timeout_secs == 0 {
            return Err(crate::types::ForgeError::Config(
                "Search timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.chunking.max_chars == 0 {
            return Err(crate::types::ForgeError::Config(
                "Chunking max_chars must be greater than 0".to_string(),
            ));
        }

        if self.chunking.overlap >= self.chunking.max_chars {
            return Err(crate::types::ForgeError::Config(format!(
                "Chunking overlap ({}) must be less than max_chars ({})",
                self.chunking.overlap, self.chunking.max_chars
            )));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider type: "openai", "ollama"
    pub provider: String,

    /// Model name (provider-specific); None uses the provider default
    pub model: Option<String>,

    /// API key (for OpenAI). Never serialized to output for security.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Temperature for LLM generation (0.0 = deterministic)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: None,
            api_key: None,
            api_base: None,
            timeout_secs: network::DEFAULT_LLM_TIMEOUT_SECS,
            temperature: 0.0,
            max_tokens: 4096,
        }
    }
}

// =============================================================================
// Search Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// SerpApi key. Never serialized to output for security.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Search engine passed to SerpApi
    pub engine: String,

    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine: "google".to_string(),
            api_base: None,
            timeout_secs: network::DEFAULT_SEARCH_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Chunking Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk
    pub max_chars: usize,

    /// Overlap characters between adjacent chunks
    pub overlap: usize,

    /// Combined-summary length that triggers one reduction pass
    pub collapse_threshold: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: chunking::MAX_CHUNK_CHARS,
            overlap: chunking::CHUNK_OVERLAP,
            collapse_threshold: summary::COLLAPSE_THRESHOLD_CHARS,
        }
    }
}

// =============================================================================
// Drafting Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DraftingConfig {
    /// Supplementary instructions appended to the research narrative
    /// before the drafting and writing stages (style guides, prompt
    /// sub-questions, formatting requirements)
    pub supplementary_context: Option<String>,
}
