//! AI Integration Layer
//!
//! LLM provider abstraction and prompt templates for the pipeline stages.

pub mod prompt;
pub mod provider;

#[cfg(test)]
pub mod testing;

pub use provider::{
    LlmProvider, OllamaProvider, OpenAiProvider, SharedProvider, create_provider,
};
