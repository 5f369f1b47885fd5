//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Taxonomy
//!
//! - **MissingInput**: a caller-supplied document path does not exist
//! - **UnsupportedFormat**: file extension outside pdf/txt/docx
//! - **Extraction**: document opened but yielded no usable text
//! - **Summarization**: every chunk of a document failed to summarize
//! - **StageGate**: a pipeline stage produced empty or error-marked output
//! - **LlmApi** / **Search**: external capability failures
//!
//! ## Design Principles
//!
//! - Single unified error type (ForgeError) for the entire application
//! - Failures travel by return value through the pipeline, never by panic
//! - Per-document and per-chunk failures are recovered locally as warnings;
//!   only stage-level failures short-circuit the pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::Stage;

#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Document Errors
    // -------------------------------------------------------------------------
    #[error("Document not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Unsupported document format: {extension} ({})", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Extraction failed for {}: {reason}", .path.display())]
    Extraction { path: PathBuf, reason: String },

    #[error("Summarization failed: {0}")]
    Summarization(String),

    // -------------------------------------------------------------------------
    // Pipeline Errors
    // -------------------------------------------------------------------------
    /// A stage gate rejected the output of the stage that just completed.
    #[error("{stage} phase failed: {message}")]
    StageGate { stage: Stage, message: String },

    // -------------------------------------------------------------------------
    // External Capability Errors
    // -------------------------------------------------------------------------
    #[error("LLM API error: {0}")]
    LlmApi(String),

    #[error("Web search error: {0}")]
    Search(String),

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

impl ForgeError {
    /// Create an extraction error with path context
    pub fn extraction(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a stage gate error
    pub fn stage_gate(stage: Stage, message: impl Into<String>) -> Self {
        Self::StageGate {
            stage,
            message: message.into(),
        }
    }

    /// True for failures recovered locally during batch ingestion
    /// (reported as warning lines, not fatal to the batch).
    pub fn is_document_local(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_)
                | Self::UnsupportedFormat { .. }
                | Self::Extraction { .. }
                | Self::Summarization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_gate_message_names_stage() {
        let err = ForgeError::stage_gate(Stage::Research, "Error: search failed");
        assert_eq!(
            err.to_string(),
            "Research phase failed: Error: search failed"
        );

        let err = ForgeError::stage_gate(Stage::Drafting, "empty output");
        assert!(err.to_string().starts_with("Drafting phase failed"));
    }

    #[test]
    fn test_missing_input_names_path() {
        let err = ForgeError::MissingInput(PathBuf::from("docs/sinner.pdf"));
        assert!(err.to_string().contains("docs/sinner.pdf"));
    }

    #[test]
    fn test_document_local_classification() {
        assert!(ForgeError::MissingInput(PathBuf::from("x")).is_document_local());
        assert!(ForgeError::Summarization("all chunks failed".into()).is_document_local());
        assert!(!ForgeError::LlmApi("boom".into()).is_document_local());
        assert!(!ForgeError::stage_gate(Stage::Writing, "empty").is_document_local());
    }
}
