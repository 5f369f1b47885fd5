//! PaperForge - AI-Driven Philosophy Paper Generator
//!
//! Turns a topic prompt, optional supporting documents, and web search
//! findings into a structured philosophy-paper draft through a staged
//! pipeline: research, outline drafting, then full prose writing.
//!
//! ## Core Features
//!
//! - **Staged Pipeline**: research → outline → write, with output gates
//!   between stages
//! - **Document Ingestion**: PDF, plain-text, and DOCX extraction with
//!   overlapping chunking and map-reduce summarization
//! - **Web Research**: SerpApi-backed search folded into the research
//!   narrative
//! - **Provider Abstraction**: OpenAI and Ollama backends behind one trait
//!
//! ## Quick Start
//!
//! ```ignore
//! use paperforge::config::ConfigLoader;
//! use paperforge::pipeline::PipelineManager;
//!
//! let config = ConfigLoader::load()?;
//! let pipeline = PipelineManager::from_config(&config)?;
//! let paper = pipeline.run("Free Will in Augustine: discuss", &docs).await?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: LLM provider abstraction and prompt construction
//! - [`ingest`]: Document extraction, chunking, summarization
//! - [`search`]: Web search client
//! - [`pipeline`]: Stage coordination and gating
//! - [`config`]: Layered configuration

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod ingest;
pub mod pipeline;
pub mod search;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::{ForgeError, Result};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use pipeline::{DocumentWriter, OutlineDrafter, PipelineManager, ResearchCoordinator, Stage};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{LlmProvider, OllamaProvider, OpenAiProvider, SharedProvider, create_provider};

// =============================================================================
// Ingestion Re-exports
// =============================================================================

pub use ingest::{DocumentIngester, TextChunker};
