//! Paper Generation Pipeline
//!
//! Sequences the research, drafting, and writing stages with a gate
//! between each: empty or error-marked output halts the run with a
//! stage-tagged failure. Data flows strictly forward; no stage starts
//! before the previous stage's gate passes.
//!
//! ```text
//! Idle → Researching → Drafting → Writing → Done
//!              \           \          \
//!               └───────────┴──────────┴──→ Failed(reason)
//! ```
//!
//! Failures travel by typed return value: every stage returns `Result`,
//! and the manager never panics on malformed model output.

pub mod outline;
pub mod research;
pub mod writer;

pub use outline::OutlineDrafter;
pub use research::ResearchCoordinator;
pub use writer::DocumentWriter;

use std::path::PathBuf;

use tracing::info;

use crate::ai::provider::{SharedProvider, create_provider};
use crate::config::Config;
use crate::ingest::DocumentIngester;
use crate::search::{SerpApiClient, SharedSearchClient};
use crate::types::{ForgeError, Result, extract_topic};

/// Pipeline stages, in execution order. Used to tag gate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Research,
    Drafting,
    Writing,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Research => write!(f, "Research"),
            Stage::Drafting => write!(f, "Drafting"),
            Stage::Writing => write!(f, "Writing"),
        }
    }
}

/// Validate a stage's output before control passes downstream.
///
/// Empty output and output carrying the `error` marker both fail the gate;
/// everything else is treated as opaque payload.
fn stage_gate(stage: Stage, output: &str) -> Result<()> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(ForgeError::stage_gate(stage, "produced empty output"));
    }
    if trimmed.to_lowercase().contains("error") {
        return Err(ForgeError::stage_gate(stage, trimmed));
    }
    Ok(())
}

pub struct PipelineManager {
    research: ResearchCoordinator,
    drafter: OutlineDrafter,
    writer: DocumentWriter,
    supplementary_context: Option<String>,
}

impl PipelineManager {
    pub fn new(
        research: ResearchCoordinator,
        drafter: OutlineDrafter,
        writer: DocumentWriter,
        supplementary_context: Option<String>,
    ) -> Self {
        Self {
            research,
            drafter,
            writer,
            supplementary_context,
        }
    }

    /// Wire a complete pipeline from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider: SharedProvider = create_provider(&config.llm)?;
        let search: SharedSearchClient =
            std::sync::Arc::new(SerpApiClient::new(config.search.clone())?);

        let ingester = DocumentIngester::new(&config.chunking, provider.clone());
        let research = ResearchCoordinator::new(ingester, search, provider.clone());
        let drafter = OutlineDrafter::new(provider.clone());
        let writer = DocumentWriter::new(provider);

        Ok(Self::new(
            research,
            drafter,
            writer,
            config.drafting.supplementary_context.clone(),
        ))
    }

    /// Coordinate the complete process for a philosophy paper.
    ///
    /// The topic is the prompt text before its first `:`; prompts without
    /// a colon are taken whole.
    pub async fn run(&self, detailed_prompt: &str, document_paths: &[PathBuf]) -> Result<String> {
        let topic = extract_topic(detailed_prompt);

        info!("=== Starting Research Phase ===");
        let research_query = format!("Analyze the following topic: {}", topic);
        let narrative = self.research.run(&research_query, document_paths).await?;
        stage_gate(Stage::Research, &narrative)?;

        let narrative = match &self.supplementary_context {
            Some(context) => format!("{}\n{}", narrative, context),
            None => narrative,
        };

        info!("=== Starting Drafting Phase ===");
        let outline = self.drafter.create_outline(&topic, &narrative).await?;
        stage_gate(Stage::Drafting, &outline)?;

        info!("=== Starting Writing Phase ===");
        let document = self.writer.write_document(&outline, &narrative).await?;
        stage_gate(Stage::Writing, &document)?;

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::{StubProvider, StubSearchClient};
    use crate::config::ChunkingConfig;
    use std::sync::Arc;

    fn manager(
        provider: Arc<StubProvider>,
        search: Arc<StubSearchClient>,
        supplementary: Option<String>,
    ) -> PipelineManager {
        let ingester = DocumentIngester::new(&ChunkingConfig::default(), provider.clone());
        PipelineManager::new(
            ResearchCoordinator::new(ingester, search, provider.clone()),
            OutlineDrafter::new(provider.clone()),
            DocumentWriter::new(provider),
            supplementary,
        )
    }

    #[test]
    fn test_gate_accepts_ordinary_output() {
        assert!(stage_gate(Stage::Research, "Augustine argued...").is_ok());
    }

    #[test]
    fn test_gate_rejects_empty_and_error_marked_output() {
        assert!(stage_gate(Stage::Research, "   \n").is_err());
        assert!(stage_gate(Stage::Drafting, "Error: upstream failed").is_err());
        // Marker check is case-insensitive
        assert!(stage_gate(Stage::Writing, "ERROR mid-document").is_err());
    }

    #[tokio::test]
    async fn test_full_pipeline_returns_final_document() {
        // Topic "Free Will in Augustine", no documents; stubbed research,
        // draft, and write stages in order.
        let provider = Arc::new(StubProvider::with_responses(vec![
            Ok("Augustine argued...".into()),
            Ok("I. Intro...".into()),
            Ok("Augustine's theology...#".into()),
        ]));
        let search = Arc::new(StubSearchClient::returning("web snippet"));
        let manager = manager(provider.clone(), search, None);

        let result = manager
            .run("Free Will in Augustine: discuss grace and choice", &[])
            .await
            .unwrap();
        assert_eq!(result, "Augustine's theology...#");
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_research_gate_failure_short_circuits_later_stages() {
        let provider = Arc::new(StubProvider::with_responses(vec![Ok(
            "Error: search failed".into(),
        )]));
        let search = Arc::new(StubSearchClient::returning("web snippet"));
        let manager = manager(provider.clone(), search, None);

        let err = manager
            .run("Free Will in Augustine: discuss", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Research phase failed"));
        // Research was the only completion requested; drafting and writing
        // never ran.
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_drafting_gate_failure_skips_writing() {
        let provider = Arc::new(StubProvider::with_responses(vec![
            Ok("Augustine argued...".into()),
            Ok("".into()),
        ]));
        let search = Arc::new(StubSearchClient::returning("web snippet"));
        let manager = manager(provider.clone(), search, None);

        let err = manager
            .run("Free Will in Augustine: discuss", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Drafting phase failed"));
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_supplementary_context_reaches_drafting_and_writing() {
        let provider = Arc::new(StubProvider::with_responses(vec![
            Ok("Augustine argued...".into()),
            Ok("I. Intro...".into()),
            Ok("Final draft.".into()),
        ]));
        let search = Arc::new(StubSearchClient::returning("web snippet"));
        let manager = manager(
            provider,
            search,
            Some("Address both parts of the prompt.".into()),
        );

        let result = manager
            .run("Free Will in Augustine: discuss", &[])
            .await
            .unwrap();
        assert_eq!(result, "Final draft.");
    }

    #[tokio::test]
    async fn test_search_failure_is_descriptive() {
        let provider = Arc::new(StubProvider::with_responses(vec![]));
        let search = Arc::new(StubSearchClient::failing("quota exhausted"));
        let manager = manager(provider.clone(), search, None);

        let err = manager
            .run("Free Will in Augustine: discuss", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("quota exhausted"));
        assert_eq!(provider.calls(), 0);
    }
}
