//! Research Coordinator
//!
//! Merges document evidence and web-search findings into one research
//! narrative. Documents are ingested first and labelled primary evidence;
//! web findings supplement them. One provider call produces the narrative.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::ai::prompt;
use crate::ai::provider::SharedProvider;
use crate::ingest::DocumentIngester;
use crate::search::SharedSearchClient;
use crate::types::Result;

pub struct ResearchCoordinator {
    ingester: DocumentIngester,
    search: SharedSearchClient,
    provider: SharedProvider,
}

impl ResearchCoordinator {
    pub fn new(
        ingester: DocumentIngester,
        search: SharedSearchClient,
        provider: SharedProvider,
    ) -> Self {
        Self {
            ingester,
            search,
            provider,
        }
    }

    /// Execute a research query, incorporating document analysis and web
    /// search. Ingestion failures fail the whole call rather than silently
    /// dropping document context.
    pub async fn run(&self, query: &str, document_paths: &[PathBuf]) -> Result<String> {
        let document_context = if document_paths.is_empty() {
            String::new()
        } else {
            let context = self.ingester.ingest_all(document_paths).await?;
            info!("Document analysis results:\n{}", context);
            context
        };

        let web_findings = self.search.search(query).await?;
        debug!("Web findings: {} chars", web_findings.len());

        let research_prompt = prompt::research(query, &document_context, &web_findings);
        self.provider.complete(&research_prompt).await
    }
}
