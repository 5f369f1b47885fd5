//! Document Ingestion
//!
//! Extraction → chunking → summary reduction for caller-supplied documents.
//! A batch degrades per document: missing files, unsupported formats, and
//! unsummarizable documents become warning lines so the remaining documents
//! still contribute evidence.

pub mod chunker;
pub mod extract;
pub mod summarize;

pub use chunker::TextChunker;
pub use summarize::SummaryReducer;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::ai::provider::SharedProvider;
use crate::config::ChunkingConfig;
use crate::types::{DocumentRef, Result};

pub struct DocumentIngester {
    chunker: TextChunker,
    reducer: SummaryReducer,
}

impl DocumentIngester {
    pub fn new(config: &ChunkingConfig, provider: SharedProvider) -> Self {
        Self {
            chunker: TextChunker::from_config(config),
            reducer: SummaryReducer::new(provider, config.collapse_threshold),
        }
    }

    /// Extract, chunk, and summarize a single document.
    pub async fn summarize_document(&self, doc: &DocumentRef) -> Result<String> {
        let text = extract::extract_text(doc)?;
        let chunks = self.chunker.split(&text);
        debug!(
            "Created {} chunks from {}",
            chunks.len(),
            doc.path.display()
        );
        self.reducer.summarize(&chunks).await
    }

    /// Process a batch of documents into one combined evidence block.
    ///
    /// Documents are processed one at a time, in input order. Document-local
    /// failures become `Warning:` lines; anything else (IO surprises,
    /// systemic provider errors) fails the whole batch so the caller never
    /// silently loses context.
    pub async fn ingest_all(&self, paths: &[PathBuf]) -> Result<String> {
        let mut blocks = Vec::new();

        for path in paths {
            let doc = DocumentRef::new(path);
            match self.summarize_document(&doc).await {
                Ok(summary) => {
                    blocks.push(format!("Summary of {}:\n{}", path.display(), summary));
                }
                Err(e) if e.is_document_local() => {
                    warn!("Skipping {}: {}", path.display(), e);
                    blocks.push(format!("Warning: {}", e));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(blocks.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::StubProvider;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn ingester(provider: Arc<StubProvider>) -> DocumentIngester {
        DocumentIngester::new(&ChunkingConfig::default(), provider)
    }

    #[tokio::test]
    async fn test_missing_document_yields_warning_not_error() {
        let provider = Arc::new(StubProvider::with_responses(vec![]));
        let ingester = ingester(provider.clone());

        let result = ingester
            .ingest_all(&[PathBuf::from("docs/ghost.pdf")])
            .await
            .unwrap();
        assert!(result.starts_with("Warning:"));
        assert!(result.contains("docs/ghost.pdf"));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_batch_partially_succeeds() {
        // One missing document plus one valid two-paragraph text file:
        // the result carries one warning line and one summary block,
        // joined by a blank line.
        let dir = TempDir::new().unwrap();
        let valid = dir.path().join("augustine.txt");
        fs::write(
            &valid,
            "Page one of the treatise on free will.\n\nPage two of the treatise.",
        )
        .unwrap();

        let provider = Arc::new(StubProvider::with_responses(vec![Ok(
            "Augustine argued...".into(),
        )]));
        let ingester = ingester(provider);

        let missing = PathBuf::from("docs/ghost.pdf");
        let result = ingester
            .ingest_all(&[missing.clone(), valid.clone()])
            .await
            .unwrap();

        let blocks: Vec<&str> = result.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Warning:"));
        assert!(blocks[0].contains("ghost.pdf"));
        assert!(blocks[1].starts_with(&format!("Summary of {}:", valid.display())));
        assert!(blocks[1].contains("Augustine argued..."));
    }

    #[tokio::test]
    async fn test_unsummarizable_document_degrades_to_warning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "Some philosophical text.").unwrap();

        let provider = Arc::new(StubProvider::with_responses(vec![Err(
            "model down".into(),
        )]));
        let ingester = ingester(provider);

        let result = ingester.ingest_all(&[path]).await.unwrap();
        assert!(result.starts_with("Warning:"));
        assert!(result.contains("Summarization failed"));
    }

    #[tokio::test]
    async fn test_empty_batch_yields_empty_block() {
        let provider = Arc::new(StubProvider::with_responses(vec![]));
        let ingester = ingester(provider);
        assert_eq!(ingester.ingest_all(&[]).await.unwrap(), "");
    }
}
