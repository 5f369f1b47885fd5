//! Summary Reducer
//!
//! Maps chunks to per-chunk summaries via the LLM provider, then reduces
//! to a single combined summary. A combined summary that still exceeds the
//! collapse threshold gets exactly one further reduction pass; if that pass
//! fails the combined text is truncated instead of failing the document.

use tracing::{debug, warn};

use crate::ai::prompt;
use crate::ai::provider::SharedProvider;
use crate::types::{ForgeError, Result};

pub struct SummaryReducer {
    provider: SharedProvider,
    collapse_threshold: usize,
}

impl SummaryReducer {
    pub fn new(provider: SharedProvider, collapse_threshold: usize) -> Self {
        Self {
            provider,
            collapse_threshold,
        }
    }

    /// Summarize a chunk sequence into one combined summary.
    ///
    /// Per-chunk failures are skipped; only a batch where every chunk fails
    /// reports `ForgeError::Summarization`. A success is never empty.
    pub async fn summarize(&self, chunks: &[String]) -> Result<String> {
        let mut summaries = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            match self.provider.complete(&prompt::chunk_summary(chunk)).await {
                Ok(summary) if !summary.trim().is_empty() => {
                    debug!("Summarized chunk {}/{}", index + 1, chunks.len());
                    summaries.push(summary.trim().to_string());
                }
                Ok(_) => {
                    warn!("Chunk {} produced an empty summary, skipping", index + 1);
                }
                Err(e) => {
                    warn!("Error summarizing chunk {}: {}", index + 1, e);
                }
            }
        }

        if summaries.is_empty() {
            return Err(ForgeError::Summarization(
                "could not generate any summaries from the document".to_string(),
            ));
        }

        let combined = summaries.join("\n\n");
        if combined.len() <= self.collapse_threshold {
            return Ok(combined);
        }

        // Combined summary still too long: one reduction pass, no recursion.
        debug!(
            "Combined summary is {} chars, collapsing (threshold {})",
            combined.len(),
            self.collapse_threshold
        );
        match self.provider.complete(&prompt::chunk_summary(&combined)).await {
            Ok(collapsed) if !collapsed.trim().is_empty() => Ok(collapsed.trim().to_string()),
            Ok(_) => {
                warn!("Reduction pass returned empty output, truncating combined summary");
                Ok(truncate_to(&combined, self.collapse_threshold))
            }
            Err(e) => {
                warn!("Error in reduction pass: {}, truncating combined summary", e);
                Ok(truncate_to(&combined, self.collapse_threshold))
            }
        }
    }
}

/// Truncate at a char boundary at or below `limit` bytes, marking the cut.
fn truncate_to(text: &str, limit: usize) -> String {
    let mut end = limit.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::StubProvider;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_joins_chunk_summaries_with_blank_line() {
        let provider = Arc::new(StubProvider::with_responses(vec![
            Ok("first summary".into()),
            Ok("second summary".into()),
        ]));
        let reducer = SummaryReducer::new(provider.clone(), 6000);

        let result = reducer
            .summarize(&["chunk one".into(), "chunk two".into()])
            .await
            .unwrap();
        assert_eq!(result, "first summary\n\nsecond summary");
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_per_chunk_failures_are_skipped() {
        let provider = Arc::new(StubProvider::with_responses(vec![
            Err("model unavailable".into()),
            Ok("surviving summary".into()),
        ]));
        let reducer = SummaryReducer::new(provider, 6000);

        let result = reducer
            .summarize(&["chunk one".into(), "chunk two".into()])
            .await
            .unwrap();
        assert_eq!(result, "surviving summary");
    }

    #[tokio::test]
    async fn test_all_failures_report_error_not_empty_string() {
        let provider = Arc::new(StubProvider::with_responses(vec![
            Err("down".into()),
            Err("down".into()),
        ]));
        let reducer = SummaryReducer::new(provider, 6000);

        let result = reducer
            .summarize(&["chunk one".into(), "chunk two".into()])
            .await;
        assert!(matches!(result, Err(ForgeError::Summarization(_))));
    }

    #[tokio::test]
    async fn test_long_combined_summary_triggers_one_collapse_pass() {
        let provider = Arc::new(StubProvider::with_responses(vec![
            Ok("a".repeat(80)),
            Ok("b".repeat(80)),
            Ok("collapsed".into()),
        ]));
        let reducer = SummaryReducer::new(provider.clone(), 100);

        let result = reducer
            .summarize(&["chunk one".into(), "chunk two".into()])
            .await
            .unwrap();
        assert_eq!(result, "collapsed");
        // Two chunk calls plus exactly one reduction call
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_failed_collapse_truncates_instead_of_failing() {
        let provider = Arc::new(StubProvider::with_responses(vec![
            Ok("a".repeat(80)),
            Ok("b".repeat(80)),
            Err("model unavailable".into()),
        ]));
        let reducer = SummaryReducer::new(provider, 100);

        let result = reducer
            .summarize(&["chunk one".into(), "chunk two".into()])
            .await
            .unwrap();
        assert!(result.ends_with("..."));
        assert_eq!(result.len(), 103);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "résumé café";
        let cut = truncate_to(text, 2);
        assert!(cut.starts_with('r'));
        assert!(cut.ends_with("..."));
    }
}
