//! Document Writer
//!
//! One generation request turning outline + research narrative into full
//! scholarly prose. Response-shape normalization happens at the provider
//! boundary, so the payload here is always a plain string.

use crate::ai::prompt;
use crate::ai::provider::SharedProvider;
use crate::types::Result;

pub struct DocumentWriter {
    provider: SharedProvider,
}

impl DocumentWriter {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Generate the full draft of the paper.
    pub async fn write_document(&self, outline: &str, research_summary: &str) -> Result<String> {
        self.provider
            .complete(&prompt::paper(outline, research_summary))
            .await
    }
}
