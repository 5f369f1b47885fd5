//! Outline Drafter
//!
//! One structured-generation request turning topic + research narrative
//! into a section-by-section outline. The generated text is returned
//! verbatim; structural validation happens at the pipeline gate, not here.

use crate::ai::prompt;
use crate::ai::provider::SharedProvider;
use crate::types::Result;

pub struct OutlineDrafter {
    provider: SharedProvider,
}

impl OutlineDrafter {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Generate an outline based on the topic and collected research.
    pub async fn create_outline(&self, topic: &str, research_summary: &str) -> Result<String> {
        self.provider
            .complete(&prompt::outline(topic, research_summary))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::StubProvider;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_returns_generated_outline_verbatim() {
        let provider = Arc::new(StubProvider::with_responses(vec![Ok(
            "I. Intro\nII. Background".into(),
        )]));
        let drafter = OutlineDrafter::new(provider);

        let outline = drafter
            .create_outline("Free Will", "Augustine argued...")
            .await
            .unwrap();
        assert_eq!(outline, "I. Intro\nII. Background");
    }
}
