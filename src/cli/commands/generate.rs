//! Generate Command
//!
//! Runs the full research → outline → write pipeline for one prompt and
//! prints or saves the resulting draft.

use std::path::PathBuf;

use tracing::info;

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::pipeline::PipelineManager;
use crate::types::Result;

/// Options collected from the command line.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub prompt: String,
    pub documents: Vec<PathBuf>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub context: Option<String>,
    pub output: Option<PathBuf>,
}

pub async fn run(options: GenerateOptions) -> Result<()> {
    let output = Output::new();

    let mut config = ConfigLoader::load()?;
    if let Some(provider) = options.provider {
        config.llm.provider = provider;
        // A provider switch invalidates a configured model name
        config.llm.model = None;
    }
    if let Some(model) = options.model {
        config.llm.model = Some(model);
    }
    if let Some(context) = options.context {
        config.drafting.supplementary_context = Some(context);
    }

    info!(
        "Generating paper with provider '{}' ({} supporting document(s))",
        config.llm.provider,
        options.documents.len()
    );

    let pipeline = PipelineManager::from_config(&config)?;
    let document = pipeline.run(&options.prompt, &options.documents).await?;

    match options.output {
        Some(path) => {
            std::fs::write(&path, &document)?;
            output.success(&format!("Draft written to {}", path.display()));
        }
        None => output.paper(&document),
    }

    Ok(())
}
