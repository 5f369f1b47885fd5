//! Core value types shared across the pipeline.
//!
//! Everything here is transient: documents are read once, summarized, and
//! discarded; narratives and drafts live only for the duration of a run.

pub mod error;

pub use error::{ForgeError, Result};

use std::path::{Path, PathBuf};

/// Document formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Txt,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    /// Infer format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("txt") => Self::Txt,
            Some("docx") => Self::Docx,
            _ => Self::Unsupported,
        }
    }
}

/// A caller-supplied document: path plus inferred format.
#[derive(Debug, Clone)]
pub struct DocumentRef {
    pub path: PathBuf,
    pub format: DocumentFormat,
}

impl DocumentRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }
}

/// Extract the paper topic from a detailed prompt.
///
/// The topic is the text before the first `:`. A prompt with no colon is
/// taken as the topic itself; only the first colon delimits, so prompts
/// whose body contains further colons are unaffected.
pub fn extract_topic(prompt: &str) -> String {
    prompt
        .split(':')
        .next()
        .unwrap_or(prompt)
        .trim()
        .to_string()
}
