//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Chunking constants
pub mod chunking {
    /// Maximum characters per chunk
    pub const MAX_CHUNK_CHARS: usize = 3000;

    /// Characters repeated from the previous chunk to preserve context
    /// across chunk boundaries
    pub const CHUNK_OVERLAP: usize = 300;

    /// Separators tried largest-first when choosing a split point
    pub const SEPARATORS: [&str; 3] = ["\n\n", "\n", " "];
}

/// Summary reduction constants
pub mod summary {
    /// Combined summaries longer than this trigger one reduction pass
    pub const COLLAPSE_THRESHOLD_CHARS: usize = 6000;
}

/// HTTP/Network constants
pub mod network {
    /// Default LLM request timeout (seconds)
    pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 300;

    /// Default web search request timeout (seconds)
    pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 30;
}
