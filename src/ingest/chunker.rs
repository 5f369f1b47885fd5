//! Text Chunker
//!
//! Splits long text into overlapping, bounded-length segments for
//! summarization. Split points prefer the largest available separator
//! (paragraph break, then line break, then space) so chunks do not break
//! mid-word unless nothing larger fits within the size bound.
//!
//! Every chunk is an exact substring of the input, and each chunk after
//! the first begins `overlap` characters before the previous chunk ends.
//! Concatenating the first chunk with each subsequent chunk minus its
//! leading overlap therefore reconstructs the input exactly.
//!
//! Limits are measured in bytes and adjusted to char boundaries, so
//! multi-byte text may produce slightly smaller chunks than configured.

use crate::config::ChunkingConfig;
use crate::constants::chunking::SEPARATORS;

/// Separator-preferring overlap splitter.
#[derive(Debug, Clone)]
pub struct TextChunker {
    max_chars: usize,
    overlap: usize,
}

impl TextChunker {
    pub fn new(max_chars: usize, overlap: usize) -> Self {
        Self { max_chars, overlap }
    }

    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.max_chars, config.overlap)
    }

    /// Split text into an ordered sequence of overlapping chunks.
    ///
    /// Empty input yields an empty sequence. An atomic separator-free unit
    /// longer than `max_chars` is emitted whole as one oversized chunk
    /// rather than dropped or broken mid-word.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        if text.len() <= self.max_chars {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            if text.len() - start <= self.max_chars {
                chunks.push(text[start..].to_string());
                break;
            }

            let window_end = floor_char_boundary(text, start + self.max_chars);
            let end = self.find_split(text, start, window_end);
            chunks.push(text[start..end].to_string());

            if end >= text.len() {
                break;
            }

            // Back up by the overlap to repeat trailing context, but always
            // move forward relative to the previous chunk start.
            let mut next = ceil_char_boundary(text, end.saturating_sub(self.overlap));
            if next <= start {
                next = end;
            }
            start = next;
        }

        chunks
    }

    /// Choose a split point at or before `window_end`.
    ///
    /// Separators are tried largest-first; a candidate is accepted only if
    /// it leaves the current chunk longer than the overlap, which keeps the
    /// next start strictly ahead of the current one. When no separator
    /// qualifies the atomic unit is extended to the next separator or the
    /// end of text.
    fn find_split(&self, text: &str, start: usize, window_end: usize) -> usize {
        for sep in SEPARATORS {
            if let Some(pos) = text[start..window_end].rfind(sep) {
                let cut = start + pos + sep.len();
                if cut > start + self.overlap {
                    return cut;
                }
            }
        }
        extend_to_separator(text, window_end)
    }
}

/// Earliest separator at or after `from`; the cut lands just past it.
fn extend_to_separator(text: &str, from: usize) -> usize {
    let tail = &text[from..];
    let mut best: Option<(usize, usize)> = None;
    for sep in SEPARATORS {
        if let Some(pos) = tail.find(sep) {
            match best {
                Some((bp, bl)) if pos > bp || (pos == bp && sep.len() <= bl) => {}
                _ => best = Some((pos, sep.len())),
            }
        }
    }
    match best {
        Some((pos, len)) => from + pos + len,
        None => text.len(),
    }
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
