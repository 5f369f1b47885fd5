//! Document Text Extraction
//!
//! Format detection by extension plus one extraction path per supported
//! format. Each path fails explicitly on empty or unreadable content so
//! callers can degrade per document instead of crashing a batch.

use std::fs;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, warn};

use crate::types::{DocumentFormat, DocumentRef, ForgeError, Result};

/// Extract raw text from a document, dispatching on inferred format.
pub fn extract_text(doc: &DocumentRef) -> Result<String> {
    if !doc.path.exists() {
        return Err(ForgeError::MissingInput(doc.path.clone()));
    }

    debug!("Extracting text from {}", doc.path.display());

    match doc.format {
        DocumentFormat::Pdf => extract_pdf(&doc.path),
        DocumentFormat::Txt => extract_txt(&doc.path),
        DocumentFormat::Docx => extract_docx(&doc.path),
        DocumentFormat::Unsupported => Err(ForgeError::UnsupportedFormat {
            path: doc.path.clone(),
            extension: doc
                .path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| format!(".{e}"))
                .unwrap_or_else(|| "(none)".to_string()),
        }),
    }
}

/// Concatenate per-page text; pages that fail to decode are skipped.
fn extract_pdf(path: &Path) -> Result<String> {
    let document = lopdf::Document::load(path)
        .map_err(|e| ForgeError::extraction(path, format!("failed to open PDF: {e}")))?;

    let pages = document.get_pages();
    if pages.is_empty() {
        return Err(ForgeError::extraction(path, "PDF file appears to be empty"));
    }

    let mut text = String::new();
    for &page_number in pages.keys() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(page_text.trim_end());
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => {
                warn!(
                    "Skipping page {} of {}: {}",
                    page_number,
                    path.display(),
                    e
                );
            }
        }
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(ForgeError::extraction(
            path,
            "no text could be extracted from PDF",
        ));
    }
    Ok(text.to_string())
}

/// Read as UTF-8, retrying with Windows-1252 if the primary decode fails.
fn extract_txt(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "UTF-8 decode failed for {}, retrying as Windows-1252",
                path.display()
            );
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ForgeError::extraction(path, "text file appears to be empty"));
    }
    Ok(text.to_string())
}

/// Concatenate paragraph text from `word/document.xml`, in document order.
fn extract_docx(path: &Path) -> Result<String> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| ForgeError::extraction(path, format!("not a valid DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| ForgeError::extraction(path, "missing word/document.xml"))?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let run = t.unescape().map_err(|e| {
                    ForgeError::extraction(path, format!("invalid document XML: {e}"))
                })?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ForgeError::extraction(
                    path,
                    format!("invalid document XML: {e}"),
                ));
            }
            _ => {}
        }
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(ForgeError::extraction(path, "document contains no text"));
    }
    Ok(text.to_string())
}
