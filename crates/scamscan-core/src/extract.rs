//! Plain-text extraction from uploaded documents.
//!
//! Dispatch is by filename suffix only (`.pdf`, `.txt`), matched
//! case-sensitively. The content itself is never sniffed.

use tracing::{debug, warn};

use crate::error::ExtractionError;

/// Supported upload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
}

impl FileKind {
    /// Detect the kind from a filename suffix.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if filename.ends_with(".txt") {
            Some(Self::Text)
        } else {
            None
        }
    }
}

/// A file received from a client, alive only until its text is extracted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub raw_bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, raw_bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            raw_bytes,
        }
    }

    pub fn extract(&self) -> Result<String, ExtractionError> {
        extract(&self.filename, &self.raw_bytes)
    }
}

/// Extract plain text from an uploaded file.
///
/// Fails with `EmptyContent` when nothing but whitespace comes out.
pub fn extract(filename: &str, raw_bytes: &[u8]) -> Result<String, ExtractionError> {
    let kind = FileKind::from_filename(filename)
        .ok_or_else(|| ExtractionError::UnsupportedFileType(filename.to_string()))?;

    let text = match kind {
        FileKind::Pdf => extract_pdf(raw_bytes)?,
        FileKind::Text => std::str::from_utf8(raw_bytes)?.to_string(),
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyContent);
    }

    debug!(filename, ?kind, chars = text.len(), "Extracted text");
    Ok(text)
}

/// Run [`extract`] on the blocking pool.
///
/// PDF parsing is CPU-bound and `pdf-extract` can panic on hostile input; a
/// panic surfaces as `ParseError` instead of taking the caller down.
pub async fn extract_blocking(document: UploadedDocument) -> Result<String, ExtractionError> {
    contain(move || document.extract()).await
}

async fn contain<F>(job: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    match tokio::task::spawn_blocking(job).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Extraction task failed");
            Err(ExtractionError::ParseError(format!("extraction aborted: {}", e)))
        }
    }
}

/// Join the text of every page that yields any, separated by single spaces.
fn extract_pdf(raw_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(raw_bytes)
        .map_err(|e| ExtractionError::ParseError(e.to_string()))?;

    let page_count = pages.len();
    let texts: Vec<&str> = pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect();

    debug!(page_count, pages_with_text = texts.len(), "Parsed PDF");
    Ok(texts.join(" "))
}
