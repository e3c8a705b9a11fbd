//! Text Source
//!
//! Turns a document on disk into a single string. Failure is reported through
//! `DecodeError` rather than by inspecting the returned text, so resume content
//! that happens to mention "Error" is still parsed.

use std::fs;
use std::panic;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error extracting text: {0}")]
    Pdf(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

/// Anything that can produce the raw text of a document
pub trait TextSource {
    fn extract(&self, path: &Path) -> Result<String, DecodeError>;
}

// ============================================================
// PDF
// ============================================================

/// Decodes PDF files with `pdf-extract`, concatenating every page
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl PdfTextSource {
    pub fn extract_from_bytes(bytes: &[u8]) -> Result<String, DecodeError> {
        // pdf-extract panics on some malformed streams
        let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
        match result {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(DecodeError::Pdf(e.to_string())),
            Err(_) => Err(DecodeError::Pdf("decoder panicked on malformed input".to_string())),
        }
    }
}

impl TextSource for PdfTextSource {
    fn extract(&self, path: &Path) -> Result<String, DecodeError> {
        ensure_exists(path)?;
        let bytes = fs::read(path)?;
        log::debug!("[text_source] Decoding PDF {} ({} bytes)", path.display(), bytes.len());
        Self::extract_from_bytes(&bytes)
    }
}

// ============================================================
// FILE (extension dispatch)
// ============================================================

/// Picks a decoder from the file extension.
///
/// `.pdf` is decoded as PDF; `.txt`, `.text` and `.md` are read as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTextSource {
    pdf: PdfTextSource,
}

impl FileTextSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSource for FileTextSource {
    fn extract(&self, path: &Path) -> Result<String, DecodeError> {
        ensure_exists(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => self.pdf.extract(path),
            "txt" | "text" | "md" => Ok(fs::read_to_string(path)?),
            "" => Err(DecodeError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(DecodeError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), DecodeError> {
    if !path.exists() {
        log::warn!("[text_source] File not found: {}", path.display());
        return Err(DecodeError::NotFound(path.display().to_string()));
    }
    Ok(())
}
