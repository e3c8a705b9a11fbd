//! Resume Parsing Pipeline
//!
//! Decode once, then run every field extractor over the same text. The only
//! failure is a decode error, which short-circuits into an `ErrorResult`.

use crate::extract::{extract_education, extract_email, extract_name, extract_phone, extract_skills};
use crate::text_source::TextSource;
use crate::types::{ErrorResult, ParseOutcome, ResumeRecord, EXPERIENCE_PLACEHOLDER, RAW_TEXT_EXCERPT_CHARS};
use std::path::Path;

/// Parse the document at `path` using `source` to obtain its text.
///
/// # Example
/// ```ignore
/// let outcome = parse_resume(Path::new("uploads/resume.pdf"), &FileTextSource::new());
/// println!("{}", serde_json::to_string(&outcome)?);
/// ```
pub fn parse_resume(path: &Path, source: &dyn TextSource) -> ParseOutcome {
    log::info!("[pipeline:parse_resume] Resume: {}", path.display());

    let text = match source.extract(path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("[pipeline:parse_resume] Text extraction failed: {}", e);
            return ParseOutcome::Error(ErrorResult::new(e.to_string()));
        }
    };

    log::debug!("[pipeline:parse_resume] Extracted {} characters", text.chars().count());
    let record = parse_text(&text);
    log::info!(
        "[pipeline:parse_resume] Done: name={:?} skills={}",
        record.name,
        record.skills.len()
    );
    ParseOutcome::Record(record)
}

/// Run all extractors over already-decoded text
pub fn parse_text(text: &str) -> ResumeRecord {
    ResumeRecord {
        name: extract_name(text),
        email: extract_email(text),
        mobile_number: extract_phone(text),
        skills: extract_skills(text),
        education: extract_education(text),
        total_experience: EXPERIENCE_PLACEHOLDER.to_string(),
        raw_text_excerpt: excerpt(text, RAW_TEXT_EXCERPT_CHARS),
    }
}

/// First `max_chars` characters, never splitting a code point
fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
