//! Resume Types
//!
//! The two output shapes of a parse: a populated `ResumeRecord`, or an
//! `ErrorResult` when the document could not be decoded.

use serde::{Deserialize, Serialize};

pub const NAME_NOT_FOUND: &str = "Name not found";
pub const EMAIL_NOT_DETECTED: &str = "Not detected";
pub const SKILLS_NOT_DETECTED: &str = "Skills not detected";
pub const EDUCATION_NOT_FOUND: &str = "Education not found";
pub const EXPERIENCE_PLACEHOLDER: &str = "Experience parsing not implemented";

/// Maximum number of characters of raw text carried in a record.
pub const RAW_TEXT_EXCERPT_CHARS: usize = 500;

// ============================================================
// RESUME RECORD
// ============================================================

/// Fields extracted from one resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    /// `None` serializes as `null`
    pub mobile_number: Option<String>,
    /// Never empty; vocabulary order
    pub skills: Vec<String>,
    pub education: String,
    pub total_experience: String,
    #[serde(alias = "raw_text")]
    pub raw_text_excerpt: String,
}

impl ResumeRecord {
    /// True when every extractor fell back to its sentinel
    pub fn is_empty(&self) -> bool {
        self.name == NAME_NOT_FOUND
            && self.email == EMAIL_NOT_DETECTED
            && self.mobile_number.is_none()
            && self.skills.len() == 1
            && self.skills[0] == SKILLS_NOT_DETECTED
            && self.education == EDUCATION_NOT_FOUND
    }
}

// ============================================================
// ERROR RESULT
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

// ============================================================
// PARSE OUTCOME
// ============================================================

/// Exactly one of record or error per invocation.
///
/// Untagged so the JSON is either the record object itself or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParseOutcome {
    Error(ErrorResult),
    Record(ResumeRecord),
}

impl ParseOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, ParseOutcome::Error(_))
    }

    pub fn record(&self) -> Option<&ResumeRecord> {
        match self {
            ParseOutcome::Record(record) => Some(record),
            ParseOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ParseOutcome::Error(e) => Some(&e.error),
            ParseOutcome::Record(_) => None,
        }
    }
}

impl From<ResumeRecord> for ParseOutcome {
    fn from(record: ResumeRecord) -> Self {
        ParseOutcome::Record(record)
    }
}

impl From<ErrorResult> for ParseOutcome {
    fn from(error: ErrorResult) -> Self {
        ParseOutcome::Error(error)
    }
}
