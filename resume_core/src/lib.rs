//! Resume Core
//!
//! Best-effort extraction of candidate fields (name, email, phone, skills,
//! education) from the text of a resume document.
//!
//! - Text Source: document decoding behind the `TextSource` trait
//! - Extractors: one pure function per field, see [`extract`]
//! - Pipeline: decode once, run every extractor, assemble a `ResumeRecord`
//! - Recommend: skill-gap analysis against known career domains

pub mod extract;
pub mod pipeline;
pub mod recommend;
pub mod text_source;
pub mod types;
pub mod vocabulary;

pub use pipeline::{parse_resume, parse_text};
pub use text_source::{DecodeError, FileTextSource, PdfTextSource, TextSource};
pub use types::{ErrorResult, ParseOutcome, ResumeRecord};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
