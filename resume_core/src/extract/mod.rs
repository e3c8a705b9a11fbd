//! Field Extractors
//!
//! Each extractor is a pure function over the full document text and never
//! fails: when nothing is found it returns a sentinel (or `None` for phone).

pub mod education;
pub mod email;
pub mod name;
pub mod phone;
pub mod skills;

pub use education::extract_education;
pub use email::extract_email;
pub use name::extract_name;
pub use phone::extract_phone;
pub use skills::extract_skills;
