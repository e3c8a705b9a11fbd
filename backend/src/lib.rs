//! Resume Backend
//!
//! HTTP front for the resume parser:
//! - Upload a document and get the extracted fields back
//! - Every upload and its parse outcome is kept in SQLite
//! - Skill-gap checks against known career domains

pub mod api;
pub mod config;
pub mod store;

pub use api::*;
pub use config::ServerConfig;
