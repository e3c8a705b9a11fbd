use anyhow::{anyhow, Result};
use resume_core::recommend::{analyze_skill_gap, domain_names};
use resume_core::{parse_resume, FileTextSource, ParseOutcome};
use serde::Serialize;
use std::path::Path;

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Parse one document and render the record or `{"error": ...}`.
///
/// A decode failure is still a successful run: the error object is the output.
pub fn run_parse(path: &Path, pretty: bool) -> Result<String> {
    log::info!("[cli] Parsing {}", path.display());
    let outcome = parse_resume(path, &FileTextSource::new());
    to_json(&outcome, pretty)
}

/// Parse a document, then compare its skills with a career domain
pub fn run_gap(path: &Path, domain: &str, pretty: bool) -> Result<String> {
    log::info!("[cli] Skill gap for {} against {}", path.display(), domain);
    let record = match parse_resume(path, &FileTextSource::new()) {
        ParseOutcome::Record(record) => record,
        ParseOutcome::Error(e) => return Err(anyhow!(e.error)),
    };

    let analysis = analyze_skill_gap(&record.skills, domain).ok_or_else(|| {
        anyhow!(
            "Unknown domain '{}'. Known domains: {}",
            domain,
            domain_names().join(", ")
        )
    })?;
    to_json(&analysis, pretty)
}

pub fn run_domains(pretty: bool) -> Result<String> {
    to_json(&domain_names(), pretty)
}
