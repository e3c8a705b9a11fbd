//! Education excerpt from keyword-bearing lines.

use crate::types::EDUCATION_NOT_FOUND;
use crate::vocabulary::EDUCATION_KEYWORDS;

/// Lines kept in the joined excerpt
const MAX_EDUCATION_LINES: usize = 3;

/// Joins each keyword line with the line after it, keeping the first three.
pub fn extract_education(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut collected: Vec<&str> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if EDUCATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            collected.push(line.trim());
            if let Some(next) = lines.get(i + 1) {
                collected.push(next.trim());
            }
        }
        if collected.len() >= MAX_EDUCATION_LINES {
            break;
        }
    }

    if collected.is_empty() {
        return EDUCATION_NOT_FOUND.to_string();
    }
    collected.truncate(MAX_EDUCATION_LINES);
    collected.join(" ")
}
