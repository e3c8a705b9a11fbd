//! Name extraction from capitalized-word runs.

use crate::types::NAME_NOT_FOUND;
use crate::vocabulary::NAME_EXCLUSIONS;
use once_cell::sync::Lazy;
use regex::Regex;

/// Two to four `Xxxx` tokens separated by whitespace
static NAME_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][a-z]+\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,2}").expect("valid name regex")
});

static EXCLUSIONS_LOWER: Lazy<Vec<String>> =
    Lazy::new(|| NAME_EXCLUSIONS.iter().map(|s| s.to_lowercase()).collect());

/// Best-guess personal name, or `"Name not found"`.
///
/// A three-token run ("First Middle Last") wins over any earlier two- or
/// four-token run.
pub fn extract_name(text: &str) -> String {
    let candidates: Vec<(&str, usize)> = NAME_RUN
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter_map(|candidate| token_count(candidate).map(|n| (candidate, n)))
        .collect();

    candidates
        .iter()
        .find(|(_, n)| *n == 3)
        .or_else(|| candidates.first())
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| NAME_NOT_FOUND.to_string())
}

/// Number of tokens if the candidate survives filtering
fn token_count(candidate: &str) -> Option<usize> {
    let lower = candidate.to_lowercase();
    if EXCLUSIONS_LOWER.iter().any(|skip| lower.contains(skip.as_str())) {
        return None;
    }

    let words: Vec<&str> = candidate.split_whitespace().collect();
    let alphabetic = words.iter().all(|w| w.chars().all(char::is_alphabetic));
    if (2..=4).contains(&words.len()) && alphabetic {
        Some(words.len())
    } else {
        None
    }
}
