//! Skill matching against the static vocabulary.

use crate::types::SKILLS_NOT_DETECTED;
use crate::vocabulary::SKILL_VOCABULARY;

/// Every vocabulary entry contained in the text, in vocabulary order.
///
/// Returns `["Skills not detected"]` when nothing matches.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    if found.is_empty() {
        vec![SKILLS_NOT_DETECTED.to_string()]
    } else {
        found
    }
}
