//! Email extraction, with repair for addresses whose "@" was lost in decoding.

use crate::types::EMAIL_NOT_DETECTED;
use crate::vocabulary::EMAIL_PROVIDERS;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z0-9][a-z0-9._%+-]*@[a-z0-9.-]+\.[a-z]{2,}\b").expect("valid email regex")
});

/// `localgmail.com`: local part glued directly to a known provider
static BROKEN_EMAIL: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)\b([a-z0-9][a-z0-9._%+-]*)({})\.com\b",
        EMAIL_PROVIDERS.join("|")
    );
    Regex::new(&pattern).expect("valid broken email regex")
});

/// First plausible email address, or `"Not detected"`
pub fn extract_email(text: &str) -> String {
    let mut emails: Vec<String> = EMAIL.find_iter(text).map(|m| m.as_str().to_string()).collect();

    if emails.is_empty() {
        if let Some(repaired) = repair_broken_email(text) {
            log::debug!("[extract:email] Repaired address without '@': {}", repaired);
            emails.push(repaired);
        }
    }

    emails
        .into_iter()
        .find(|e| is_valid(e))
        .unwrap_or_else(|| EMAIL_NOT_DETECTED.to_string())
}

/// Rebuilds `local@provider.com` from the first broken match
fn repair_broken_email(text: &str) -> Option<String> {
    let caps = BROKEN_EMAIL.captures(text)?;
    let local = caps.get(1)?.as_str();
    let provider = caps.get(2)?.as_str();
    Some(format!("{}@{}.com", local, provider))
}

fn is_valid(email: &str) -> bool {
    email.len() > 5 && email.contains('@')
}
