//! Mobile number extraction (10 digits, leading 6-9).

use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[6-9][0-9]{9}").expect("valid mobile regex"));

pub fn extract_phone(text: &str) -> Option<String> {
    MOBILE.find(text).map(|m| m.as_str().to_string())
}
