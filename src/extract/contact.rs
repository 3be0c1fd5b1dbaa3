//! Email and phone extraction.

use crate::model::Contacts;
use regex::Regex;
use std::sync::OnceLock;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap())
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // At least 11 digits overall, allowing interior hyphens and spaces.
    RE.get_or_init(|| Regex::new(r"\+?\d[\d\-\s]{9,}\d").unwrap())
}

/// Collect email addresses and phone numbers from the full text, in order
/// of first appearance.
///
/// When `strip_phone_whitespace` is set, interior whitespace is removed
/// from each phone match (`+1 555-123-4567` becomes `+1555-123-4567`).
pub fn extract_contacts(text: &str, strip_phone_whitespace: bool) -> Contacts {
    let emails = email_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let phones = phone_re()
        .find_iter(text)
        .map(|m| {
            if strip_phone_whitespace {
                m.as_str().split_whitespace().collect()
            } else {
                m.as_str().to_string()
            }
        })
        .collect();

    Contacts { emails, phones }
}
