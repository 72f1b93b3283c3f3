//! Shallow email validation.
//!
//! This only keeps obvious typos from reaching the network; the waitlist
//! service does the authoritative check.

use std::sync::OnceLock;

use regex::Regex;

use crate::ValidationError;

// Browsers count U+FEFF as `\s`; the regex crate does not.
const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if !email_regex().is_match(email) {
        return Err(ValidationError::Invalid);
    }
    Ok(())
}

/// Error message for `email`, or an empty string when it is valid.
pub fn email_error_message(email: &str) -> String {
    match validate_email(email) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// Domain part of an address, for logging without the local part.
pub fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
}
