//! Identity utilities
//!
//! An identity is the key a verification code is bound to, typically an
//! email address. Identities are normalized before they reach the code store
//! so that `A@X.com ` and `a@x.com` address the same entry.

use once_cell::sync::Lazy;
use regex::Regex;

// Pragmatic email shape check, not full RFC 5322
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$").unwrap()
});

/// Normalize an identity by trimming whitespace and lowercasing it
pub fn normalize_identity(identity: &str) -> String {
    identity.trim().to_lowercase()
}

/// Check if an identity looks like an email address
pub fn is_valid_email(identity: &str) -> bool {
    EMAIL_REGEX.is_match(&normalize_identity(identity))
}

/// Mask an identity for logging (e.g., a***e@example.com)
///
/// Non-email identities keep only their first character.
pub fn mask_identity(identity: &str) -> String {
    match identity.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match (chars.next(), chars.last()) {
                (Some(first), Some(last)) => format!("{}***{}@{}", first, last, domain),
                (Some(first), None) => format!("{}***@{}", first, domain),
                _ => format!("***@{}", domain),
            }
        }
        None => match identity.chars().next() {
            Some(first) => format!("{}***", first),
            None => "***".to_string(),
        },
    }
}
