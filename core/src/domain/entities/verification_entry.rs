//! Verification entry entity for out-of-band code verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use std::fmt;

use crate::domain::value_objects::Purpose;

/// Default length of a verification code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default lifetime of a verification code (5 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// An outstanding verification code bound to one identity
///
/// Entries are immutable once stored. Reissuing a code for the same identity
/// replaces the whole entry. The code itself is private and only reachable
/// through [`VerificationEntry::matches`], and `Debug` output redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationEntry {
    /// Normalized identity (usually an email address) this code is bound to
    pub identity: String,

    /// The numeric code, zero-padded to its configured length
    code: String,

    /// The action this code gates
    pub purpose: Purpose,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl VerificationEntry {
    /// Creates a new entry issued at `issued_at` and living for `ttl`
    ///
    /// A `ttl` too large to represent saturates to the latest representable
    /// timestamp.
    pub fn new(
        identity: impl Into<String>,
        code: impl Into<String>,
        purpose: Purpose,
        issued_at: DateTime<Utc>,
        ttl: std::time::Duration,
    ) -> Self {
        let expires_at = Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            identity: identity.into(),
            code: code.into(),
            purpose,
            issued_at,
            expires_at,
        }
    }

    /// Whether a verification attempt at `now` must be rejected as expired
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether a sweep at `now` may evict this entry
    pub fn is_sweepable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Constant-time comparison of a submitted code with the stored one
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }
}

impl fmt::Debug for VerificationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationEntry")
            .field("identity", &self.identity)
            .field("code", &"<redacted>")
            .field("purpose", &self.purpose)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
