//! Traits for code store and delivery integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::value_objects::{Purpose, VerificationOutcome};

/// Concurrency-safe registry of outstanding verification codes
///
/// Implementations own the consume-once invariant: for a given live entry,
/// exactly one concurrent `check_and_consume` call may observe `Valid`.
/// Errors are reserved for backend failures (a networked store losing its
/// connection); the in-memory store never fails.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Replace any entry for `identity` with a fresh one expiring after `ttl`
    async fn put(
        &self,
        identity: &str,
        code: &str,
        purpose: Purpose,
        ttl: Duration,
    ) -> Result<(), String>;

    /// Atomically check a submitted code and consume the entry on a match
    ///
    /// Expired entries are evicted as a side effect. Mismatches keep the entry.
    async fn check_and_consume(
        &self,
        identity: &str,
        submitted: &str,
    ) -> Result<VerificationOutcome, String>;

    /// Remove every entry whose expiry is at or before `now`, returning the count
    async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, String>;

    /// Number of stored entries, including expired ones not yet swept
    async fn len(&self) -> Result<usize, String>;
}

/// Out-of-band delivery of a code to its identity (email, SMS, push)
///
/// Failure must be reported, never silently dropped.
#[async_trait]
pub trait CodeDeliveryTrait: Send + Sync {
    async fn deliver(&self, identity: &str, code: &str, purpose: Purpose) -> Result<(), String>;
}
