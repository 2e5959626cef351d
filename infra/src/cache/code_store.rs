//! In-memory verification code store
//!
//! Entries are kept in a sharded concurrent map keyed by normalized identity.
//! Each identity's entry is only ever inspected and modified while its shard
//! lock is held, which makes `check_and_consume` atomic per identity while
//! unrelated identities proceed in parallel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use vg_core::domain::entities::VerificationEntry;
use vg_core::domain::value_objects::{Purpose, VerificationOutcome};
use vg_core::services::clock::{Clock, SystemClock};
use vg_core::services::verification::CodeStore;
use vg_shared::identity::mask_identity;

/// Process-local [`CodeStore`] backed by a [`DashMap`]
///
/// Cloning is cheap and clones share the same entries.
#[derive(Clone)]
pub struct InMemoryCodeStore {
    entries: Arc<DashMap<String, VerificationEntry>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCodeStore {
    /// Create an empty store reading wall-clock time
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store with an explicit time source
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            clock,
        }
    }

    /// Whether an entry, expired or not, exists for `identity`
    pub fn contains(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    /// Expiry of the entry stored for `identity`
    pub fn expires_at(&self, identity: &str) -> Option<DateTime<Utc>> {
        self.entries.get(identity).map(|entry| entry.expires_at)
    }

    /// Number of stored entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for InMemoryCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn put(
        &self,
        identity: &str,
        code: &str,
        purpose: Purpose,
        ttl: Duration,
    ) -> Result<(), String> {
        let entry = VerificationEntry::new(identity, code, purpose, self.clock.now(), ttl);
        let expires_at = entry.expires_at;
        let replaced = self.entries.insert(identity.to_string(), entry).is_some();

        debug!(
            identity = %mask_identity(identity),
            purpose = %purpose,
            expires_at = %expires_at,
            replaced,
            "Stored verification code"
        );
        Ok(())
    }

    async fn check_and_consume(
        &self,
        identity: &str,
        submitted: &str,
    ) -> Result<VerificationOutcome, String> {
        let now = self.clock.now();

        // The entry guard holds the shard write lock until the match ends
        let outcome = match self.entries.entry(identity.to_string()) {
            Entry::Vacant(_) => VerificationOutcome::NotFound,
            Entry::Occupied(occupied) => {
                if occupied.get().is_expired_at(now) {
                    occupied.remove();
                    VerificationOutcome::Expired
                } else if occupied.get().matches(submitted) {
                    occupied.remove();
                    VerificationOutcome::Valid
                } else {
                    VerificationOutcome::Mismatch
                }
            }
        };

        Ok(outcome)
    }

    async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, String> {
        // Collect first: removing while iterating would deadlock on the shard
        let candidates: Vec<String> = self
            .entries
            .iter()
            .filter(|item| item.value().is_sweepable_at(now))
            .map(|item| item.key().clone())
            .collect();

        // Re-check under the lock so an entry reissued since the scan survives
        let removed = candidates
            .iter()
            .filter(|identity| {
                self.entries
                    .remove_if(identity.as_str(), |_, entry| entry.is_sweepable_at(now))
                    .is_some()
            })
            .count();

        debug!(
            candidates = candidates.len(),
            removed,
            "Swept expired verification codes"
        );
        Ok(removed)
    }

    async fn len(&self) -> Result<usize, String> {
        Ok(self.entries.len())
    }
}
