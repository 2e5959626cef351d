//! Unit tests for the in-memory code store

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

use vg_core::domain::value_objects::{Purpose, VerificationOutcome};
use vg_core::services::clock::{Clock, ManualClock};
use vg_core::services::verification::CodeStore;

use crate::cache::InMemoryCodeStore;

const TTL: Duration = Duration::from_secs(300);

fn setup() -> (InMemoryCodeStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap(),
    ));
    (InMemoryCodeStore::with_clock(clock.clone()), clock)
}

#[tokio::test]
async fn test_unknown_identity_is_not_found() {
    let (store, _) = setup();

    let outcome = store.check_and_consume("nobody@x.com", "123456").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::NotFound);
    assert_eq!(store.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_matching_code_is_consumed_once() {
    let (store, _) = setup();
    store.put("a@x.com", "482913", Purpose::Registration, TTL).await.unwrap();

    let first = store.check_and_consume("a@x.com", "482913").await.unwrap();
    assert_eq!(first, VerificationOutcome::Valid);
    assert!(!store.contains("a@x.com"));

    let second = store.check_and_consume("a@x.com", "482913").await.unwrap();
    assert_eq!(second, VerificationOutcome::NotFound);
}

#[tokio::test]
async fn test_mismatch_keeps_the_entry() {
    let (store, _) = setup();
    store.put("a@x.com", "482913", Purpose::Registration, TTL).await.unwrap();

    for wrong in ["000000", "48291", "4829130", ""] {
        let outcome = store.check_and_consume("a@x.com", wrong).await.unwrap();
        assert_eq!(outcome, VerificationOutcome::Mismatch);
    }
    assert!(store.contains("a@x.com"));

    let outcome = store.check_and_consume("a@x.com", "482913").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Valid);
}

#[tokio::test]
async fn test_expired_entry_is_evicted_on_check() {
    let (store, clock) = setup();
    store.put("a@x.com", "482913", Purpose::Registration, TTL).await.unwrap();

    clock.advance(TTL + Duration::from_secs(1));

    // Even the right code is rejected once the entry has expired
    let outcome = store.check_and_consume("a@x.com", "482913").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Expired);
    assert!(!store.contains("a@x.com"));

    let outcome = store.check_and_consume("a@x.com", "482913").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::NotFound);
}

#[tokio::test]
async fn test_code_is_accepted_at_exact_expiry() {
    let (store, clock) = setup();
    store.put("a@x.com", "482913", Purpose::Registration, TTL).await.unwrap();

    clock.advance(TTL);
    assert_eq!(store.expires_at("a@x.com"), Some(clock.now()));

    let outcome = store.check_and_consume("a@x.com", "482913").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Valid);
}

#[tokio::test]
async fn test_put_replaces_previous_entry() {
    let (store, clock) = setup();
    store.put("a@x.com", "111111", Purpose::Registration, TTL).await.unwrap();
    let first_expiry = store.expires_at("a@x.com").unwrap();

    clock.advance(Duration::from_secs(30));
    store
        .put("a@x.com", "222222", Purpose::PrivilegedBooking, TTL)
        .await
        .unwrap();

    assert_eq!(store.entry_count(), 1);
    assert!(store.expires_at("a@x.com").unwrap() > first_expiry);

    let outcome = store.check_and_consume("a@x.com", "111111").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Mismatch);
    let outcome = store.check_and_consume("a@x.com", "222222").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Valid);
}

#[tokio::test]
async fn test_identities_are_independent() {
    let (store, _) = setup();
    store.put("a@x.com", "111111", Purpose::Registration, TTL).await.unwrap();
    store.put("b@x.com", "222222", Purpose::Registration, TTL).await.unwrap();

    let outcome = store.check_and_consume("a@x.com", "222222").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Mismatch);
    let outcome = store.check_and_consume("b@x.com", "222222").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Valid);
    assert!(store.contains("a@x.com"));
}

#[tokio::test]
async fn test_sweep_removes_only_expired_entries() {
    let (store, clock) = setup();
    store
        .put("short@x.com", "111111", Purpose::Registration, Duration::from_secs(60))
        .await
        .unwrap();
    store.put("long@x.com", "222222", Purpose::Registration, TTL).await.unwrap();

    clock.advance(Duration::from_secs(60));
    let removed = store.sweep(clock.now()).await.unwrap();
    // Expiry at or before the sweep instant is evicted
    assert_eq!(removed, 1);
    assert!(!store.contains("short@x.com"));
    assert!(store.contains("long@x.com"));

    assert_eq!(store.sweep(clock.now()).await.unwrap(), 0);
    assert_eq!(store.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_sweep_on_empty_store() {
    let (store, clock) = setup();
    assert_eq!(store.sweep(clock.now()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_sweep_keeps_entry_reissued_after_expiry() {
    let (store, clock) = setup();
    store
        .put("a@x.com", "111111", Purpose::Registration, Duration::from_secs(60))
        .await
        .unwrap();

    clock.advance(Duration::from_secs(120));
    let stale_now = clock.now();
    store.put("a@x.com", "222222", Purpose::Registration, TTL).await.unwrap();

    assert_eq!(store.sweep(stale_now).await.unwrap(), 0);
    let outcome = store.check_and_consume("a@x.com", "222222").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Valid);
}

#[tokio::test]
async fn test_clones_share_entries() {
    let (store, _) = setup();
    let clone = store.clone();

    store.put("a@x.com", "482913", Purpose::Registration, TTL).await.unwrap();
    let outcome = clone.check_and_consume("a@x.com", "482913").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Valid);
    assert!(!store.contains("a@x.com"));
}
