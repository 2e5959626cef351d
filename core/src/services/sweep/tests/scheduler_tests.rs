//! Unit tests for the sweep scheduler

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::value_objects::Purpose;
use crate::errors::DomainError;
use crate::services::clock::{Clock, ManualClock};
use crate::services::sweep::SweepScheduler;
use crate::services::verification::tests::mocks::MockCodeStore;
use crate::services::verification::CodeStore;

const INTERVAL: Duration = Duration::from_secs(300);

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap(),
    ))
}

#[tokio::test]
async fn test_run_sweep_removes_only_expired_entries() {
    let clock = clock();
    let store = Arc::new(MockCodeStore::new(clock.clone()));
    let scheduler = SweepScheduler::with_clock(store.clone(), clock.clone(), INTERVAL);

    store
        .put("old@x.com", "111111", Purpose::Registration, Duration::from_secs(60))
        .await
        .unwrap();
    store
        .put("new@x.com", "222222", Purpose::Registration, Duration::from_secs(600))
        .await
        .unwrap();

    clock.advance(Duration::from_secs(120));
    assert!(store.contains("old@x.com"));

    let result = scheduler.run_sweep().await.unwrap();
    assert_eq!(result.removed, 1);
    assert_eq!(result.remaining, 1);
    assert_eq!(result.swept_at, clock.now());
    assert!(!store.contains("old@x.com"));
    assert!(store.contains("new@x.com"));

    // Idempotent
    let result = scheduler.run_sweep().await.unwrap();
    assert_eq!(result.removed, 0);
    assert_eq!(result.remaining, 1);
}

#[tokio::test]
async fn test_run_sweep_reports_store_failure() {
    let clock = clock();
    let store = Arc::new(MockCodeStore::failing(clock.clone()));
    let scheduler = SweepScheduler::with_clock(store, clock, INTERVAL);

    let result = scheduler.run_sweep().await;
    assert!(matches!(result, Err(DomainError::Store { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_on_interval() {
    let clock = clock();
    let store = Arc::new(MockCodeStore::new(clock.clone()));
    store
        .put("a@x.com", "123456", Purpose::Registration, Duration::from_secs(60))
        .await
        .unwrap();
    clock.advance(Duration::from_secs(61));

    let scheduler = Arc::new(SweepScheduler::with_clock(
        store.clone(),
        clock.clone(),
        INTERVAL,
    ));
    let handle = scheduler.start();

    tokio::time::sleep(INTERVAL - Duration::from_secs(1)).await;
    assert_eq!(store.sweeps(), 0);
    assert!(store.contains("a@x.com"));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(store.sweeps(), 1);
    assert!(!store.contains("a@x.com"));

    tokio::time::sleep(INTERVAL).await;
    assert_eq!(store.sweeps(), 2);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_the_task() {
    let clock = clock();
    let store = Arc::new(MockCodeStore::new(clock.clone()));
    let scheduler = Arc::new(SweepScheduler::with_clock(store.clone(), clock, INTERVAL));

    let handle = scheduler.start();
    let token = handle.cancellation_token();
    assert!(!token.is_cancelled());

    handle.shutdown().await;
    assert!(token.is_cancelled());

    tokio::time::sleep(INTERVAL * 3).await;
    assert_eq!(store.sweeps(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_failures_do_not_stop_the_loop() {
    let clock = clock();
    let store = Arc::new(MockCodeStore::failing(clock.clone()));
    let scheduler = Arc::new(SweepScheduler::with_clock(store.clone(), clock, INTERVAL));

    let handle = scheduler.start();
    tokio::time::sleep(INTERVAL * 2 + Duration::from_secs(1)).await;
    assert_eq!(store.sweeps(), 2);
    assert!(!handle.is_finished());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_interval_is_clamped() {
    let clock = clock();
    let store = Arc::new(MockCodeStore::new(clock.clone()));

    let zero = SweepScheduler::with_clock(store.clone(), clock.clone(), Duration::ZERO);
    assert_eq!(zero.interval(), Duration::from_secs(1));

    let scheduler = Arc::new(SweepScheduler::with_clock(
        store.clone(),
        clock,
        Duration::from_secs(u64::MAX),
    ));
    assert_eq!(scheduler.interval(), Duration::from_secs(86_400));

    // The task must survive start-up instead of overflowing its first deadline
    let handle = scheduler.start();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(!handle.is_finished());

    tokio::time::sleep(Duration::from_secs(86_400)).await;
    assert_eq!(store.sweeps(), 1);

    handle.shutdown().await;
}
