//! Sweep scheduler owning the periodic sweep task

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use vg_shared::config::verification::MAX_SWEEP_INTERVAL_SECONDS;

use crate::errors::{DomainError, DomainResult};
use crate::services::clock::{Clock, SystemClock};
use crate::services::verification::CodeStore;

/// Result of a single sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of expired entries removed
    pub removed: usize,
    /// Number of entries left in the store
    pub remaining: usize,
    /// Instant the sweep compared expiries against
    pub swept_at: DateTime<Utc>,
}

/// Periodically evicts expired entries from a code store
///
/// The scheduler can sweep synchronously on demand with [`run_sweep`], or
/// own a background task started with [`start`] and stopped through the
/// returned [`SweepHandle`].
///
/// [`run_sweep`]: SweepScheduler::run_sweep
/// [`start`]: SweepScheduler::start
pub struct SweepScheduler<S: CodeStore + 'static> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl<S: CodeStore + 'static> SweepScheduler<S> {
    /// Create a scheduler reading wall-clock time
    pub fn new(store: Arc<S>, interval: Duration) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), interval)
    }

    /// Create a scheduler with an explicit time source
    ///
    /// The interval is clamped to between one second and one day.
    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>, interval: Duration) -> Self {
        let bounded = interval.clamp(
            Duration::from_secs(1),
            Duration::from_secs(MAX_SWEEP_INTERVAL_SECONDS),
        );
        if bounded != interval {
            warn!(
                requested_secs = interval.as_secs(),
                interval_secs = bounded.as_secs(),
                "Sweep interval out of range, clamped"
            );
        }

        Self {
            store,
            clock,
            interval: bounded,
        }
    }

    /// Interval between background sweeps
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run a single sweep at the current time
    pub async fn run_sweep(&self) -> DomainResult<SweepResult> {
        let now = self.clock.now();

        let removed = self
            .store
            .sweep(now)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Sweep failed: {}", e),
            })?;
        let remaining = self.store.len().await.map_err(|e| DomainError::Store {
            message: format!("Failed to count entries after sweep: {}", e),
        })?;

        if removed > 0 {
            info!(removed, remaining, event = "otp_sweep", "Evicted expired verification codes");
        } else {
            debug!(remaining, "Sweep found no expired verification codes");
        }

        Ok(SweepResult {
            removed,
            remaining,
            swept_at: now,
        })
    }

    /// Start the sweep loop as a background task
    ///
    /// The first sweep runs one interval after start. Ticks missed while the
    /// task was suspended are not replayed in a burst.
    pub fn start(self: Arc<Self>) -> SweepHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                "Verification code sweep task started"
            );

            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        info!("Verification code sweep task shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        if let Err(e) = self.run_sweep().await {
                            warn!(error = %e, "Verification code sweep failed");
                        }
                    }
                }
            }
        });

        SweepHandle { cancel, task }
    }
}

/// Handle to a running sweep task
pub struct SweepHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Token that stops the task when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Whether the task has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the task and wait for it to exit
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            error!(error = %e, "Verification code sweep task ended abnormally");
        }
    }
}
