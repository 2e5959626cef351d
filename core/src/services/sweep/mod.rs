//! Background eviction of expired verification codes
//!
//! Sweeping bounds memory growth only. Expiry is already enforced lazily by
//! `CodeStore::check_and_consume`, so a delayed or skipped sweep never
//! changes a verification outcome.

mod scheduler;

#[cfg(test)]
mod tests;

pub use scheduler::{SweepHandle, SweepResult, SweepScheduler};
