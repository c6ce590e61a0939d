//! Allowlist Service
//!
//! Owns the current trusted range snapshot and keeps it fresh. The snapshot
//! is replaced wholesale by a background refresh task; request handlers only
//! ever read a previously committed snapshot.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::interval;

use crate::domain::gateways::TrustedRangeSource;
use crate::domain::models::trusted_ranges::TrustedRangeSet;
use crate::shared::errors::RangeSourceError;

/// Shared handle to the current trusted range snapshot.
///
/// A single mutex guards both read and swap. It is held only for the
/// duration of the `Arc` clone or replacement, never across I/O: the
/// refresh task builds the next snapshot off to the side and then performs
/// one guarded swap, so a reader sees either the old snapshot in full or
/// the new one in full.
pub struct Allowlist {
    current: Mutex<Arc<TrustedRangeSet>>,
}

impl Allowlist {
    /// Create an allowlist holding an initial snapshot
    #[must_use]
    pub fn new(initial: TrustedRangeSet) -> Self {
        Self {
            current: Mutex::new(Arc::new(initial)),
        }
    }

    /// Return the latest committed snapshot.
    ///
    /// Never blocks behind a refresh fetch; the lock is only contended for
    /// the duration of the pointer swap.
    #[must_use]
    pub fn current(&self) -> Arc<TrustedRangeSet> {
        match self.current.lock() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically replace the current snapshot
    pub fn replace(&self, next: TrustedRangeSet) {
        let next = Arc::new(next);
        match self.current.lock() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

/// Background task keeping the allowlist fresh on a fixed interval.
///
/// Ticks are strictly serialized by the single loop task, so a slow stale
/// fetch can never be swapped in after a later successful one.
pub struct AllowlistRefresher {
    source: Arc<dyn TrustedRangeSource>,
    allowlist: Arc<Allowlist>,
    refresh_interval: Duration,
}

impl AllowlistRefresher {
    /// Fetch the initial snapshot and build the shared allowlist handle.
    ///
    /// # Errors
    ///
    /// Returns the fetch error if the upstream directory is unavailable.
    /// There is no safe default allowlist, so the caller must treat this
    /// as a fatal startup fault.
    pub async fn bootstrap(
        source: Arc<dyn TrustedRangeSource>,
        refresh_interval: Duration,
    ) -> Result<(Arc<Allowlist>, Self), RangeSourceError> {
        let cidrs = source.fetch_ranges().await?;
        let snapshot = TrustedRangeSet::from_cidrs(&cidrs);
        tracing::info!(ranges = snapshot.len(), "Initial trusted range snapshot loaded");

        let allowlist = Arc::new(Allowlist::new(snapshot));
        let refresher = Self {
            source,
            allowlist: Arc::clone(&allowlist),
            refresh_interval,
        };

        Ok((allowlist, refresher))
    }

    /// Perform one refresh tick: fetch, and swap the snapshot on success.
    ///
    /// On failure the previous snapshot is retained: an empty set would
    /// lock out all legitimate writers, so availability wins over
    /// freshness.
    pub async fn refresh_once(&self) {
        match self.source.fetch_ranges().await {
            Ok(cidrs) => {
                let snapshot = TrustedRangeSet::from_cidrs(&cidrs);
                tracing::info!(ranges = snapshot.len(), "Trusted range snapshot refreshed");
                self.allowlist.replace(snapshot);
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "Failed to refresh trusted ranges, keeping previous snapshot"
                );
            }
        }
    }

    /// Run the refresh loop for the lifetime of the process
    pub async fn run(self) {
        let mut ticker = interval(self.refresh_interval);
        // The first interval tick fires immediately; bootstrap already
        // fetched that snapshot.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.refresh_once().await;
        }
    }
}
