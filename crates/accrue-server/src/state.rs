//! Process-scoped server state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Application state shared by every handler.
#[derive(Debug)]
pub struct AppState {
    requests_total: AtomicU64,
    started_at: Instant,
}

impl AppState {
    /// Creates fresh state with a zero counter, starting the uptime clock now.
    pub fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            started_at: Instant::now(),
        }
    }

    /// Counts one request.
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Requests seen since start, including the current one.
    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Whole seconds since start.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
