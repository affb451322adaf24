//! Search metrics
//!
//! - Counters only, monotonic within a run
//! - Workers report once when they stop, not per candidate
//! - Relaxed ordering; values are read after every worker has joined

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for one forge run
#[derive(Debug, Default)]
pub struct SearchMetrics {
    candidates_scanned: AtomicU64,
    workers_spawned: AtomicU64,
    workers_exhausted: AtomicU64,
    workers_cancelled: AtomicU64,
    collisions_found: AtomicU64,
}

impl SearchMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add candidates scanned by one worker
    pub fn add_candidates(&self, count: u64) {
        self.candidates_scanned.fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_workers_spawned(&self) {
        self.workers_spawned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_workers_exhausted(&self) {
        self.workers_exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_workers_cancelled(&self) {
        self.workers_cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_collisions_found(&self) {
        self.collisions_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Total candidates scanned so far
    pub fn candidates_scanned(&self) -> u64 {
        self.candidates_scanned.load(Ordering::Relaxed)
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> SearchMetricsSnapshot {
        SearchMetricsSnapshot {
            candidates_scanned: self.candidates_scanned.load(Ordering::Relaxed),
            workers_spawned: self.workers_spawned.load(Ordering::Relaxed),
            workers_exhausted: self.workers_exhausted.load(Ordering::Relaxed),
            workers_cancelled: self.workers_cancelled.load(Ordering::Relaxed),
            collisions_found: self.collisions_found.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time snapshot of the search counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchMetricsSnapshot {
    pub candidates_scanned: u64,
    pub workers_spawned: u64,
    pub workers_exhausted: u64,
    pub workers_cancelled: u64,
    pub collisions_found: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = SearchMetrics::new().snapshot();
        assert_eq!(snapshot.candidates_scanned, 0);
        assert_eq!(snapshot.workers_spawned, 0);
        assert_eq!(snapshot.collisions_found, 0);
    }

    #[test]
    fn test_increment_counters() {
        let metrics = SearchMetrics::new();

        metrics.add_candidates(100);
        metrics.add_candidates(50);
        metrics.increment_workers_spawned();
        metrics.increment_workers_spawned();
        metrics.increment_workers_exhausted();
        metrics.increment_workers_cancelled();
        metrics.increment_collisions_found();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.candidates_scanned, 150);
        assert_eq!(snapshot.workers_spawned, 2);
        assert_eq!(snapshot.workers_exhausted, 1);
        assert_eq!(snapshot.workers_cancelled, 1);
        assert_eq!(snapshot.collisions_found, 1);
    }

    #[test]
    fn test_to_json() {
        let metrics = SearchMetrics::new();
        metrics.add_candidates(1234);
        metrics.increment_collisions_found();

        let parsed: serde_json::Value = serde_json::from_str(&metrics.to_json()).unwrap();
        assert_eq!(parsed["candidates_scanned"], 1234);
        assert_eq!(parsed["collisions_found"], 1);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let metrics = Arc::new(SearchMetrics::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let m = Arc::clone(&metrics);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    m.add_candidates(1);
                }
                m.increment_workers_exhausted();
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.candidates_scanned, 1000);
        assert_eq!(snapshot.workers_exhausted, 10);
    }
}
