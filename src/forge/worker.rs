//! Collision worker
//!
//! Scans one salt range in ascending order, continuing the prefix checksum
//! over each 4-byte candidate. Cancellation is cooperative: the shared
//! `found` flag is polled once per candidate.
//!
//! The win is claimed with a compare-and-swap on `found`; only the worker
//! that flips it stores into the result slot, so the result is written at
//! most once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use super::assembler::ForgePlan;
use super::partition::SaltRange;

/// A forged buffer and the salt that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Winning salt, appended little-endian.
    pub salt: u32,
    /// `original ‖ injection ‖ salt`
    pub bytes: Vec<u8>,
    /// Index of the worker that found it.
    pub worker: usize,
}

/// How a worker stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStop {
    /// This worker claimed the win with this salt.
    Found(u32),
    /// Another worker won first.
    Cancelled,
    /// The whole range was scanned without a match.
    Exhausted,
}

/// What a worker reports back to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerOutcome {
    pub worker: usize,
    pub range: SaltRange,
    pub stop: WorkerStop,
    /// Candidates whose checksum was computed.
    pub scanned: u64,
}

/// State shared by every worker of one search.
pub struct SharedSearch<'a> {
    pub plan: &'a ForgePlan,
    pub found: &'a AtomicBool,
    pub result: &'a OnceLock<Collision>,
}

/// One worker bound to one range.
pub struct CollisionWorker {
    index: usize,
    range: SaltRange,
}

impl CollisionWorker {
    pub fn new(index: usize, range: SaltRange) -> Self {
        Self { index, range }
    }

    pub fn range(&self) -> SaltRange {
        self.range
    }

    /// Scan the range until a match, cancellation, or exhaustion.
    pub fn run(&self, shared: &SharedSearch<'_>) -> WorkerOutcome {
        let target = shared.plan.target();
        let mut scanned = 0u64;

        for salt in self.range.salts() {
            if shared.found.load(Ordering::Relaxed) {
                return self.outcome(WorkerStop::Cancelled, scanned);
            }

            scanned += 1;
            if shared.plan.trial(salt) != target {
                continue;
            }

            if shared
                .found
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                return self.outcome(WorkerStop::Cancelled, scanned);
            }

            // Only the CAS winner reaches this point, so the slot is empty.
            let _ = shared.result.set(Collision {
                salt,
                bytes: shared.plan.finish(salt),
                worker: self.index,
            });
            return self.outcome(WorkerStop::Found(salt), scanned);
        }

        self.outcome(WorkerStop::Exhausted, scanned)
    }

    fn outcome(&self, stop: WorkerStop, scanned: u64) -> WorkerOutcome {
        WorkerOutcome {
            worker: self.index,
            range: self.range,
            stop,
            scanned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::compute_checksum;
    use crate::forge::solver::solve_salt;

    fn expected_salt(plan: &ForgePlan) -> u32 {
        solve_salt(plan.base_state(), plan.target())
    }

    fn around(salt: u32, radius: u64) -> SaltRange {
        let salt = u64::from(salt);
        SaltRange::new(salt.saturating_sub(radius), (salt + radius).min(1 << 32))
    }

    #[test]
    fn test_worker_finds_salt_in_range() {
        let plan = ForgePlan::assemble(b"hello", b"He-he-he");
        let salt = expected_salt(&plan);
        let found = AtomicBool::new(false);
        let result = OnceLock::new();
        let shared = SharedSearch {
            plan: &plan,
            found: &found,
            result: &result,
        };

        let range = around(salt, 5000);
        let outcome = CollisionWorker::new(2, range).run(&shared);

        assert_eq!(outcome.stop, WorkerStop::Found(salt));
        assert_eq!(outcome.scanned, u64::from(salt) - range.start + 1);
        assert!(found.load(Ordering::SeqCst));

        let collision = result.get().unwrap();
        assert_eq!(collision.salt, salt);
        assert_eq!(collision.worker, 2);
        assert_eq!(compute_checksum(&collision.bytes), compute_checksum(b"hello"));
    }

    #[test]
    fn test_worker_exhausts_range_without_match() {
        let plan = ForgePlan::assemble(b"hello", b"He-he-he");
        let salt = expected_salt(&plan);
        let found = AtomicBool::new(false);
        let result = OnceLock::new();
        let shared = SharedSearch {
            plan: &plan,
            found: &found,
            result: &result,
        };

        // 1000 salts that cannot contain the unique answer
        let start = u64::from(salt.wrapping_add(1));
        let range = SaltRange::new(start, (start + 1000).min(1 << 32));
        let outcome = CollisionWorker::new(0, range).run(&shared);

        assert_eq!(outcome.stop, WorkerStop::Exhausted);
        assert_eq!(outcome.scanned, range.len());
        assert!(!found.load(Ordering::SeqCst));
        assert!(result.get().is_none());
    }

    #[test]
    fn test_worker_stops_when_already_found() {
        let plan = ForgePlan::assemble(b"data", b"x");
        let found = AtomicBool::new(true);
        let result = OnceLock::new();
        let shared = SharedSearch {
            plan: &plan,
            found: &found,
            result: &result,
        };

        let outcome = CollisionWorker::new(1, SaltRange::full()).run(&shared);

        assert_eq!(outcome.stop, WorkerStop::Cancelled);
        assert_eq!(outcome.scanned, 0);
        assert!(result.get().is_none());
    }

    #[test]
    fn test_empty_range_is_exhausted_immediately() {
        let plan = ForgePlan::assemble(b"data", b"x");
        let found = AtomicBool::new(false);
        let result = OnceLock::new();
        let shared = SharedSearch {
            plan: &plan,
            found: &found,
            result: &result,
        };

        let outcome = CollisionWorker::new(0, SaltRange::new(9, 9)).run(&shared);
        assert_eq!(outcome.stop, WorkerStop::Exhausted);
        assert_eq!(outcome.scanned, 0);
    }
}
