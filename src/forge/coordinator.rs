//! Search coordinator
//!
//! Drives one forge run through
//! `Init → Partitioned → Searching → {Found | Exhausted}`:
//! 1. assemble the prefix and checksums
//! 2. partition the salt window, one range per worker
//! 3. run every worker on a scoped thread and join them all
//! 4. take the collision from the result slot, or report exhaustion
//!
//! No worker outlives the call and there are no retries: one pass over the
//! full domain is exhaustive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::thread;

use crate::observability::{
    log_event_with_fields, Event, ObservationScope, SearchMetrics, SearchMetricsSnapshot,
};

use super::assembler::ForgePlan;
use super::config::ForgeConfig;
use super::errors::{ForgeError, ForgeResult};
use super::partition::{partition, SaltRange};
use super::worker::{Collision, CollisionWorker, SharedSearch, WorkerOutcome, WorkerStop};

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Init,
    Partitioned,
    Searching,
    Found,
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// Runs forge searches with a fixed configuration.
pub struct SearchCoordinator {
    config: ForgeConfig,
    state: SearchState,
    metrics: SearchMetrics,
}

impl SearchCoordinator {
    /// Create a coordinator, rejecting invalid configuration.
    pub fn new(config: ForgeConfig) -> ForgeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: SearchState::Init,
            metrics: SearchMetrics::new(),
        })
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Counters accumulated by the last run.
    pub fn metrics(&self) -> SearchMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Forge `original ‖ injection ‖ salt` with the checksum of `original`.
    pub fn run(&mut self, original: &[u8], injection: &[u8]) -> ForgeResult<Collision> {
        self.state = SearchState::Init;
        self.metrics = SearchMetrics::new();

        let workers = self.config.workers.to_string();
        let window = self.config.window.to_string();
        let scope = ObservationScope::with_fields(
            "FORGE",
            &[("window", window.as_str()), ("workers", workers.as_str())],
        );

        let plan = ForgePlan::assemble(original, injection);
        log_event_with_fields(
            Event::PlanAssembled,
            &[
                ("base_state", format!("{:#010x}", plan.base_state()).as_str()),
                ("prefix_len", plan.prefix().len().to_string().as_str()),
                ("target", format!("{:#010x}", plan.target()).as_str()),
            ],
        );

        let ranges = partition(self.config.workers, self.config.window);
        self.state = SearchState::Partitioned;
        log_event_with_fields(
            Event::SearchPartitioned,
            &[("ranges", ranges.len().to_string().as_str())],
        );

        self.state = SearchState::Searching;
        let result = self.search(&plan, &ranges);

        match &result {
            Ok(collision) => {
                self.state = SearchState::Found;
                scope.complete_with_fields(&[
                    ("metrics", self.metrics.to_json().as_str()),
                    ("salt", format!("{:#010x}", collision.salt).as_str()),
                    ("scanned", self.metrics.candidates_scanned().to_string().as_str()),
                ]);
            }
            Err(e) => {
                self.state = SearchState::Exhausted;
                scope.fail(&e.to_string());
            }
        }

        result
    }

    fn search(&self, plan: &ForgePlan, ranges: &[SaltRange]) -> ForgeResult<Collision> {
        let found = AtomicBool::new(false);
        let result = OnceLock::new();
        let shared = SharedSearch {
            plan,
            found: &found,
            result: &result,
        };

        let joined = thread::scope(|s| {
            let mut handles = Vec::with_capacity(ranges.len());
            let mut spawn_error = None;

            for (index, range) in ranges.iter().enumerate() {
                let worker = CollisionWorker::new(index, *range);
                let shared = &shared;
                let spawned = thread::Builder::new()
                    .name(format!("forge-worker-{}", index))
                    .spawn_scoped(s, move || {
                        log_event_with_fields(
                            Event::WorkerStart,
                            &[
                                ("range", worker.range().to_string().as_str()),
                                ("worker", index.to_string().as_str()),
                            ],
                        );
                        worker.run(shared)
                    });

                match spawned {
                    Ok(handle) => {
                        self.metrics.increment_workers_spawned();
                        handles.push(handle);
                    }
                    Err(e) => {
                        // Stop the workers already running before joining them.
                        found.store(true, Ordering::Release);
                        spawn_error = Some(ForgeError::Spawn {
                            worker: index,
                            reason: e.to_string(),
                        });
                        break;
                    }
                }
            }

            let joined: Vec<Result<WorkerOutcome, usize>> = handles
                .into_iter()
                .enumerate()
                .map(|(index, handle)| handle.join().map_err(|_| index))
                .collect();

            match spawn_error {
                Some(e) => Err(e),
                None => Ok(joined),
            }
        })?;

        self.settle(joined, result)
    }

    /// Fold joined worker results into the search result.
    ///
    /// A collision in the slot wins over any panic; otherwise the first
    /// panicked worker is reported, and only then exhaustion.
    fn settle(
        &self,
        joined: Vec<Result<WorkerOutcome, usize>>,
        result: OnceLock<Collision>,
    ) -> ForgeResult<Collision> {
        let mut panicked = None;
        for outcome in joined {
            match outcome {
                Ok(outcome) => self.record(&outcome),
                Err(index) => panicked = panicked.or(Some(index)),
            }
        }

        if let Some(collision) = result.into_inner() {
            return Ok(collision);
        }

        if let Some(index) = panicked {
            return Err(ForgeError::WorkerPanicked(index));
        }

        let scanned = self.metrics.candidates_scanned();
        log_event_with_fields(
            Event::SearchExhausted,
            &[("scanned", scanned.to_string().as_str())],
        );
        Err(ForgeError::Exhausted { scanned })
    }

    fn record(&self, outcome: &WorkerOutcome) {
        self.metrics.add_candidates(outcome.scanned);
        let worker = outcome.worker.to_string();
        let scanned = outcome.scanned.to_string();

        match outcome.stop {
            WorkerStop::Found(salt) => {
                self.metrics.increment_collisions_found();
                log_event_with_fields(
                    Event::CollisionFound,
                    &[
                        ("salt", format!("{:#010x}", salt).as_str()),
                        ("scanned", scanned.as_str()),
                        ("worker", worker.as_str()),
                    ],
                );
            }
            WorkerStop::Cancelled => {
                self.metrics.increment_workers_cancelled();
                log_event_with_fields(
                    Event::WorkerCancelled,
                    &[("scanned", scanned.as_str()), ("worker", worker.as_str())],
                );
            }
            WorkerStop::Exhausted => {
                self.metrics.increment_workers_exhausted();
                log_event_with_fields(
                    Event::WorkerExhausted,
                    &[("scanned", scanned.as_str()), ("worker", worker.as_str())],
                );
            }
        }
    }
}

/// Forge with the default configuration, returning the forged bytes.
pub fn forge(original: &[u8], injection: &[u8]) -> ForgeResult<Vec<u8>> {
    forge_with(original, injection, &ForgeConfig::default()).map(|c| c.bytes)
}

/// Forge with an explicit configuration.
pub fn forge_with(
    original: &[u8],
    injection: &[u8],
    config: &ForgeConfig,
) -> ForgeResult<Collision> {
    SearchCoordinator::new(config.clone())?.run(original, injection)
}
