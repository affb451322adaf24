//! Observable events
//!
//! Every log line the forge emits is named by one of these.

use std::fmt;

/// Observable events in a forge run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // CLI
    /// Configuration file loaded
    ConfigLoaded,
    /// Input file read
    InputRead,
    /// Forged buffer written
    OutputWritten,

    // Search lifecycle
    /// Prefix and checksums assembled
    PlanAssembled,
    /// Salt window split into worker ranges
    SearchPartitioned,
    /// A worker started scanning its range
    WorkerStart,
    /// A worker scanned its whole range without a match
    WorkerExhausted,
    /// A worker stopped because another one won
    WorkerCancelled,
    /// Winning salt located
    CollisionFound,
    /// Whole window scanned without a match (FATAL)
    SearchExhausted,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InputRead => "INPUT_READ",
            Event::OutputWritten => "OUTPUT_WRITTEN",

            Event::PlanAssembled => "PLAN_ASSEMBLED",
            Event::SearchPartitioned => "SEARCH_PARTITIONED",
            Event::WorkerStart => "WORKER_START",
            Event::WorkerExhausted => "WORKER_EXHAUSTED",
            Event::WorkerCancelled => "WORKER_CANCELLED",
            Event::CollisionFound => "COLLISION_FOUND",
            Event::SearchExhausted => "SEARCH_EXHAUSTED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::SearchExhausted)
    }

    /// Per-worker chatter is logged at TRACE
    pub fn is_verbose(&self) -> bool {
        matches!(
            self,
            Event::WorkerStart | Event::WorkerExhausted | Event::WorkerCancelled
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::InputRead,
            Event::OutputWritten,
            Event::PlanAssembled,
            Event::SearchPartitioned,
            Event::WorkerStart,
            Event::WorkerExhausted,
            Event::WorkerCancelled,
            Event::CollisionFound,
            Event::SearchExhausted,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::SearchExhausted.is_fatal());
        assert!(!Event::CollisionFound.is_fatal());
        assert!(!Event::WorkerExhausted.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::CollisionFound), "COLLISION_FOUND");
    }
}
