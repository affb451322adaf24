//! Observability for forge runs
//!
//! - Structured logging (JSON lines)
//! - Search metrics
//! - Lifecycle events and scopes
//!
//! Observability is read-only: nothing here changes the search result.
//!
//! ```ignore
//! use crcforge::observability::{Logger, Event, log_event_with_fields};
//!
//! Logger::info("FORGE_BEGIN", &[("workers", "8")]);
//! log_event_with_fields(Event::CollisionFound, &[("salt", "0x1f2e3d4c")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{SearchMetrics, SearchMetricsSnapshot};
pub use scope::{ObservationScope, Timer};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_verbose() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severity() {
        assert_eq!(severity_for(Event::SearchExhausted), Severity::Fatal);
        assert_eq!(severity_for(Event::WorkerStart), Severity::Trace);
        assert_eq!(severity_for(Event::CollisionFound), Severity::Info);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::InputRead, &[("bytes", "5")]);
    }
}
