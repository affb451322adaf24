//! # Forge Errors

use thiserror::Error;

/// Result type for forge operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Forge errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForgeError {
    /// Every salt in the search window was tried without a match.
    ///
    /// Over the full 32-bit domain this cannot happen for a correct checksum
    /// engine and partitioner.
    #[error("Cannot forge collision: {scanned} candidates scanned without a match")]
    Exhausted { scanned: u64 },

    #[error("Search worker {0} panicked")]
    WorkerPanicked(usize),

    /// The OS refused to start a worker thread.
    #[error("Failed to start search worker {worker}: {reason}")]
    Spawn { worker: usize, reason: String },

    #[error("Invalid forge configuration: {0}")]
    InvalidConfig(String),
}

impl ForgeError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            ForgeError::Exhausted { .. } => "CRCFORGE_SEARCH_EXHAUSTED",
            ForgeError::WorkerPanicked(_) => "CRCFORGE_WORKER_PANICKED",
            ForgeError::Spawn { .. } => "CRCFORGE_WORKER_SPAWN",
            ForgeError::InvalidConfig(_) => "CRCFORGE_INVALID_CONFIG",
        }
    }
}
