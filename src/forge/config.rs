//! Forge configuration
//!
//! - Worker count defaults to the number of available parallel execution units
//! - The search window defaults to the full 32-bit salt domain

use std::thread;

use super::errors::{ForgeError, ForgeResult};
use super::partition::{SaltRange, SALT_DOMAIN};

/// Upper bound on the worker count. Each worker is an OS thread.
pub const MAX_WORKERS: usize = 1024;

/// Configuration for a single forge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// Number of search workers (one thread per range).
    pub workers: usize,
    /// Salts to search. Anything narrower than the full domain may miss the
    /// unique solution.
    pub window: SaltRange,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            window: SaltRange::full(),
        }
    }
}

impl ForgeConfig {
    /// Default config with an explicit worker count.
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }

    /// Restrict the search to `window`.
    pub fn window(mut self, window: SaltRange) -> Self {
        self.window = window;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> ForgeResult<()> {
        if self.workers == 0 {
            return Err(ForgeError::InvalidConfig("workers must be > 0".into()));
        }

        if self.workers > MAX_WORKERS {
            return Err(ForgeError::InvalidConfig(format!(
                "workers must be <= {}, got {}",
                MAX_WORKERS, self.workers
            )));
        }

        if self.window.start > self.window.end {
            return Err(ForgeError::InvalidConfig(format!(
                "window start {} is past its end {}",
                self.window.start, self.window.end
            )));
        }

        if self.window.end > SALT_DOMAIN {
            return Err(ForgeError::InvalidConfig(format!(
                "window end {} exceeds the 32-bit salt domain",
                self.window.end
            )));
        }

        Ok(())
    }
}

/// Number of available parallel execution units, or 1 if unknown.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
