//! CRC32 collision forging
//!
//! Appends an injection and a searched 4-byte salt to a buffer so that the
//! result has the same CRC32 as the original:
//!
//! ```text
//! crc32(original ‖ injection ‖ salt) == crc32(original)
//! ```
//!
//! For a fixed prefix, CRC32 is a bijection over any 4 free trailing bytes,
//! so exactly one salt works and a full scan of the 32-bit domain always
//! finds it. The scan is split across worker threads with cooperative early
//! termination.

mod assembler;
mod config;
mod coordinator;
mod errors;
mod partition;
mod solver;
mod tables;
mod worker;

pub use assembler::{encode_salt, ForgePlan, SALT_LEN};
pub use config::{default_workers, ForgeConfig, MAX_WORKERS};
pub use coordinator::{forge, forge_with, SearchCoordinator, SearchState};
pub use errors::{ForgeError, ForgeResult};
pub use partition::{partition, SaltRange, SALT_DOMAIN};
pub use solver::solve_salt;
pub use worker::{Collision, CollisionWorker, SharedSearch, WorkerOutcome, WorkerStop};

/// Payload appended when none is configured.
pub const DEFAULT_INJECTION: &str = "He-he-he";
