//! CLI module for crcforge
//!
//! `crcforge <input-file> <output-file>` reads the input, forges a buffer
//! with the same CRC32, and writes it to the output.

mod args;
mod commands;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{run, run_command, FileConfig, ForgeReport, Settings};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_input, write_output};
