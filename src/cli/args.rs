//! CLI argument definitions using clap
//!
//! crcforge <input-file> <output-file> [--workers N] [--payload STR] [--config PATH] [--quiet]

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use super::errors::{CliError, CliResult};

/// crcforge - Append a payload to a file without changing its CRC32
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "crcforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File whose CRC32 must be preserved
    pub input: PathBuf,

    /// Where to write the forged file
    pub output: PathBuf,

    /// Number of search threads (default: available parallelism)
    #[arg(long, short)]
    pub workers: Option<usize>,

    /// Payload appended before the salt (default: "He-he-he")
    #[arg(long, short)]
    pub payload: Option<String>,

    /// Optional JSON configuration file; flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Parse arguments, turning every clap failure into a usage error.
    ///
    /// `--help` and `--version` are usage errors too: the text goes to
    /// stderr and the process exits with status 1.
    pub fn parse_from_args<I, T>(args: I) -> CliResult<Cli>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args)
            .map_err(|e| CliError::usage(e.render().to_string()))
    }
}
