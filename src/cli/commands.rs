//! CLI command implementation
//!
//! Boot sequence of one invocation:
//! 1. resolve settings (config file, then flags)
//! 2. read the input file
//! 3. forge the collision
//! 4. check the forged checksum, then write the output file

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checksum::{compute_checksum, verify_checksum};
use crate::forge::{
    default_workers, ForgeConfig, SearchCoordinator, DEFAULT_INJECTION, MAX_WORKERS,
};
use crate::observability::{log_event_with_fields, Event, Logger, SearchMetricsSnapshot, Severity};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_output};

/// Optional JSON configuration file
///
/// ```json
/// { "workers": 8, "payload": "He-he-he" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Number of search threads
    pub workers: Option<usize>,
    /// Payload appended before the salt
    pub payload: Option<String>,
}

impl FileConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: FileConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.workers == Some(0) {
            return Err(CliError::config_error("workers must be > 0"));
        }
        if let Some(workers) = self.workers.filter(|w| *w > MAX_WORKERS) {
            return Err(CliError::config_error(format!(
                "workers must be <= {}, got {}",
                MAX_WORKERS, workers
            )));
        }
        Ok(())
    }
}

/// Settings after merging the config file and command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub workers: usize,
    pub payload: String,
}

impl Settings {
    /// Flags override the file; anything unset falls back to defaults.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let file = match &cli.config {
            Some(path) => {
                let config = FileConfig::load(path)?;
                log_event_with_fields(
                    Event::ConfigLoaded,
                    &[("path", path.display().to_string().as_str())],
                );
                config
            }
            None => FileConfig::default(),
        };

        Ok(Self {
            workers: cli.workers.or(file.workers).unwrap_or_else(default_workers),
            payload: cli
                .payload
                .clone()
                .or(file.payload)
                .unwrap_or_else(|| DEFAULT_INJECTION.to_string()),
        })
    }
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeReport {
    pub checksum: u32,
    pub salt: u32,
    pub input_len: usize,
    pub output_len: usize,
    pub metrics: SearchMetricsSnapshot,
}

/// Entry point used by `main`
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_from_args(std::env::args_os())?;
    run_command(&cli).map(|_| ())
}

/// Forge `cli.input` into `cli.output`
pub fn run_command(cli: &Cli) -> CliResult<ForgeReport> {
    if cli.quiet {
        Logger::set_min_severity(Severity::Warn);
    }

    let settings = Settings::resolve(cli)?;

    let original = read_input(&cli.input)?;
    log_event_with_fields(
        Event::InputRead,
        &[
            ("bytes", original.len().to_string().as_str()),
            ("path", cli.input.display().to_string().as_str()),
        ],
    );

    let config = ForgeConfig::with_workers(settings.workers);
    let mut coordinator = SearchCoordinator::new(config)?;
    let collision = coordinator.run(&original, settings.payload.as_bytes())?;

    let checksum = compute_checksum(&original);
    if !verify_checksum(&collision.bytes, checksum) {
        return Err(CliError::forge_failed(format!(
            "forged buffer does not match checksum {:#010x}",
            checksum
        )));
    }

    write_output(&cli.output, &collision.bytes)?;
    log_event_with_fields(
        Event::OutputWritten,
        &[
            ("bytes", collision.bytes.len().to_string().as_str()),
            ("path", cli.output.display().to_string().as_str()),
        ],
    );

    Ok(ForgeReport {
        checksum,
        salt: collision.salt,
        input_len: original.len(),
        output_len: collision.bytes.len(),
        metrics: coordinator.metrics(),
    })
}
