//! crcforge CLI entry point
//!
//! Minimal entrypoint that:
//! 1. Parses CLI arguments and runs the forge (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with the error's status (1 for usage, 2 for everything else)

use crcforge::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
