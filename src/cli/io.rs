//! File I/O for the CLI
//!
//! Input and output are opaque byte blobs.

use std::fs;
use std::path::Path;

use super::errors::{CliError, CliResult};

/// Read the whole input file
pub fn read_input(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write the forged buffer, replacing any existing file
pub fn write_output(path: &Path, data: &[u8]) -> CliResult<()> {
    fs::write(path, data)
        .map_err(|e| CliError::io_error(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");

        write_output(&path, b"\x00\x01binary\xff").unwrap();
        assert_eq!(read_input(&path).unwrap(), b"\x00\x01binary\xff");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.bin");

        let err = read_input(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::IoError);
        assert!(err.message().contains("missing.bin"));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.bin");

        let err = write_output(&path, b"x").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::IoError);
    }
}
