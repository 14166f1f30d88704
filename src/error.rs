use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes::CleanExitCode;

/// Error types that can occur during command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// The configured DB path points at something other than a directory.
    /// Nothing is deleted in this case.
    #[error("DB path {path:?} exists, but is NOT a directory!")]
    DbPathNotDirectory { path: PathBuf },
    /// Recursive removal of the DB directory failed partway (permissions,
    /// concurrent removal)
    #[error("failed to remove DB directory {path:?}: {source}")]
    RemoveFailed { path: PathBuf, source: io::Error },
    /// The options file exists but could not be read
    #[error("failed to read options file {path:?}: {source}")]
    OptionsFileUnreadable { path: PathBuf, source: io::Error },
}

impl CliError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> CleanExitCode {
        match self {
            CliError::DbPathNotDirectory { .. } => CleanExitCode::ConflictError,
            CliError::RemoveFailed { .. } => CleanExitCode::OSError,
            CliError::OptionsFileUnreadable { .. } => CleanExitCode::ConfigError,
        }
    }
}
