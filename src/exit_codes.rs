//! Custom exit codes for the application
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

/// Exit codes reported by the tool
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Command line usage error (64) - User input error
    UsageError = 64,

    /// System error (71) - OS-level error while removing the DB directory
    OSError = 71,

    /// Configuration error (78) - The options file could not be read
    ConfigError = 78,

    /// Path conflict (100) - The DB path exists but is not a directory
    ConflictError = 100,
}

impl CleanExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            CleanExitCode::Success => "Success",
            CleanExitCode::UsageError => "Command line usage error",
            CleanExitCode::OSError => "Operating system error",
            CleanExitCode::ConfigError => "Configuration error",
            CleanExitCode::ConflictError => "DB path exists but is not a directory",
        }
    }
}

impl From<CleanExitCode> for i32 {
    fn from(code: CleanExitCode) -> Self {
        code.code()
    }
}
