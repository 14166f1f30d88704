//! Removes the documentation database directory (conventionally `.yardoc`).
//!
//! The library half of the `yard-clean` binary: the binary parses the
//! options file and the CLI arguments into a [`clean::Clean`] command, then
//! runs it.
//!
//! # Modules
//!
//! - `clean`: the cleanup command core (path resolution and removal)
//! - `commands`: CLI option vocabulary
//! - `error`: error taxonomy and exit-code mapping
//! - `exit_codes`: numeric exit codes
//! - `logging`: verbosity handling and subscriber setup
//! - `options`: argument sources, tolerant parsing, the options file

pub mod clean;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod options;
