//! The cleanup command itself.
//!
//! [`Clean`] carries the settings resolved by the parse driver (the DB path,
//! the selected verbosity and any stray bare arguments) and performs the
//! removal. The DB path is a plain field: the parse driver writes it,
//! [`Clean::run`] reads it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::logging::Verbosity;

/// Conventional location of the documentation database
pub const DEFAULT_DB_PATH: &str = ".yardoc";

/// The resolved cleanup command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clean {
    db: PathBuf,
    verbosity: Verbosity,
    extra_args: Vec<String>,
}

impl Default for Clean {
    fn default() -> Self {
        Self {
            db: PathBuf::from(DEFAULT_DB_PATH),
            verbosity: Verbosity::default(),
            extra_args: Vec::new(),
        }
    }
}

impl Clean {
    /// The DB path this command will remove
    pub fn db(&self) -> &Path {
        &self.db
    }

    pub fn set_db(&mut self, db: PathBuf) {
        self.db = db;
    }

    /// The verbosity selected during parsing
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Record bare (non-option) tokens found during parsing. They are warned
    /// about in [`Clean::run`] but never abort the command.
    pub fn extend_args(&mut self, args: impl IntoIterator<Item = String>) {
        self.extra_args.extend(args);
    }

    /// Runs the command, removing the DB directory if it exists and *is* a
    /// directory.
    ///
    /// Removing a missing path is a no-op; a path that exists but is not a
    /// directory is a fatal conflict and is left untouched.
    pub fn run(&self) -> Result<(), CliError> {
        if !self.extra_args.is_empty() {
            warn!(
                "`yard clean` does not accept arguments (only options), found {:?}. \
                 See `yard clean --help` for usage.",
                self.extra_args
            );
        }

        let db = &self.db;
        debug!("resolved DB path: {:?}", db);

        if db.exists() {
            if db.is_dir() {
                info!("Found DB directory at {:?}, removing...", db);
                fs::remove_dir_all(db).map_err(|source| CliError::RemoveFailed {
                    path: db.clone(),
                    source,
                })?;
            } else {
                return Err(CliError::DbPathNotDirectory { path: db.clone() });
            }
        } else {
            info!("DB path {:?} does no exist, nothing to do.", db);
        }

        info!("Done.");

        Ok(())
    }
}
