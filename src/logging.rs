//! Logging setup for the CLI.
//!
//! Verbosity is resolved from command-line flags before the subscriber is
//! installed, so the flags take effect for every record the command emits.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Output verbosity selected by the `-q`/`--verbose`/`--debug` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Informational messages (the default; the command narrates what it did)
    #[default]
    Normal,
    /// Informational messages, requested explicitly
    Verbose,
    /// Debugging output
    Debug,
}

impl Verbosity {
    /// The maximum tracing level shown at this verbosity
    pub fn level(&self) -> Level {
        match self {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal | Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
        }
    }
}

/// Initialize the logging subsystem.
///
/// A `RUST_LOG` environment filter, when present, overrides the flag-derived
/// level.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_verbosity_shows_informational_output() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
        assert_eq!(Verbosity::Normal.level(), Level::INFO);
    }

    #[test]
    fn quiet_limits_output_to_errors() {
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
    }

    #[test]
    fn debug_enables_debugging_output() {
        assert_eq!(Verbosity::Debug.level(), Level::DEBUG);
    }
}
