//! CLI command definition.
//!
//! This module declares the option vocabulary understood by the tool. The
//! returned [`Command`] is parsed once per argument source (the options file,
//! then the live CLI arguments), so it is built here and cloned by the parse
//! driver rather than consumed by a single `get_matches` call.

use clap::{Arg, ArgAction, Command};

pub const PARAMETER_DB: &str = "db";
pub const PARAMETER_QUIET: &str = "quiet";
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_DEBUG: &str = "debug";
pub const PARAMETER_VERSION: &str = "version";
pub const PARAMETER_BARE_VERSION: &str = "bare-version";
pub const PARAMETER_YARDOPTS: &str = "yardopts";
pub const PARAMETER_NO_YARDOPTS: &str = "no-yardopts";
pub const PARAMETER_ARGS: &str = "args";

/// Create the CLI command with all its options.
pub fn create_cli_command() -> Command {
    // Every option overrides itself so a repeated flag is last-one-wins
    // instead of a hard parse error.
    let db_parameter = Arg::new(PARAMETER_DB)
        .short('b')
        .long(PARAMETER_DB)
        .value_name("FILE")
        .num_args(1)
        .required(false)
        .overrides_with(PARAMETER_DB)
        .help("Use a specified .yardoc db to load from or save to (defaults to .yardoc)");

    let quiet_parameter = Arg::new(PARAMETER_QUIET)
        .short('q')
        .long(PARAMETER_QUIET)
        .action(ArgAction::SetTrue)
        .overrides_with(PARAMETER_QUIET)
        .help("Show no warnings");

    let verbose_parameter = Arg::new(PARAMETER_VERBOSE)
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .overrides_with(PARAMETER_VERBOSE)
        .help("Show more information");

    let debug_parameter = Arg::new(PARAMETER_DEBUG)
        .long(PARAMETER_DEBUG)
        .action(ArgAction::SetTrue)
        .overrides_with(PARAMETER_DEBUG)
        .help("Show debugging information");

    let version_parameter = Arg::new(PARAMETER_VERSION)
        .short('v')
        .long(PARAMETER_VERSION)
        .action(ArgAction::SetTrue)
        .overrides_with(PARAMETER_VERSION)
        .help("Show version information");

    let bare_version_parameter = Arg::new(PARAMETER_BARE_VERSION)
        .long(PARAMETER_BARE_VERSION)
        .action(ArgAction::SetTrue)
        .overrides_with(PARAMETER_BARE_VERSION)
        .help("Show JUST the version");

    // The two yardopts options are acted on by a pre-scan of the raw CLI
    // tokens (the options file must be chosen before any source is parsed);
    // they are declared here so they appear in help output and parse cleanly.
    let yardopts_parameter = Arg::new(PARAMETER_YARDOPTS)
        .long(PARAMETER_YARDOPTS)
        .value_name("FILE")
        .num_args(1)
        .required(false)
        .overrides_with(PARAMETER_YARDOPTS)
        .help("Read default arguments from FILE (defaults to .yardopts)");

    let no_yardopts_parameter = Arg::new(PARAMETER_NO_YARDOPTS)
        .long(PARAMETER_NO_YARDOPTS)
        .action(ArgAction::SetTrue)
        .overrides_with(PARAMETER_NO_YARDOPTS)
        .help("Do not read the options file");

    // Catch-all for bare (non-option) tokens. The command takes no positional
    // arguments; anything collected here produces a warning at run time.
    let args_parameter = Arg::new(PARAMETER_ARGS).num_args(0..).hide(true);

    Command::new(env!("CARGO_PKG_NAME"))
        .bin_name("yard clean")
        .about("Remove the database files.")
        .arg(db_parameter)
        .arg(quiet_parameter)
        .arg(verbose_parameter)
        .arg(debug_parameter)
        .arg(version_parameter)
        .arg(bare_version_parameter)
        .arg(yardopts_parameter)
        .arg(no_yardopts_parameter)
        .arg(args_parameter)
}
