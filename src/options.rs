//! Argument-source handling for the cleanup command.
//!
//! Arguments arrive from up to two sources parsed in order with the same
//! vocabulary: the options file (if present and not suppressed), then the
//! live CLI arguments. Both sources fold into one [`Clean`] value, so CLI
//! settings override options-file settings.
//!
//! Parsing is *tolerant*: an options file shared with sibling tools may
//! carry many flags this command does not understand, and those must be
//! skipped silently rather than aborting. Tolerance is implemented as an
//! error-handler loop around clap's `try_get_matches_from` that drops the
//! offending token and retries.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgMatches, Command};

use crate::clean::Clean;
use crate::commands::{
    create_cli_command, PARAMETER_ARGS, PARAMETER_BARE_VERSION, PARAMETER_DB, PARAMETER_DEBUG,
    PARAMETER_QUIET, PARAMETER_VERBOSE, PARAMETER_VERSION,
};
use crate::error::CliError;
use crate::exit_codes::CleanExitCode;
use crate::logging::Verbosity;

/// Conventional name of the options file, looked up in the working directory
pub const DEFAULT_OPTIONS_FILE: &str = ".yardopts";

/// The result of parsing all argument sources.
///
/// Help and version requests produce their output during parsing and yield
/// [`ParseOutcome::Exit`]; nothing below `main` terminates the process.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Parsing finished; run the command
    Ready(Clean),
    /// Output was already produced; exit with this status
    Exit(i32),
}

/// Parse the options file (if any) and the live CLI arguments into a
/// [`Clean`] command.
pub fn parse(argv: &[String]) -> Result<ParseOutcome, CliError> {
    let command = create_cli_command();
    let mut clean = Clean::default();

    if let Some(path) = options_file_path(argv) {
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let tokens = shell_split(&contents);
                if let Some(code) = parse_source(&command, &tokens, &mut clean) {
                    return Ok(ParseOutcome::Exit(code));
                }
            }
            // No options file is the common case, not an error.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(CliError::OptionsFileUnreadable { path, source }),
        }
    }

    match parse_source(&command, argv, &mut clean) {
        Some(code) => Ok(ParseOutcome::Exit(code)),
        None => Ok(ParseOutcome::Ready(clean)),
    }
}

/// Resolve which options file to read, honoring `--yardopts FILE` and
/// `--no-yardopts` on the raw CLI tokens. These are scanned before the file
/// is read because the file's own contents cannot redirect the lookup.
fn options_file_path(argv: &[String]) -> Option<PathBuf> {
    let mut path = PathBuf::from(DEFAULT_OPTIONS_FILE);
    let mut tokens = argv.iter();
    while let Some(token) = tokens.next() {
        if token == "--no-yardopts" {
            return None;
        } else if token == "--yardopts" {
            path = PathBuf::from(tokens.next()?);
        } else if let Some(file) = token.strip_prefix("--yardopts=") {
            path = PathBuf::from(file);
        }
    }
    Some(path)
}

/// Parse one argument source and fold it into `clean`.
///
/// Returns an exit status when the source requested help or version output.
fn parse_source(command: &Command, tokens: &[String], clean: &mut Clean) -> Option<i32> {
    let matches = match try_parse_tolerant(command, tokens) {
        Ok(matches) => matches,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            let _ = err.print();
            return Some(CleanExitCode::Success.code());
        }
        Err(err) => {
            let _ = err.print();
            return Some(CleanExitCode::UsageError.code());
        }
    };
    apply_matches(&matches, clean)
}

/// Parse `tokens`, silently dropping anything the vocabulary does not cover.
///
/// Errors that survive are the ones with no offending token to drop (and
/// help requests, which the caller handles).
fn try_parse_tolerant(command: &Command, tokens: &[String]) -> Result<ArgMatches, clap::Error> {
    let mut tokens: Vec<String> = tokens.to_vec();
    loop {
        let argv = std::iter::once(env!("CARGO_PKG_NAME").to_string()).chain(tokens.iter().cloned());
        match command.clone().try_get_matches_from(argv) {
            Ok(matches) => return Ok(matches),
            Err(err) if recoverable(err.kind()) => {
                let Some(flag) = offending_token(&err) else {
                    return Err(err);
                };
                if !remove_token(&mut tokens, &flag) {
                    return Err(err);
                }
            }
            Err(err) => return Err(err),
        }
    }
}

fn recoverable(kind: ErrorKind) -> bool {
    // InvalidValue covers a value-taking option left dangling at the end of
    // the token list.
    matches!(kind, ErrorKind::UnknownArgument | ErrorKind::InvalidValue)
}

/// The argument clap choked on, reduced to its flag token.
fn offending_token(err: &clap::Error) -> Option<String> {
    match err.get(ContextKind::InvalidArg) {
        // Value errors render the argument as "--db <FILE>"; keep the flag.
        Some(ContextValue::String(arg)) => arg.split_whitespace().next().map(str::to_string),
        _ => None,
    }
}

/// Drop the first token spelling out `flag`, either alone or as `flag=value`.
fn remove_token(tokens: &mut Vec<String>, flag: &str) -> bool {
    let position = tokens.iter().position(|token| {
        token == flag
            || token
                .strip_prefix(flag)
                .is_some_and(|rest| rest.starts_with('='))
    });
    match position {
        Some(position) => {
            tokens.remove(position);
            true
        }
        None => false,
    }
}

/// Fold one source's matches into the command state.
///
/// Returns an exit status when a version flag was present; the printed
/// output is a direct write, not a leveled log record, so it is visible at
/// any verbosity.
fn apply_matches(matches: &ArgMatches, clean: &mut Clean) -> Option<i32> {
    if let Some(db) = matches.get_one::<String>(PARAMETER_DB) {
        clean.set_db(PathBuf::from(db));
    }

    if matches.get_flag(PARAMETER_QUIET) {
        clean.set_verbosity(Verbosity::Quiet);
    }
    if matches.get_flag(PARAMETER_VERBOSE) {
        clean.set_verbosity(Verbosity::Verbose);
    }
    if matches.get_flag(PARAMETER_DEBUG) {
        clean.set_verbosity(Verbosity::Debug);
    }

    if matches.get_flag(PARAMETER_VERSION) {
        println!("yard clean {}", env!("CARGO_PKG_VERSION"));
        return Some(CleanExitCode::Success.code());
    }
    if matches.get_flag(PARAMETER_BARE_VERSION) {
        // JUST the version: no trailing newline.
        print!("{}", env!("CARGO_PKG_VERSION"));
        use io::Write as _;
        let _ = io::stdout().flush();
        return Some(CleanExitCode::Success.code());
    }

    if let Some(args) = matches.get_many::<String>(PARAMETER_ARGS) {
        clean.extend_args(args.cloned());
    }

    None
}

/// Split options-file text into argument tokens.
///
/// Whitespace separates tokens; single and double quotes group tokens that
/// contain whitespace. No variable expansion or escape processing.
pub fn shell_split(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in text.chars() {
        match quote {
            Some(open) => {
                if ch == open {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_token = true;
                }
                ch if ch.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                ch => {
                    current.push(ch);
                    in_token = true;
                }
            },
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn shell_split_separates_on_whitespace() {
        assert_eq!(
            shell_split("--db .yardoc\n--verbose"),
            vec!["--db", ".yardoc", "--verbose"]
        );
    }

    #[test]
    fn shell_split_honors_quotes() {
        assert_eq!(
            shell_split("--db \"my docs/.yardoc\" 'single quoted'"),
            vec!["--db", "my docs/.yardoc", "single quoted"]
        );
    }

    #[test]
    fn shell_split_of_empty_text_is_empty() {
        assert!(shell_split("").is_empty());
        assert!(shell_split("  \n\t ").is_empty());
    }

    #[test]
    fn unknown_options_are_silently_skipped() {
        let command = create_cli_command();
        let mut clean = Clean::default();

        let outcome = parse_source(
            &command,
            &tokens(&["--some-unrelated-flag", "--db", "custom.path"]),
            &mut clean,
        );

        assert!(outcome.is_none());
        assert_eq!(clean.db(), Path::new("custom.path"));
    }

    #[test]
    fn unknown_option_value_degrades_to_bare_argument() {
        let command = create_cli_command();
        let mut clean = Clean::default();

        // "--unknown value" loses its flag; "value" becomes a bare argument
        // and is warned about at run time, not a failure.
        let outcome = parse_source(&command, &tokens(&["--unknown", "value", "-q"]), &mut clean);

        assert!(outcome.is_none());
        assert_eq!(clean.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn dangling_value_option_is_dropped() {
        let command = create_cli_command();
        let mut clean = Clean::default();

        let outcome = parse_source(&command, &tokens(&["--verbose", "--db"]), &mut clean);

        assert!(outcome.is_none());
        assert_eq!(clean.db(), Path::new(crate::clean::DEFAULT_DB_PATH));
        assert_eq!(clean.verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn later_source_overrides_earlier_one() {
        let command = create_cli_command();
        let mut clean = Clean::default();

        parse_source(&command, &tokens(&["--db", "from_options_file"]), &mut clean);
        parse_source(&command, &tokens(&["--db", "from_cli"]), &mut clean);

        assert_eq!(clean.db(), Path::new("from_cli"));
    }

    #[test]
    fn earlier_source_survives_when_later_one_is_silent() {
        let command = create_cli_command();
        let mut clean = Clean::default();

        parse_source(&command, &tokens(&["--db", "from_options_file"]), &mut clean);
        parse_source(&command, &tokens(&[]), &mut clean);

        assert_eq!(clean.db(), Path::new("from_options_file"));
    }

    #[test]
    fn verbosity_flags_map_to_levels() {
        let command = create_cli_command();

        let mut clean = Clean::default();
        parse_source(&command, &tokens(&["-q"]), &mut clean);
        assert_eq!(clean.verbosity(), Verbosity::Quiet);

        let mut clean = Clean::default();
        parse_source(&command, &tokens(&["--debug"]), &mut clean);
        assert_eq!(clean.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn bare_arguments_are_collected_not_rejected() {
        let command = create_cli_command();
        let mut clean = Clean::default();

        let outcome = parse_source(&command, &tokens(&["foo", "--db", "custom.path"]), &mut clean);

        assert!(outcome.is_none());
        assert_eq!(clean.db(), Path::new("custom.path"));
    }

    #[test]
    fn options_file_lookup_defaults_to_conventional_name() {
        assert_eq!(
            options_file_path(&tokens(&["--db", "x"])),
            Some(PathBuf::from(DEFAULT_OPTIONS_FILE))
        );
    }

    #[test]
    fn options_file_lookup_honors_override_and_suppression() {
        assert_eq!(
            options_file_path(&tokens(&["--yardopts", "custom.opts"])),
            Some(PathBuf::from("custom.opts"))
        );
        assert_eq!(
            options_file_path(&tokens(&["--yardopts=custom.opts"])),
            Some(PathBuf::from("custom.opts"))
        );
        assert_eq!(options_file_path(&tokens(&["--no-yardopts"])), None);
    }

    #[test]
    fn repeated_flags_are_last_one_wins() {
        let command = create_cli_command();
        let mut clean = Clean::default();

        let outcome = parse_source(&command, &tokens(&["--db", "first", "--db", "second"]), &mut clean);

        assert!(outcome.is_none());
        assert_eq!(clean.db(), Path::new("second"));
    }
}
