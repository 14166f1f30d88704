use std::process;

use tracing::error;
use yard_clean::logging;
use yard_clean::options::{self, ParseOutcome};

/// Main entry point for the program
fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    // Parse both argument sources first: the verbosity flags have to be
    // resolved before the logging subsystem goes up.
    let clean = match options::parse(&argv) {
        Ok(ParseOutcome::Ready(clean)) => clean,
        Ok(ParseOutcome::Exit(code)) => process::exit(code),
        Err(err) => {
            // Parse-stage failures happen before the subscriber is installed;
            // report them on stderr directly.
            eprintln!("ERROR: {}", err);
            process::exit(err.exit_code().code());
        }
    };

    logging::init(clean.verbosity());

    if let Err(err) = clean.run() {
        error!("{}", err);
        error!("Exiting...");
        process::exit(err.exit_code().code());
    }
}
