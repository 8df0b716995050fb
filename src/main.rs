use std::process::ExitCode;

use clap::Parser;

use wsmaker::errors::InputError;
use wsmaker::session::{SaveOutcome, Session};

/// Interactive collector for word-search puzzle data
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Destination path for the output file; tried before prompting for one
    #[arg(short, long)]
    output: Option<String>,
}

/// Entry point of the wsmaker collector.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WSMAKER_DEBUG").is_ok();
    wsmaker::log::init_logger(debug_enabled);

    log::debug!("Starting wsmaker collector");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with code and help if it's ours
        if let Some(input_err) = e.downcast_ref::<InputError>() {
            eprintln!("Error: {}", input_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the collector.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Run the collection loop over stdin/stdout (dimension, then
///    word/direction pairs until the sentinel).
/// 3. Serialize the store to the chosen file and report the outcome.
///
/// All three outcomes (saved / close failed / nothing to save) exit 0; only
/// an aborted session (closed stdin, endpoint I/O failure) bubbles an error
/// up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    session.collect()?;
    let outcome = session.save(cli.output.as_deref())?;
    drop(session);

    match outcome {
        SaveOutcome::Saved { path } => {
            log::debug!("wrote \"{path}\"");
            println!("File was correctly saved.");
        }
        SaveOutcome::CloseFailed { path } => {
            log::debug!("failed writing \"{path}\"");
            println!("File couldn't be saved correctly (error in file creation or save).");
        }
        SaveOutcome::NothingToSave => {
            println!("File not created. There's no words to save.");
        }
    }

    Ok(())
}
