use psan_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Stdout carries HTML; logging picks a file or stderr on its own.
    let destination = logging::init_logging();
    tracing::debug!(?destination, "psan starting");

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("psan error: {:#}", err);
        std::process::exit(1);
    }
}
