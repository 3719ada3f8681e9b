use clap::Parser;
use ogharvest_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging before any work so setup failures are reported too.
    if cli.log_file {
        if let Err(e) = logging::init_logging() {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", e);
        }
    } else {
        logging::init_logging_stderr();
    }

    let result = cli.run();
    if let Err(err) = &result {
        tracing::error!("run aborted: {:#}", err);
        eprintln!("ogharvest error: {:#}", err);
    }
    std::process::exit(cli::exit_code(&result));
}
