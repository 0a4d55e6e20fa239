use gitiles_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("gitiles error: {:#}", err);
        std::process::exit(1);
    }
}
