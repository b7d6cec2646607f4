use std::process;

use clap::Parser;
use qanda_notes_cli::cli::CompleteCli;
use qanda_notes_cli::commands::run_complete;
use qanda_notes_cli::config;

#[tokio::main]
async fn main() {
    config::load_env();
    let args = CompleteCli::parse();
    config::init_tracing(args.api.verbose);

    if let Err(e) = run_complete(&args).await {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
