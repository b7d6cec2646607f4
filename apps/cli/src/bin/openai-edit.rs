use std::process;

use clap::Parser;
use qanda_notes_cli::cli::EditCli;
use qanda_notes_cli::commands::run_edit;
use qanda_notes_cli::config;

#[tokio::main]
async fn main() {
    config::load_env();
    let args = EditCli::parse();
    config::init_tracing(args.api.verbose);

    if let Err(e) = run_edit(&args).await {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
