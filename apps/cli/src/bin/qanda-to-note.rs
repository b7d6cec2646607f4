use std::process;

use clap::Parser;
use qanda_notes_cli::cli::ConvertCli;
use qanda_notes_cli::commands::run_convert;
use qanda_notes_cli::config;

fn main() {
    config::load_env();
    let args = ConvertCli::parse();
    config::init_tracing(args.verbose);

    if let Err(e) = run_convert(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
