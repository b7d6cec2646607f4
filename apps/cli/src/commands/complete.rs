//! `openai-complete` command.

use std::io::{self, Write};

use anyhow::Result;

use crate::cli::CompleteCli;
use crate::commands::client_from_args;

/// Send the instructions as a prompt and write the completion to stdout.
pub async fn run_complete(args: &CompleteCli) -> Result<()> {
    let client = client_from_args(&args.api)?;
    let text = client.complete(args.engine, &args.instructions).await?;

    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
