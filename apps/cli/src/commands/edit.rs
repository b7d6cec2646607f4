//! `openai-edit` command.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use crate::cli::EditCli;
use crate::commands::client_from_args;

/// Send stdin with the instructions to the edits endpoint and write the result to stdout.
pub async fn run_edit(args: &EditCli) -> Result<()> {
    let client = client_from_args(&args.api)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    tracing::debug!("Read {} bytes of input", input.len());

    let text = client.edit(args.engine, &input, &args.instructions).await?;

    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
