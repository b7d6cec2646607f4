//! Transcript to note conversion.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use qanda_core::{write_record, NoteFormat, NoteTemplate, Sentinels, TrySegmenter};

use crate::cli::ConvertCli;

/// Read the transcript named by `args` (or stdin) and write notes to stdout.
///
/// Returns the number of notes written.
pub fn run_convert(args: &ConvertCli) -> Result<usize> {
    let sentinels = Sentinels::new(args.question_prefix.as_str(), args.answer_prefix.as_str())
        .context("invalid sentinel prefixes")?;
    let format = NoteFormat::from(args.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.input {
        Some(path) => {
            tracing::debug!("Reading transcript from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            convert(BufReader::new(file), &mut out, sentinels, format)
        }
        None => {
            tracing::debug!("Reading transcript from stdin");
            convert(io::stdin().lock(), &mut out, sentinels, format)
        }
    }
}

/// Segment `reader` line by line and stream rendered notes into `out`.
pub fn convert<R, W>(reader: R, out: &mut W, sentinels: Sentinels, format: NoteFormat) -> Result<usize>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let template = NoteTemplate::default();
    let mut count = 0;

    for record in TrySegmenter::new(reader.lines(), sentinels) {
        let record = record.context("failed to read input")?;
        if record.is_headless() {
            tracing::warn!("Note {} has an empty question", count + 1);
        }
        write_record(out, &record, format, &template).context("failed to write output")?;
        count += 1;
    }

    out.flush().context("failed to write output")?;
    tracing::info!("Wrote {} note(s)", count);
    Ok(count)
}
