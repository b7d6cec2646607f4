//! Argument definitions for the three binaries.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use qanda_core::{NoteFormat, DEFAULT_ANSWER_PREFIX, DEFAULT_QUESTION_PREFIX};

use crate::openai::{Engine, DEFAULT_API_BASE};

/// Convert a Q:/A: transcript into flashcard notes.
///
/// Pairs are separated by blank lines. Lines after an answer without a
/// prefix continue the answer.
#[derive(Debug, Parser)]
#[command(name = "qanda-to-note", author, version, about, long_about = None)]
pub struct ConvertCli {
    /// Transcript file to read. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Prefix marking a question line.
    #[arg(long, env = "QANDA_QUESTION_PREFIX", default_value = DEFAULT_QUESTION_PREFIX)]
    pub question_prefix: String,

    /// Prefix marking an answer line.
    #[arg(long, env = "QANDA_ANSWER_PREFIX", default_value = DEFAULT_ANSWER_PREFIX)]
    pub answer_prefix: String,

    /// Output layout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Org)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Org,
    Json,
}

impl From<OutputFormat> for NoteFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Org => NoteFormat::Org,
            OutputFormat::Json => NoteFormat::Json,
        }
    }
}

/// Connection settings shared by the API commands.
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Base URL of the API.
    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Netrc file holding the `machine openai` entry. Defaults to ~/.netrc.
    #[arg(long, env = "NETRC")]
    pub netrc: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Submit instructions to the OpenAI completions endpoint.
#[derive(Debug, Parser)]
#[command(name = "openai-complete", author, version, about, long_about = None)]
pub struct CompleteCli {
    #[arg(long, value_enum, default_value_t = Engine::Text)]
    pub engine: Engine,

    /// Instructions to send as the prompt.
    #[arg(long, default_value = "")]
    pub instructions: String,

    #[command(flatten)]
    pub api: ApiArgs,
}

/// Submit text from stdin to the OpenAI edits endpoint.
#[derive(Debug, Parser)]
#[command(name = "openai-edit", author, version, about, long_about = None)]
pub struct EditCli {
    #[arg(long, value_enum, default_value_t = Engine::Text)]
    pub engine: Engine,

    /// Instructions to apply to the input text.
    #[arg(long, default_value = "")]
    pub instructions: String,

    #[command(flatten)]
    pub api: ApiArgs,
}
