//! Command-line glue around qanda-core.
//!
//! Three binaries share this library:
//! - `qanda-to-note` converts Q:/A: transcripts into flashcard notes
//! - `openai-complete` submits instructions to the completions endpoint
//! - `openai-edit` submits stdin text plus instructions to the edits endpoint

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod openai;
