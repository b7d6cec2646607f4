//! Core library for turning question/answer transcripts into flashcard notes.
//!
//! Provides:
//! - Block segmenter grouping input lines into (question, answer) records
//! - Note formatter rendering records as outline notes or JSON lines
//! - Shared types (Record, Sentinels)

pub mod error;
pub mod formatter;
pub mod segmenter;
pub mod types;

pub use error::{Result, SentinelError};
pub use formatter::{write_record, write_records, NoteFormat, NoteTemplate};
pub use segmenter::{classify, segment, try_segment, LineKind, SegmentState, Segmenter, TrySegmenter};
pub use types::{Record, Sentinels, DEFAULT_ANSWER_PREFIX, DEFAULT_QUESTION_PREFIX};
