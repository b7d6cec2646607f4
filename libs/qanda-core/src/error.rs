//! Error types for qanda-core.

use thiserror::Error;

/// Result type alias using SentinelError.
pub type Result<T> = std::result::Result<T, SentinelError>;

/// Errors that can occur when configuring sentinel prefixes.
///
/// Segmentation itself never fails; these only guard construction of
/// [`Sentinels`](crate::types::Sentinels).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentinelError {
    #[error("{kind} prefix must not be empty")]
    EmptyPrefix { kind: &'static str },

    #[error("{kind} prefix must not start with whitespace: {value:?}")]
    LeadingWhitespace { kind: &'static str, value: String },

    #[error("question and answer prefixes are identical: {0:?}")]
    IdenticalPrefixes(String),

    #[error("answer prefix {answer:?} starts with question prefix {question:?}; answer lines would read as questions")]
    ShadowedPrefix { question: String, answer: String },
}
