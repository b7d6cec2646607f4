//! Core types for transcript conversion.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentinelError};

/// Default prefix marking the start of a question.
pub const DEFAULT_QUESTION_PREFIX: &str = "Q:";

/// Default prefix marking the start of an answer.
pub const DEFAULT_ANSWER_PREFIX: &str = "A:";

/// One finalized question/answer pair.
///
/// `answer` holds every answer line of the segment joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub answer: String,
}

impl Record {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// True when the question text is empty, either because no question
    /// sentinel was seen or because the sentinel carried no text.
    pub fn is_headless(&self) -> bool {
        self.question.is_empty()
    }
}

/// Line prefixes recognized as question and answer sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinels {
    question: String,
    answer: String,
}

impl Sentinels {
    /// Build a sentinel pair, rejecting prefixes that could never match or
    /// that would shadow each other.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self> {
        let question = question.into();
        let answer = answer.into();

        validate_prefix("question", &question)?;
        validate_prefix("answer", &answer)?;
        if question == answer {
            return Err(SentinelError::IdenticalPrefixes(question));
        }
        // Question prefixes are tested first, so only this direction shadows.
        if answer.starts_with(&question) {
            return Err(SentinelError::ShadowedPrefix { question, answer });
        }

        Ok(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            question: DEFAULT_QUESTION_PREFIX.to_string(),
            answer: DEFAULT_ANSWER_PREFIX.to_string(),
        }
    }
}

fn validate_prefix(kind: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SentinelError::EmptyPrefix { kind });
    }
    if value.starts_with(char::is_whitespace) {
        return Err(SentinelError::LeadingWhitespace {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;

    fn segment_one(lines: &[&str]) -> Record {
        segment(lines).next().unwrap()
    }

    #[test]
    fn default_sentinels() {
        let sentinels = Sentinels::default();
        assert_eq!(sentinels.question(), "Q:");
        assert_eq!(sentinels.answer(), "A:");
    }

    #[test]
    fn custom_sentinels() {
        let sentinels = Sentinels::new("Question:", "Answer:").unwrap();
        assert_eq!(sentinels.question(), "Question:");
        assert_eq!(sentinels.answer(), "Answer:");
    }

    #[test]
    fn reject_empty_prefix() {
        assert_eq!(
            Sentinels::new("", "A:"),
            Err(SentinelError::EmptyPrefix { kind: "question" })
        );
        assert_eq!(
            Sentinels::new("Q:", "   "),
            Err(SentinelError::EmptyPrefix { kind: "answer" })
        );
    }

    #[test]
    fn reject_leading_whitespace() {
        let result = Sentinels::new(" Q:", "A:");
        assert!(matches!(
            result,
            Err(SentinelError::LeadingWhitespace { kind: "question", .. })
        ));
    }

    #[test]
    fn reject_identical_prefixes() {
        let result = Sentinels::new(">", ">");
        assert_eq!(result, Err(SentinelError::IdenticalPrefixes(">".to_string())));
    }

    #[test]
    fn reject_answer_prefix_shadowed_by_question() {
        assert_eq!(
            Sentinels::new("Q", "QA"),
            Err(SentinelError::ShadowedPrefix {
                question: "Q".to_string(),
                answer: "QA".to_string(),
            })
        );
    }

    #[test]
    fn question_prefix_may_extend_answer_prefix() {
        let sentinels = Sentinels::new("QA", "Q").unwrap();
        assert_eq!(sentinels.question(), "QA");
        assert_eq!(sentinels.answer(), "Q");
    }

    #[test]
    fn headless_record() {
        assert!(Record::new("", "stray").is_headless());
        assert!(segment_one(&["Q:", "A: a"]).is_headless());
        assert!(!Record::new("q", "a").is_headless());
    }

    #[test]
    fn record_serializes_as_object() {
        let json = serde_json::to_string(&Record::new("q", "a\nb")).unwrap();
        assert_eq!(json, r#"{"question":"q","answer":"a\nb"}"#);
    }
}
