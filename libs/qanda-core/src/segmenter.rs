//! Block segmenter for question/answer transcripts.
//!
//! # Format
//! ```text
//! Q: What is Rust?
//! A: A systems programming language.
//!
//! Q: Explain borrowing
//! A: Borrowing allows references without ownership.
//! Continuation lines extend the answer.
//! ```
//!
//! # Segment boundaries
//!
//! Records are emitted on **blank lines or end-of-input** ("emit-on-blank-or-EOF"):
//!
//! - A blank line finalizes the pending record if a question or any answer
//!   line has accumulated. Runs of blank lines with nothing pending are skipped.
//! - End-of-input finalizes whatever is still pending.
//! - A question sentinel never finalizes anything by itself. It replaces the
//!   pending question, and answer lines gathered so far stay with it. Two
//!   pairs written without a blank line between them therefore come out as a
//!   single record under the later question.
//! - Lines seen before any question sentinel become answer lines of a
//!   headless record, which is emitted with an empty question.
//!
//! The number of records equals the number of maximal runs of non-blank lines.

use std::iter::FusedIterator;

use crate::types::{Record, Sentinels};

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Question sentinel; holds the trimmed remainder.
    Question(&'a str),
    /// Answer sentinel; holds the trimmed remainder.
    Answer(&'a str),
    Blank,
    /// Any other line; holds the trimmed content.
    Continuation(&'a str),
}

/// Classify a line. Sentinels are matched after leading whitespace is removed.
pub fn classify<'a>(line: &'a str, sentinels: &Sentinels) -> LineKind<'a> {
    let trimmed = line.trim_start();

    if let Some(rest) = trimmed.strip_prefix(sentinels.question()) {
        LineKind::Question(rest.trim())
    } else if let Some(rest) = trimmed.strip_prefix(sentinels.answer()) {
        LineKind::Answer(rest.trim())
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Continuation(trimmed.trim_end())
    }
}

/// Pending question and answer lines for the segment being read.
///
/// This is the push-based core that [`Segmenter`] and [`TrySegmenter`] drive.
#[derive(Debug, Default)]
pub struct SegmentState {
    question: Option<String>,
    answer_lines: Vec<String>,
}

impl SegmentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a question or any answer line is waiting to be emitted.
    pub fn is_pending(&self) -> bool {
        self.question.is_some() || !self.answer_lines.is_empty()
    }

    /// Feed one line. Returns a record when the line closes a segment.
    pub fn push_line(&mut self, line: &str, sentinels: &Sentinels) -> Option<Record> {
        match classify(line, sentinels) {
            LineKind::Question(text) => {
                self.question = Some(text.to_string());
                None
            }
            LineKind::Answer(text) | LineKind::Continuation(text) => {
                self.answer_lines.push(text.to_string());
                None
            }
            LineKind::Blank => self.take(),
        }
    }

    /// Flush the pending record at end-of-input.
    pub fn finish(&mut self) -> Option<Record> {
        self.take()
    }

    fn take(&mut self) -> Option<Record> {
        if !self.is_pending() {
            return None;
        }

        let question = self.question.take().unwrap_or_default();
        let answer = self.answer_lines.join("\n");
        self.answer_lines.clear();

        Some(Record { question, answer })
    }
}

/// Lazy iterator of records over an infallible line source.
///
/// Pulls lines only until the next record is complete. Dropping it early
/// discards any pending segment.
#[derive(Debug)]
pub struct Segmenter<I> {
    lines: I,
    sentinels: Sentinels,
    state: SegmentState,
    done: bool,
}

impl<I> Segmenter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<L>(lines: L, sentinels: Sentinels) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            sentinels,
            state: SegmentState::new(),
            done: false,
        }
    }
}

impl<I> Iterator for Segmenter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            if let Some(record) = self.state.push_line(line.as_ref(), &self.sentinels) {
                return Some(record);
            }
        }

        self.done = true;
        self.state.finish()
    }
}

impl<I> FusedIterator for Segmenter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

/// Lazy iterator of records over a fallible line source such as
/// [`std::io::BufRead::lines`].
///
/// The first source error is yielded and ends the sequence; the segment
/// pending at that point is discarded.
#[derive(Debug)]
pub struct TrySegmenter<I> {
    lines: I,
    sentinels: Sentinels,
    state: SegmentState,
    done: bool,
}

impl<I, S, E> TrySegmenter<I>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    pub fn new<L>(lines: L, sentinels: Sentinels) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            sentinels,
            state: SegmentState::new(),
            done: false,
        }
    }
}

impl<I, S, E> Iterator for TrySegmenter<I>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    type Item = Result<Record, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(record) = self.state.push_line(line.as_ref(), &self.sentinels) {
                        return Some(Ok(record));
                    }
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }

        self.done = true;
        self.state.finish().map(Ok)
    }
}

impl<I, S, E> FusedIterator for TrySegmenter<I>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
}

/// Segment lines using the default `Q:` / `A:` sentinels.
pub fn segment<L>(lines: L) -> Segmenter<L::IntoIter>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Segmenter::new(lines, Sentinels::default())
}

/// Segment fallible lines using the default `Q:` / `A:` sentinels.
pub fn try_segment<L, S, E>(lines: L) -> TrySegmenter<L::IntoIter>
where
    L: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    TrySegmenter::new(lines, Sentinels::default())
}
