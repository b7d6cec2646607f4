//! Rendering of records into note blocks.
//!
//! The default outline layout is:
//! ```text
//! * note
//! ** Front
//! What is Rust?
//! ** Back
//! A systems programming language.
//!
//! ```
//! Each block ends with a blank line so consecutive notes stay separable.
//!
//! Question and answer text is written verbatim. An answer line that itself
//! starts with `*` (a bullet such as `* item`) reads as an outline heading on
//! import and splits the note; use [`NoteFormat::Json`] for such transcripts.

use std::io::{self, Write};

use crate::types::Record;

/// Output layout for rendered records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteFormat {
    /// Outline headings, see [`NoteTemplate`].
    #[default]
    Org,
    /// One JSON object per line.
    Json,
}

/// Headings used by the outline layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTemplate {
    pub note_heading: String,
    pub front_heading: String,
    pub back_heading: String,
}

impl Default for NoteTemplate {
    fn default() -> Self {
        Self {
            note_heading: "* note".to_string(),
            front_heading: "** Front".to_string(),
            back_heading: "** Back".to_string(),
        }
    }
}

impl NoteTemplate {
    /// Render one record as an outline block, including its trailing blank line.
    pub fn render(&self, record: &Record) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n\n",
            self.note_heading, self.front_heading, record.question, self.back_heading, record.answer
        )
    }
}

/// Write one record to `out` in the chosen format.
pub fn write_record<W>(
    out: &mut W,
    record: &Record,
    format: NoteFormat,
    template: &NoteTemplate,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    match format {
        NoteFormat::Org => out.write_all(template.render(record).as_bytes()),
        NoteFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            out.write_all(b"\n")
        }
    }
}

/// Write every record to `out` and flush it.
///
/// Returns the number of records written.
pub fn write_records<W, I>(
    out: &mut W,
    records: I,
    format: NoteFormat,
    template: &NoteTemplate,
) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Record>,
{
    let mut count = 0;
    for record in records {
        write_record(out, &record, format, template)?;
        count += 1;
    }

    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_all(records: Vec<Record>, format: NoteFormat) -> (String, usize) {
        let mut buf = Vec::new();
        let count = write_records(&mut buf, records, format, &NoteTemplate::default()).unwrap();
        (String::from_utf8(buf).unwrap(), count)
    }

    #[test]
    fn render_single_note() {
        let rendered = NoteTemplate::default().render(&Record::new("What is Rust?", "A language."));
        assert_eq!(
            rendered,
            "* note\n** Front\nWhat is Rust?\n** Back\nA language.\n\n"
        );
    }

    #[test]
    fn render_keeps_answer_lines() {
        let rendered = NoteTemplate::default().render(&Record::new("q", "one\ntwo\n\nfour"));
        assert!(rendered.ends_with("** Back\none\ntwo\n\nfour\n\n"));
    }

    #[test]
    fn answer_lines_are_not_escaped() {
        let rendered = NoteTemplate::default().render(&Record::new("list?", "* bullet\n** deeper"));
        assert_eq!(rendered, "* note\n** Front\nlist?\n** Back\n* bullet\n** deeper\n\n");

        let (json, _) = render_all(vec![Record::new("list?", "* bullet")], NoteFormat::Json);
        assert_eq!(json, "{\"question\":\"list?\",\"answer\":\"* bullet\"}\n");
    }

    #[test]
    fn custom_headings() {
        let template = NoteTemplate {
            note_heading: "# card".to_string(),
            front_heading: "## Q".to_string(),
            back_heading: "## A".to_string(),
        };
        assert_eq!(
            template.render(&Record::new("q", "a")),
            "# card\n## Q\nq\n## A\na\n\n"
        );
    }

    #[test]
    fn write_org_blocks_in_order() {
        let (out, count) = render_all(
            vec![Record::new("q1", "a1"), Record::new("q2", "a2")],
            NoteFormat::Org,
        );
        assert_eq!(count, 2);
        assert_eq!(
            out,
            "* note\n** Front\nq1\n** Back\na1\n\n* note\n** Front\nq2\n** Back\na2\n\n"
        );
    }

    #[test]
    fn write_json_lines() {
        let (out, count) = render_all(
            vec![Record::new("q1", "a\nb"), Record::new("", "stray")],
            NoteFormat::Json,
        );
        assert_eq!(count, 2);
        assert_eq!(
            out,
            "{\"question\":\"q1\",\"answer\":\"a\\nb\"}\n{\"question\":\"\",\"answer\":\"stray\"}\n"
        );
    }

    #[test]
    fn write_nothing_for_no_records() {
        let (out, count) = render_all(vec![], NoteFormat::Org);
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }
}
