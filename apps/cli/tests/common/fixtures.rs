//! Test fixtures and factory functions.

use serde_json::{json, Value};

/// Generate a transcript with a specified number of question/answer pairs.
///
/// # Arguments
/// * `num_pairs` - Number of pairs to generate
/// * `answer_lines` - Lines per answer; lines after the first carry no prefix
pub fn sample_transcript(num_pairs: usize, answer_lines: usize) -> String {
    (0..num_pairs)
        .map(|i| {
            let mut block = format!("Q: Question {}?\nA: Answer {}.", i + 1, i + 1);
            for line in 1..answer_lines {
                block.push_str(&format!("\nDetail {} of answer {}.", line + 1, i + 1));
            }
            block.push('\n');
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A successful API response carrying `text` as its only choice.
pub fn text_response(text: &str) -> Value {
    json!({
        "object": "text_completion",
        "choices": [{ "text": text, "index": 0 }]
    })
}
