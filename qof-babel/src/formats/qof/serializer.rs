//! Question Output Format serialization (QuestionSet → QOF)
//!
//! Pure string building, total for any well-formed question. The encoder emits the
//! canonical block layout the decoder understands, so a serialized question decodes
//! back field for field.

use crate::model::{Question, QuestionSet};

/// Serialize one question to its canonical QOF block.
///
/// Field order is fixed: prompt, instruction, difficulty, order, blank, options
/// (with `@@option` exactly at `correct_index`), blank, explanation, subject, unit,
/// topic, plusmarks, then the image tag when one is set. Lines are newline-joined
/// with no trailing newline.
pub fn serialize_question(question: &Question) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("@question {}", question.text));
    lines.push(format!("@instruction {}", question.instruction));
    lines.push(format!("@difficulty {}", question.difficulty));
    lines.push(format!("@Order {}", question.order));
    lines.push(String::new());

    for (index, option) in question.options.iter().enumerate() {
        let tag = if index == question.correct_index {
            "@@option"
        } else {
            "@option"
        };
        lines.push(format!("{tag} {option}"));
    }

    lines.push(String::new());
    lines.push("@explanation".to_string());
    lines.push(question.explanation.clone());
    lines.push(format!("@subject {}", question.subject));
    lines.push(format!("@unit {}", question.unit));
    lines.push(format!("@topic {}", question.topic));
    lines.push(format!("@plusmarks {}", question.plusmarks));
    if let Some(tag) = &question.image_tag {
        lines.push(format!("@image {tag}"));
    }

    lines.join("\n")
}

/// Serialize a whole question set: header lines when non-empty, then one block per
/// question separated by a blank line.
pub fn serialize_question_set(set: &QuestionSet) -> String {
    let mut parts: Vec<String> = Vec::new();

    let mut header = Vec::new();
    if !set.title.is_empty() {
        header.push(format!("@title {}", set.title));
    }
    if !set.description.is_empty() {
        header.push(format!("@description {}", set.description));
    }
    if !header.is_empty() {
        parts.push(header.join("\n"));
    }

    for question in &set.questions {
        parts.push(serialize_question(question));
    }

    parts.join("\n\n")
}
