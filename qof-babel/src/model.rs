//! Question set model
//!
//! Pure data containers for a quiz question set. The model performs no validation at
//! construction; the decoder that builds instances enforces the structural invariants
//! (correct index always set, encounter order preserved), and the encoder assumes a
//! well-formed question by contract.

use serde::{Deserialize, Serialize};

/// One quiz item.
///
/// Questions are immutable once built, except for the optional curriculum override of
/// `subject`/`unit`/`topic`, which the decoder applies once before finalizing a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Display/answer sequence position. Unique within a set but not required to be
    /// contiguous, and does not resort the set's encounter order.
    pub order: u32,
    /// The question prompt.
    pub text: String,
    /// Short directive shown above the question; empty when absent.
    pub instruction: String,
    /// Free-form label, "moderate" when the source text does not specify one.
    pub difficulty: String,
    /// Answer choices in textual order. Empty is a valid but degenerate state.
    pub options: Vec<String>,
    /// Zero-based index into `options` marking the correct choice. Defaults to 0 when
    /// no option was explicitly marked, even over empty `options` (index then
    /// meaningless but stored all the same).
    pub correct_index: usize,
    /// Multi-line rationale, trimmed of surrounding blank lines; empty when absent.
    pub explanation: String,
    pub subject: String,
    pub unit: String,
    pub topic: String,
    /// Marks awarded for a correct answer.
    pub plusmarks: u32,
    /// When present, a companion image exists under this identifier. The model only
    /// carries the tag; image bytes belong to the rendering collaborator.
    pub image_tag: Option<String>,
}

impl Question {
    /// Serialize this question to its canonical Question Output Format block.
    pub fn to_output_block(&self) -> String {
        crate::formats::qof::serializer::serialize_question(self)
    }
}

/// An ordered collection of questions with optional title and description.
///
/// `questions` follows encounter order in the source text, which is independent of the
/// `order` field's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}
