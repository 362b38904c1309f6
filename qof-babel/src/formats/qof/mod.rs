//! Question Output Format implementation
//!
//! This module implements bidirectional conversion between the QuestionSet model and
//! the Question Output Format, the line-oriented @-tag mini-language the
//! text-generation collaborator emits.
//!
//! # Grammar
//!
//! ```text
//! document   := header question-block*
//! header     := [title-line] [description-line]
//! title-line := "@title" REST
//! desc-line  := "@description" REST
//! question-block := question-line field*
//! question-line := "@question" REST
//! field := instruction-line | difficulty-line | order-line
//!        | option-line | explanation-block | subject-line
//!        | unit-line | topic-line | plusmarks-line | image-line
//! explanation-block := "@explanation" NEWLINE verbatim-lines
//!                       (terminated by "@subject" or "@image" or EOF)
//! ```
//!
//! # Tag Mapping Table
//!
//! | Tag            | Model field     | Absent in source                        |
//! |----------------|-----------------|-----------------------------------------|
//! | `@title`       | set title       | empty string                            |
//! | `@description` | set description | empty string                            |
//! | `@question`    | text            | n/a (opens a block)                     |
//! | `@instruction` | instruction     | empty string                            |
//! | `@difficulty`  | difficulty      | "moderate"                              |
//! | `@Order`       | order           | 0 (hard error when not an integer)      |
//! | `@option`      | options push    | empty vector                            |
//! | `@@option`     | options push + correct_index | correct_index defaults to 0 |
//! | `@explanation` | explanation     | empty string                            |
//! | `@subject`     | subject         | empty string                            |
//! | `@unit`        | unit            | empty string                            |
//! | `@topic`       | topic           | empty string                            |
//! | `@plusmarks`   | plusmarks       | 1 (hard error when not an integer)      |
//! | `@image`       | image_tag       | None                                    |
//!
//! # Tolerance Policy
//!
//! The format is machine-written, so the only hard errors are unparseable integer
//! fields. Everything else degrades: missing sections take the defaults above,
//! unknown tags and stray content are skipped, duplicate `@@option` markers resolve
//! last-wins. Callers needing strict validation post-validate the returned set.
//!
//! # Known Limitations
//!
//! - No escaping mechanism exists for literal @tag-like text inside free-form
//!   fields; such content mis-parses.
//! - Inside an explanation body only `@subject` and `@image` terminate verbatim
//!   capture. An `@unit`, `@topic` or `@plusmarks` line in the body is swallowed
//!   verbatim. That matches what the producer emits and what rendering expects.

pub mod parser;
pub mod serializer;

use crate::curriculum::CurriculumMap;
use crate::error::FormatError;
use crate::format::Format;
use crate::model::QuestionSet;

/// Format implementation for the Question Output Format
pub struct QofFormat;

impl Format for QofFormat {
    fn name(&self) -> &str {
        "qof"
    }

    fn description(&self) -> &str {
        "Question Output Format (line-oriented @-tag blocks)"
    }

    fn file_extensions(&self) -> &[&str] {
        // Generator transcripts are frequently saved as plain .txt
        &["qof", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<QuestionSet, FormatError> {
        parser::parse_question_set(source, None)
    }

    fn parse_with_curriculum(
        &self,
        source: &str,
        curriculum: Option<&CurriculumMap>,
    ) -> Result<QuestionSet, FormatError> {
        parser::parse_question_set(source, curriculum)
    }

    fn serialize(&self, set: &QuestionSet) -> Result<String, FormatError> {
        Ok(serializer::serialize_question_set(set))
    }
}
