//! Question Output Format parsing (QOF → QuestionSet)
//!
//! Single forward pass over the input lines with an explicit cursor and an enumerated
//! parser state. There is no backtracking: block boundaries and explanation
//! terminators hand control back without consuming the boundary line, so the next
//! state sees it again.

use crate::curriculum::CurriculumMap;
use crate::error::FormatError;
use crate::model::{Question, QuestionSet};

/// Tag prefixes that end verbatim explanation capture. Deliberately short: `@unit`,
/// `@topic` and `@plusmarks` inside an explanation body are swallowed verbatim.
const EXPLANATION_TERMINATORS: [&str; 2] = ["@subject", "@image"];

/// Parse a QOF document into a question set.
///
/// Missing optional fields take documented defaults and never fail; the only fatal
/// condition is a non-integer `@Order` or `@plusmarks`, which aborts the whole decode
/// with [`FormatError::InvalidInteger`] and returns no partial result.
///
/// A curriculum entry matching a question's order overwrites its
/// `subject`/`unit`/`topic` unconditionally, as the last step before the question is
/// appended.
pub fn parse_question_set(
    source: &str,
    curriculum: Option<&CurriculumMap>,
) -> Result<QuestionSet, FormatError> {
    let mut cursor = Cursor::new(source);
    let mut set = QuestionSet::default();
    let mut state = ParserState::Header;
    let mut draft: Option<Draft> = None;
    let mut explanation: Vec<&str> = Vec::new();

    loop {
        let line = cursor.peek();
        match state {
            ParserState::Header => match line {
                Some(l) if l.starts_with("@title") => {
                    set.title = rest_of("@title", l);
                    cursor.advance();
                }
                Some(l) if l.starts_with("@description") => {
                    set.description = rest_of("@description", l);
                    cursor.advance();
                }
                // First line that is neither header tag ends the header, consuming
                // nothing. Both tags are optional in either combination.
                _ => state = ParserState::Scan,
            },
            ParserState::Scan => match line {
                None => break,
                Some(l) if l.starts_with("@question") => {
                    draft = Some(Draft::new(rest_of("@question", l)));
                    cursor.advance();
                    state = ParserState::Block;
                }
                // Blank lines and stray content between blocks are tolerated.
                Some(_) => cursor.advance(),
            },
            ParserState::Block => match line {
                Some(l) if !l.starts_with("@question") => {
                    if l.starts_with("@explanation") {
                        explanation.clear();
                        state = ParserState::Explanation;
                    } else if let Some(d) = draft.as_mut() {
                        d.apply_field(l)?;
                    }
                    cursor.advance();
                }
                // Next marker or end of input closes the block. The marker line is
                // left for the Scan state to reopen.
                _ => {
                    if let Some(d) = draft.take() {
                        set.questions.push(d.finish(curriculum));
                    }
                    state = ParserState::Scan;
                }
            },
            ParserState::Explanation => match line {
                Some(l) if !is_explanation_terminator(l) => {
                    explanation.push(l);
                    cursor.advance();
                }
                // Terminator or EOF: store the body and return to field dispatch
                // without consuming the terminating line.
                _ => {
                    if let Some(d) = draft.as_mut() {
                        d.explanation = explanation.join("\n").trim().to_string();
                    }
                    state = ParserState::Block;
                }
            },
        }
    }

    Ok(set)
}

/// Decoder states. The terminator rules live in the transitions above rather than in
/// ad hoc flags, so they stay checkable.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ParserState {
    /// Consuming the optional `@title` / `@description` lines
    Header,
    /// Looking for the next `@question` marker
    Scan,
    /// Dispatching field tags inside a question block
    Block,
    /// Verbatim capture after `@explanation`
    Explanation,
}

/// Line cursor over trailing-trimmed input lines
struct Cursor<'a> {
    lines: Vec<&'a str>,
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Cursor {
            lines: source.lines().map(str::trim_end).collect(),
            index: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }
}

/// In-progress question record with the format's documented defaults
struct Draft {
    text: String,
    instruction: String,
    difficulty: String,
    order: u32,
    options: Vec<String>,
    correct_index: Option<usize>,
    explanation: String,
    subject: String,
    unit: String,
    topic: String,
    plusmarks: u32,
    image_tag: Option<String>,
}

impl Draft {
    fn new(text: String) -> Self {
        Draft {
            text,
            instruction: String::new(),
            difficulty: "moderate".to_string(),
            order: 0,
            options: Vec::new(),
            correct_index: None,
            explanation: String::new(),
            subject: String::new(),
            unit: String::new(),
            topic: String::new(),
            plusmarks: 1,
            image_tag: None,
        }
    }

    /// Dispatch one field line. Unknown tags and blank lines fall through untouched
    /// so the format stays forward compatible.
    fn apply_field(&mut self, line: &str) -> Result<(), FormatError> {
        // `@@option` first: the single-at prefix does not match a double-at line,
        // but keeping the more specific tag up front mirrors the dispatch order of
        // the wire format description.
        if let Some(rest) = line.strip_prefix("@@option") {
            self.options.push(rest.trim().to_string());
            // Last marker wins when several lines claim the correct slot.
            self.correct_index = Some(self.options.len() - 1);
        } else if let Some(rest) = line.strip_prefix("@option") {
            self.options.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("@instruction") {
            self.instruction = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("@difficulty") {
            self.difficulty = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("@Order") {
            self.order = parse_integer_field("@Order", rest.trim())?;
        } else if let Some(rest) = line.strip_prefix("@subject") {
            self.subject = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("@unit") {
            self.unit = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("@topic") {
            self.topic = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("@plusmarks") {
            self.plusmarks = parse_integer_field("@plusmarks", rest.trim())?;
        } else if let Some(rest) = line.strip_prefix("@image") {
            self.image_tag = Some(rest.trim().to_string());
        }
        Ok(())
    }

    /// Finalize the record. The curriculum override is the last mutation before the
    /// question becomes immutable.
    fn finish(self, curriculum: Option<&CurriculumMap>) -> Question {
        let mut question = Question {
            order: self.order,
            text: self.text,
            instruction: self.instruction,
            difficulty: self.difficulty,
            options: self.options,
            correct_index: self.correct_index.unwrap_or(0),
            explanation: self.explanation,
            subject: self.subject,
            unit: self.unit,
            topic: self.topic,
            plusmarks: self.plusmarks,
            image_tag: self.image_tag,
        };

        if let Some(entry) = curriculum.and_then(|map| map.get(&question.order)) {
            question.subject = entry.subject.clone();
            question.unit = entry.unit.clone();
            question.topic = entry.topic.clone();
        }

        question
    }
}

fn is_explanation_terminator(line: &str) -> bool {
    EXPLANATION_TERMINATORS
        .iter()
        .any(|tag| line.starts_with(tag))
}

fn rest_of(tag: &str, line: &str) -> String {
    line[tag.len()..].trim().to_string()
}

fn parse_integer_field(tag: &str, value: &str) -> Result<u32, FormatError> {
    value.parse::<u32>().map_err(|_| {
        FormatError::InvalidInteger(format!("{tag} expects an integer, got '{value}'"))
    })
}
