//! Import tests for the Question Output Format (QOF → QuestionSet)
//!
//! These tests verify the decoder's grammar handling, defaulting rules and hard
//! error conditions against both inline documents and a realistic generator
//! transcript fixture.

use qof_babel::format::Format;
use qof_babel::formats::qof::QofFormat;
use qof_babel::{CurriculumEntry, CurriculumMap, FormatError};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_fixture_structure() {
    let set = QofFormat.parse(&fixture("sample.qof")).expect("Should parse fixture");

    assert_eq!(set.title, "Quantitative Math Practice");
    assert_eq!(
        set.description,
        "Mixed practice set covering counting and arrangement problems."
    );
    assert_eq!(set.questions.len(), 3);

    let first = &set.questions[0];
    assert_eq!(first.order, 1);
    assert_eq!(first.difficulty, "easy");
    assert_eq!(first.options.len(), 4);
    assert_eq!(first.correct_index, 1);
    assert_eq!(
        first.explanation,
        "Each shirt color pairs with each pant color, so multiply the choices:\n3 x 2 = 6 distinct uniforms."
    );

    let second = &set.questions[1];
    assert_eq!(second.image_tag.as_deref(), Some("packed_balls_4x6"));

    let third = &set.questions[2];
    assert_eq!(third.plusmarks, 2);
    assert_eq!(third.unit, "Numbers and Operations");
}

#[test]
fn test_default_correct_index() {
    let src = "@question Pick one\n@option A\n@option B\n";
    let set = QofFormat.parse(src).unwrap();
    assert_eq!(set.questions[0].correct_index, 0);
}

#[test]
fn test_last_correct_marker_wins() {
    // Duplicate @@option markers are absorbed, not an error: the decoder keeps the
    // last one, matching the producer's observed behavior.
    let src = "@question Pick one\n@option A\n@@option B\n@@option C\n";
    let set = QofFormat.parse(src).unwrap();
    let q = &set.questions[0];
    assert_eq!(q.options, vec!["A", "B", "C"]);
    assert_eq!(q.correct_index, 2);
}

#[test]
fn test_curriculum_override_precedence() {
    let mut map = CurriculumMap::new();
    map.insert(
        5,
        CurriculumEntry {
            subject: "S".to_string(),
            unit: "U".to_string(),
            topic: "T".to_string(),
        },
    );

    let src = "@question Q\n@Order 5\n@subject X\n@unit Y\n@topic Z\n";
    let set = QofFormat.parse_with_curriculum(src, Some(&map)).unwrap();
    let q = &set.questions[0];
    assert_eq!(q.subject, "S");
    assert_eq!(q.unit, "U");
    assert_eq!(q.topic, "T");
}

#[test]
fn test_invalid_order_aborts_decode() {
    let src = "@question Fine\n@Order 1\n\n@question Broken\n@Order abc\n";
    let result = QofFormat.parse(src);
    // No partial result: the earlier well-formed block is discarded too.
    assert!(matches!(result, Err(FormatError::InvalidInteger(_))));
}

#[test]
fn test_explanation_verbatim_capture() {
    // @unit is not a terminator inside an explanation body; the line is swallowed
    // verbatim rather than parsed as a field.
    let src = "@question Q\n@explanation\nLine one\n@unit-like-text\nLine two\n@subject Foo\n";
    let set = QofFormat.parse(src).unwrap();
    let q = &set.questions[0];
    assert_eq!(q.explanation, "Line one\n@unit-like-text\nLine two");
    assert_eq!(q.subject, "Foo");
    assert_eq!(q.unit, "");
}

#[test]
fn test_explanation_trims_surrounding_blank_lines() {
    let src = "@question Q\n@explanation\n\nBody text\n\n@subject Foo\n";
    let set = QofFormat.parse(src).unwrap();
    assert_eq!(set.questions[0].explanation, "Body text");
}

#[test]
fn test_encounter_order_is_textual_order() {
    let src = "@question B\n@Order 2\n\n@question A\n@Order 1\n";
    let set = QofFormat.parse(src).unwrap();
    assert_eq!(set.questions[0].text, "B");
    assert_eq!(set.questions[0].order, 2);
    assert_eq!(set.questions[1].text, "A");
    assert_eq!(set.questions[1].order, 1);
}

#[test]
fn test_title_only_header() {
    let set = QofFormat.parse("@title Solo\n\n@question Q\n").unwrap();
    assert_eq!(set.title, "Solo");
    assert_eq!(set.description, "");
}

#[test]
fn test_description_only_header() {
    let set = QofFormat.parse("@description Just this\n\n@question Q\n").unwrap();
    assert_eq!(set.title, "");
    assert_eq!(set.description, "Just this");
}

#[test]
fn test_empty_options_is_degenerate_but_valid() {
    let set = QofFormat.parse("@question No choices here\n@Order 4\n").unwrap();
    let q = &set.questions[0];
    assert!(q.options.is_empty());
    // Still defaulted; the index is meaningless over an empty list but always set.
    assert_eq!(q.correct_index, 0);
}

#[test]
fn test_lowercase_order_tag_is_not_recognized() {
    // The wire tag is @Order with a capital O; @order falls through as unknown.
    let set = QofFormat.parse("@question Q\n@order 9\n").unwrap();
    assert_eq!(set.questions[0].order, 0);
}
