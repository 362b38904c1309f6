//! Conversion tests for the JSON format

use qof_babel::format::Format;
use qof_babel::formats::json::JsonFormat;
use qof_babel::formats::qof::QofFormat;
use qof_babel::{FormatError, FormatRegistry, Question, QuestionSet};
use std::collections::HashMap;

fn sample_set() -> QuestionSet {
    QuestionSet {
        title: "Sample".to_string(),
        description: "One question".to_string(),
        questions: vec![Question {
            order: 1,
            text: "How many sides does a hexagon have?".to_string(),
            instruction: "Select one.".to_string(),
            difficulty: "easy".to_string(),
            options: vec!["5".to_string(), "6".to_string(), "7".to_string()],
            correct_index: 1,
            explanation: "Hex means six.".to_string(),
            subject: "Quantitative Math".to_string(),
            unit: "Geometry and Measurement".to_string(),
            topic: "Polygons".to_string(),
            plusmarks: 1,
            image_tag: None,
        }],
    }
}

#[test]
fn test_json_round_trip_is_exact() {
    let text = JsonFormat.serialize(&sample_set()).unwrap();
    let back = JsonFormat.parse(&text).unwrap();
    assert_eq!(back, sample_set());
}

#[test]
fn test_parse_known_document() {
    let src = r#"{
        "title": "T",
        "description": "",
        "questions": [{
            "order": 2,
            "text": "Q",
            "instruction": "",
            "difficulty": "moderate",
            "options": ["a", "b"],
            "correct_index": 0,
            "explanation": "",
            "subject": "",
            "unit": "",
            "topic": "",
            "plusmarks": 1,
            "image_tag": "fig_02"
        }]
    }"#;

    let set = JsonFormat.parse(src).unwrap();
    assert_eq!(set.title, "T");
    assert_eq!(set.questions[0].order, 2);
    assert_eq!(set.questions[0].image_tag.as_deref(), Some("fig_02"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = JsonFormat.parse("[1, 2,");
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[test]
fn test_compact_option_through_registry() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("pretty".to_string(), "false".to_string());

    let compact = registry
        .serialize_with_options(&sample_set(), "json", &options)
        .unwrap();
    assert!(!compact.contains('\n'));

    let pretty = registry.serialize(&sample_set(), "json").unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(
        JsonFormat.parse(&compact).unwrap(),
        JsonFormat.parse(&pretty).unwrap()
    );
}

#[test]
fn test_qof_to_json_pipeline() {
    // The CLI's main path: decode generator text, emit structured JSON.
    let qof_text = QofFormat.serialize(&sample_set()).unwrap();
    let decoded = QofFormat.parse(&qof_text).unwrap();
    let json_text = JsonFormat.serialize(&decoded).unwrap();
    let final_set = JsonFormat.parse(&json_text).unwrap();
    assert_eq!(final_set, sample_set());
}
