//! JSON format implementation
//!
//! Structured representation of a question set, used as the durable interchange form
//! for the rendering collaborator and for tooling that wants to post-process sets.
//!
//! # Library Choice
//!
//! We never hand-write JSON handling: the model derives serde traits and this module
//! is a thin adapter over `serde_json`. Output is pretty-printed by default since the
//! files are routinely read by humans; pass `pretty = "false"` through the options
//! map for compact output.
//!
//! # Lossless
//!
//! JSON carries every model field verbatim, so JSON ↔ model round trips are exact.
//! This is the one format where that holds; QOF trims field whitespace on decode.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::QuestionSet;
use std::collections::HashMap;

/// Format implementation for JSON
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON representation of a question set"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<QuestionSet, FormatError> {
        serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("JSON parsing error: {e}")))
    }

    fn serialize(&self, set: &QuestionSet) -> Result<String, FormatError> {
        serde_json::to_string_pretty(set)
            .map_err(|e| FormatError::SerializationError(format!("JSON serialization error: {e}")))
    }

    fn serialize_with_options(
        &self,
        set: &QuestionSet,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let pretty = options.get("pretty").map(|v| v != "false").unwrap_or(true);
        if pretty {
            self.serialize(set)
        } else {
            serde_json::to_string(set).map_err(|e| {
                FormatError::SerializationError(format!("JSON serialization error: {e}"))
            })
        }
    }
}
