//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing question sets.

use crate::curriculum::CurriculumMap;
use crate::error::FormatError;
use crate::model::QuestionSet;
use std::collections::HashMap;

/// Trait for question set formats
///
/// Implementors provide bidirectional conversion between string representation and the
/// QuestionSet model. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<QuestionSet, FormatError> {
///         // Parse source to QuestionSet
///         todo!()
///     }
///
///     fn serialize(&self, set: &QuestionSet) -> Result<String, FormatError> {
///         // Serialize QuestionSet to string
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "qof", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["qof"], ["json"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → QuestionSet)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (QuestionSet → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a QuestionSet
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<QuestionSet, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Parse source text, threading an optional curriculum override into the decode.
    ///
    /// The default implementation delegates to [`Format::parse`] and ignores the map.
    /// Only formats whose text can carry wrong classification fields (QOF) override
    /// this; structured formats are assumed to already hold the intended values.
    fn parse_with_curriculum(
        &self,
        source: &str,
        _curriculum: Option<&CurriculumMap>,
    ) -> Result<QuestionSet, FormatError> {
        self.parse(source)
    }

    /// Serialize a QuestionSet into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _set: &QuestionSet) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a QuestionSet, optionally using extra parameters.
    ///
    /// Formats without tunable output can rely on the default implementation, which
    /// delegates to [`Format::serialize`] when no options are given.
    fn serialize_with_options(
        &self,
        set: &QuestionSet,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(set)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
