//! Curriculum override map
//!
//! Generated text occasionally mislabels the classification fields, so callers can
//! supply an externally curated mapping keyed by question order. The decoder applies a
//! matching entry unconditionally as the last mutation before a question is finalized;
//! the override always wins over textual content.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification triple forced onto a question regardless of its textual content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumEntry {
    pub subject: String,
    pub unit: String,
    pub topic: String,
}

/// Override entries keyed by the question's `@Order` value.
pub type CurriculumMap = HashMap<u32, CurriculumEntry>;
