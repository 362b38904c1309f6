//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the question set model and its text representations.

pub mod json;
pub mod qof;

pub use json::JsonFormat;
pub use qof::QofFormat;
