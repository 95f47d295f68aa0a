//! Error types for parsing and unit loading.

use crate::parser::Tag;
use thiserror::Error;

/// A recognized tag whose argument cannot be split unambiguously.
///
/// Only `@throws` with an unclosed `[` produces this today.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {tag} tag on line {line}: {reason}")]
pub struct MalformedTagError {
    pub tag: Tag,
    /// Zero-based line index within the doc-comment
    pub line: usize,
    pub reason: &'static str,
}

/// Failure to read a unit listing.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("invalid unit listing: {0}")]
    Json(#[from] serde_json::Error),
}
