//! tagdoc: structured records from tagged doc-comments.
//!
//! [`parse_docstring`] turns the raw text of one doc-comment into a
//! [`model::ParsedRecord`]. The [`unit`] pipeline applies it to a listing of
//! documentable items, and [`render`] turns the results into Markdown or JSON.

pub mod error;
pub mod lint;
pub mod model;
pub mod parser;
pub mod render;
pub mod toc;
pub mod unit;

pub use error::{MalformedTagError, UnitError};
pub use parser::{parse, parse_docstring, Tag};
