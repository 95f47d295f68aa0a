//! Data model for parsed doc-comments and documented units.

use serde::{Deserialize, Serialize, Serializer};

/// Everything extracted from a single doc-comment.
///
/// List fields are always present; an empty `Vec` means the tag never
/// appeared (or every occurrence was dropped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    /// Leading untagged text, reflowed into paragraphs
    pub description: Option<String>,
    /// @author entries
    pub author: Vec<Author>,
    /// @copyright entries
    pub copyright: Vec<String>,
    /// Last @deprecated wins
    pub deprecated: Deprecation,
    /// @example blocks with non-empty code
    pub examples: Vec<Example>,
    /// Exact `@global` line present
    pub global: bool,
    /// Exact `@ignore` line present
    pub ignore: bool,
    /// Last @license wins
    pub license: Option<License>,
    /// Unique, identifier-valid @memberof names
    pub memberof: Vec<String>,
    /// Identifier-valid @namespace entries (repeats kept)
    pub namespaces: Vec<Namespace>,
    /// @param entries, unique by name
    pub parameters: Vec<Parameter>,
    /// Exact `@private` line present
    pub private: bool,
    /// Last @returns wins
    pub returns: Option<String>,
    /// Last @since wins
    pub since: Option<String>,
    /// @throws entries
    pub throws: Vec<Throw>,
    /// @todo entries
    pub todo: Vec<String>,
    /// Last @version wins
    pub version: Option<String>,
}

impl ParsedRecord {
    /// Whether a renderer should leave this record out of public output.
    pub fn is_hidden(&self) -> bool {
        self.private || self.ignore
    }

    /// Look up a parameter description by name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.description.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Deprecation state: absent, bare tag, or tag with an explanation.
///
/// Serializes as `false`, `true`, or the explanation string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Deprecation {
    #[default]
    No,
    Yes,
    Reason(String),
}

impl Deprecation {
    pub fn is_deprecated(&self) -> bool {
        !matches!(self, Deprecation::No)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecation::Reason(text) => Some(text),
            _ => None,
        }
    }
}

impl Serialize for Deprecation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Deprecation::No => serializer.serialize_bool(false),
            Deprecation::Yes => serializer.serialize_bool(true),
            Deprecation::Reason(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub caption: Option<String>,
    /// Code lines cut at the marker's column, relative indentation kept
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    /// Text on the @license line itself, e.g. "MIT"
    pub name: Option<String>,
    /// Continuation lines
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespace {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Throw {
    /// Bracketed error type, e.g. `[ValueError]`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

// -- Units ---------------------------------------------------------------------

/// What kind of item a unit documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Module,
    Class,
    #[default]
    Function,
    Property,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Module => "module",
            UnitKind::Class => "class",
            UnitKind::Function => "function",
            UnitKind::Property => "property",
        }
    }
}

/// A documentable item as handed over by the discovery step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Unit {
    pub name: String,
    #[serde(default)]
    pub kind: UnitKind,
    /// Raw doc-comment; `None` when the item has no comment at all
    #[serde(default)]
    pub docstring: Option<String>,
}

/// A unit with its doc-comment parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentedUnit {
    pub name: String,
    pub kind: UnitKind,
    pub docstring: Option<ParsedRecord>,
}

impl DocumentedUnit {
    pub fn is_hidden(&self) -> bool {
        self.docstring.as_ref().is_some_and(ParsedRecord::is_hidden)
    }
}
