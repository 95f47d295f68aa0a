//! Tag vocabulary and the per-tag extractors.
//!
//! Every extractor is the same scan over the line sequence: find lines whose
//! trimmed text matches the tag's [`Marker`], hand each match to a small
//! finisher, then apply the tag's list policy (last-wins, accumulate,
//! accumulate-unique, overwrite-by-name). Continuation text comes from the
//! block accumulator.

use super::block::{collect_block, Reflow, Verbatim};
use super::lines::Lines;
use crate::error::MalformedTagError;
use crate::model::*;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").unwrap());

// -- Vocabulary ---------------------------------------------------------------

/// Every tag the parser recognizes. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Author,
    Copyright,
    Deprecated,
    Example,
    Global,
    Ignore,
    License,
    Memberof,
    Namespace,
    Param,
    Private,
    /// Recognized so tooling does not flag it as unknown, but extracts
    /// nothing: items are public unless `@private` says otherwise.
    Public,
    Returns,
    Since,
    Throws,
    Todo,
    Version,
}

impl Tag {
    pub const ALL: [Tag; 17] = [
        Tag::Author,
        Tag::Copyright,
        Tag::Deprecated,
        Tag::Example,
        Tag::Global,
        Tag::Ignore,
        Tag::License,
        Tag::Memberof,
        Tag::Namespace,
        Tag::Param,
        Tag::Private,
        Tag::Public,
        Tag::Returns,
        Tag::Since,
        Tag::Throws,
        Tag::Todo,
        Tag::Version,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Tag::Author => "@author",
            Tag::Copyright => "@copyright",
            Tag::Deprecated => "@deprecated",
            Tag::Example => "@example",
            Tag::Global => "@global",
            Tag::Ignore => "@ignore",
            Tag::License => "@license",
            Tag::Memberof => "@memberof",
            Tag::Namespace => "@namespace",
            Tag::Param => "@param",
            Tag::Private => "@private",
            Tag::Public => "@public",
            Tag::Returns => "@returns",
            Tag::Since => "@since",
            Tag::Throws => "@throws",
            Tag::Todo => "@todo",
            Tag::Version => "@version",
        }
    }

    pub fn from_token(token: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.token() == token)
    }

    /// How a line is recognized as an occurrence of this tag.
    ///
    /// `@since`, `@version`, `@deprecated`, `@license` and `@example` only
    /// need the keyword as a prefix; the rest need a space after it.
    pub fn marker(self) -> Marker {
        let token = self.token();
        match self {
            Tag::Global | Tag::Ignore | Tag::Private | Tag::Public => Marker::Exact(token),
            Tag::Since | Tag::Version | Tag::Deprecated | Tag::License | Tag::Example => {
                Marker::Bare(token)
            }
            Tag::Author
            | Tag::Copyright
            | Tag::Memberof
            | Tag::Namespace
            | Tag::Param
            | Tag::Returns
            | Tag::Throws
            | Tag::Todo => Marker::Spaced(token),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Line matcher for one tag, applied to the trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The whole line is the token
    Exact(&'static str),
    /// Token followed by a space
    Spaced(&'static str),
    /// Token as a plain prefix
    Bare(&'static str),
}

impl Marker {
    /// The text after the marker, or `None` when the line does not match.
    pub fn strip(self, trimmed: &str) -> Option<&str> {
        match self {
            Marker::Exact(token) => (trimmed == token).then_some(""),
            Marker::Spaced(token) => trimmed.strip_prefix(token)?.strip_prefix(' '),
            Marker::Bare(token) => trimmed.strip_prefix(token),
        }
    }
}

// -- Shared scan --------------------------------------------------------------

/// One matching line: its index and the text after the marker.
#[derive(Debug, Clone, Copy)]
struct Occurrence<'a> {
    line: usize,
    rest: &'a str,
}

/// Run `finish` on every occurrence of `tag`, keeping the `Some` results in
/// line order.
fn harvest<'a, T>(
    lines: &Lines<'a>,
    tag: Tag,
    finish: impl FnMut(Occurrence<'a>) -> Option<T>,
) -> Vec<T> {
    let marker = tag.marker();
    lines
        .iter()
        .filter_map(|(line, raw)| {
            marker
                .strip(raw.trim())
                .map(|rest| Occurrence { line, rest })
        })
        .filter_map(finish)
        .collect()
}

/// `seed` plus the reflowed continuation block after `line`.
fn prose(lines: &Lines<'_>, line: usize, seed: &str) -> Option<String> {
    collect_block(lines, line, Reflow::seeded(seed)).sink.finish()
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Letter or underscore first, then letters, digits or underscores.
pub fn is_identifier(name: &str) -> bool {
    RE_IDENTIFIER.is_match(name)
}

// -- Flags --------------------------------------------------------------------

/// `@global`, `@ignore`, `@private`: an exact line anywhere sets the flag.
pub fn flag(lines: &Lines<'_>, tag: Tag) -> bool {
    !harvest(lines, tag, |_| Some(())).is_empty()
}

// -- Last-wins ----------------------------------------------------------------

/// `@returns`, `@since`, `@version`: text of the final occurrence.
pub fn last_text(lines: &Lines<'_>, tag: Tag) -> Option<String> {
    harvest(lines, tag, |occ| Some(prose(lines, occ.line, occ.rest)))
        .pop()
        .flatten()
}

pub fn deprecated(lines: &Lines<'_>) -> Deprecation {
    match harvest(lines, Tag::Deprecated, |occ| {
        Some(prose(lines, occ.line, occ.rest))
    })
    .pop()
    {
        None => Deprecation::No,
        Some(None) => Deprecation::Yes,
        Some(Some(reason)) => Deprecation::Reason(reason),
    }
}

/// Name from the tag line, text from the continuation block.
pub fn license(lines: &Lines<'_>) -> Option<License> {
    let (name, text) = harvest(lines, Tag::License, |occ| {
        Some((non_empty(occ.rest), prose(lines, occ.line, "")))
    })
    .pop()?;

    if name.is_none() && text.is_none() {
        return None;
    }
    Some(License { name, text })
}

// -- Accumulating -------------------------------------------------------------

/// `@copyright`, `@todo`: one entry per occurrence with text.
pub fn text_list(lines: &Lines<'_>, tag: Tag) -> Vec<String> {
    harvest(lines, tag, |occ| prose(lines, occ.line, occ.rest))
}

/// `name [email]`, first line only.
pub fn authors(lines: &Lines<'_>) -> Vec<Author> {
    harvest(lines, Tag::Author, |occ| Some(parse_author(occ.rest)))
}

fn parse_author(rest: &str) -> Author {
    let brackets = rest.find('[').and_then(|open| {
        rest[open + 1..]
            .find(']')
            .map(|close| (open, open + 1 + close))
    });

    match brackets {
        Some((open, close)) => Author {
            name: non_empty(&rest[..open]),
            email: non_empty(&rest[open + 1..close]),
        },
        None => Author {
            name: non_empty(rest),
            email: None,
        },
    }
}

pub fn memberof(lines: &Lines<'_>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let candidates = harvest(lines, Tag::Memberof, |occ| {
        let name = occ.rest.trim();
        if is_identifier(name) {
            Some(name)
        } else {
            tracing::debug!(line = occ.line, name, "dropping @memberof with invalid name");
            None
        }
    });

    for name in candidates {
        if !names.iter().any(|known| known == name) {
            names.push(name.to_string());
        }
    }
    names
}

pub fn namespaces(lines: &Lines<'_>) -> Vec<Namespace> {
    harvest(lines, Tag::Namespace, |occ| {
        let name = occ.rest.trim();
        if !is_identifier(name) {
            tracing::debug!(line = occ.line, name, "dropping @namespace with invalid name");
            return None;
        }
        Some(Namespace {
            name: name.to_string(),
            description: prose(lines, occ.line, ""),
        })
    })
}

/// Re-declaring a parameter replaces its description but keeps its slot.
pub fn parameters(lines: &Lines<'_>) -> Vec<Parameter> {
    let declared = harvest(lines, Tag::Param, |occ| {
        let rest = occ.rest.trim_start();
        let (name, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        Some((
            name.to_string(),
            prose(lines, occ.line, tail).unwrap_or_default(),
        ))
    });

    let mut params: Vec<Parameter> = Vec::new();
    for (name, description) in declared {
        match params.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.description = description,
            None => params.push(Parameter { name, description }),
        }
    }
    params
}

/// `@throws [Type] description` or `@throws description`.
///
/// An opening `[` right after the marker with no closing `]` leaves the
/// type/description boundary undefined and fails the whole parse.
pub fn throws(lines: &Lines<'_>) -> Result<Vec<Throw>, MalformedTagError> {
    harvest(lines, Tag::Throws, |occ| Some(parse_throw(lines, occ)))
        .into_iter()
        .collect()
}

fn parse_throw(lines: &Lines<'_>, occ: Occurrence<'_>) -> Result<Throw, MalformedTagError> {
    let Some(bracketed) = occ.rest.strip_prefix('[') else {
        return Ok(Throw {
            kind: None,
            description: prose(lines, occ.line, occ.rest),
        });
    };

    let close = bracketed.find(']').ok_or(MalformedTagError {
        tag: Tag::Throws,
        line: occ.line,
        reason: "error type is missing its closing `]`",
    })?;

    Ok(Throw {
        kind: non_empty(&bracketed[..close]),
        description: prose(lines, occ.line, &bracketed[close + 1..]),
    })
}

/// Caption from the tag line; code from the following lines, cut at the
/// column where the marker starts.
pub fn examples(lines: &Lines<'_>) -> Vec<Example> {
    harvest(lines, Tag::Example, |occ| {
        let column = lines
            .get(occ.line)
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();
        let Some(code) = collect_block(lines, occ.line, Verbatim::at_column(column))
            .sink
            .finish()
        else {
            tracing::debug!(line = occ.line, "dropping @example without code");
            return None;
        };
        Some(Example {
            caption: non_empty(occ.rest),
            code,
        })
    })
}
