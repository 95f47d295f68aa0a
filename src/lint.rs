//! Unknown-tag detection.
//!
//! The parser ignores tags it does not know; this lists them so a caller can
//! warn about typos like `@parm`.

use crate::parser::lines::{is_tag_start, Lines};
use crate::parser::Tag;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownTag {
    /// Zero-based line index
    pub line: usize,
    pub token: String,
}

/// Tag-start lines that no extractor would pick up and whose leading token
/// is not in the vocabulary either.
///
/// A line counts as known when some tag's marker accepts it, the same test
/// the parser applies, so `@sinceX` (bare `@since` prefix) is not reported.
/// A bare known token such as `@param` with nothing after it is not reported
/// either.
pub fn unknown_tags(doc: &str) -> Vec<UnknownTag> {
    Lines::new(doc)
        .iter()
        .filter(|(_, line)| is_tag_start(line))
        .filter_map(|(line, raw)| {
            let trimmed = raw.trim();
            let token = trimmed.split_whitespace().next().unwrap_or_default();
            let known = Tag::from_token(token).is_some()
                || Tag::ALL
                    .into_iter()
                    .any(|tag| tag.marker().strip(trimmed).is_some());
            if known {
                return None;
            }
            Some(UnknownTag {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}
