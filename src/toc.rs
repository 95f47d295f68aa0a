//! GitHub-flavored markdown anchors for the page index.

use std::collections::HashMap;

/// GitHub heading anchor slug.
///
/// - lowercase
/// - drop every char that isn't alphanumeric, space, underscore or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Hands out unique anchors the way GitHub numbers repeated headings:
/// `name`, `name-1`, `name-2`, ...
#[derive(Debug, Default)]
pub struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    pub fn anchor_for(&mut self, heading: &str) -> String {
        let slug = github_slug(heading);
        let count = self.seen.entry(slug.clone()).or_insert(0);
        let anchor = if *count == 0 {
            slug
        } else {
            format!("{}-{}", slug, count)
        };
        *count += 1;
        anchor
    }
}

/// Generate a TOC list item pointing at `anchor`.
pub fn render_toc_item(title: &str, anchor: &str) -> String {
    format!("* [{}](#{})", title, anchor)
}
