//! Description extractor: the untagged text before the first tag.

use super::block::Reflow;
use super::lines::Lines;

/// Reflow every line before the first tag-start line into paragraphs.
///
/// Besides the usual paragraph joining, three list markers put their line
/// on a fresh line: `- item` (kept verbatim), `<ul>item` (becomes
/// `- item`) and `<ol>item` (marker dropped, numbering is up to the author).
pub fn extract(lines: &Lines<'_>) -> Option<String> {
    let end = lines.first_tag_start();
    let mut text = Reflow::default();

    for (_, line) in lines.iter().take(end) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            text.paragraph_break();
        } else if trimmed.starts_with("- ") {
            text.start_line(trimmed);
        } else if let Some(item) = trimmed.strip_prefix("<ul>") {
            text.start_line(&format!("- {}", item));
        } else if let Some(item) = trimmed.strip_prefix("<ol>") {
            text.start_line(item);
        } else {
            text.push_words(trimmed);
        }
    }

    text.finish()
}
