//! Block accumulator for the continuation lines that follow a tag.
//!
//! A block runs from the line after a tag-start line up to (not including)
//! the next tag-start line or the end of input. What happens to each line
//! is decided by a [`Sink`]: [`Reflow`] joins prose into paragraphs,
//! [`Verbatim`] keeps code lines as they are.

use super::lines::{is_tag_start, Lines};

/// Receives the continuation lines of one block.
pub trait Sink {
    fn push_line(&mut self, line: &str);
}

/// One harvested block: the filled sink and the index where scanning stopped.
#[derive(Debug)]
pub struct Block<S> {
    pub sink: S,
    pub end: usize,
}

/// Feed every continuation line after `start` into `sink`.
pub fn collect_block<S: Sink>(lines: &Lines<'_>, start: usize, mut sink: S) -> Block<S> {
    let mut end = start + 1;
    while end < lines.len() && !is_tag_start(lines.get(end)) {
        sink.push_line(lines.get(end));
        end += 1;
    }
    tracing::trace!(start, end, "collected block");
    Block { sink, end }
}

// -- Reflow -------------------------------------------------------------------

/// Paragraph joiner: consecutive lines become one sentence run, each blank
/// line after some text adds one `\n`.
#[derive(Debug, Default, Clone)]
pub struct Reflow {
    text: String,
}

impl Reflow {
    /// Start a block with the text found on the tag line itself.
    pub fn seeded(seed: &str) -> Self {
        Reflow {
            text: seed.trim().to_string(),
        }
    }

    /// Blank line: one `\n` per blank line, never leading.
    pub fn paragraph_break(&mut self) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
    }

    /// Continue the current paragraph with `words`.
    pub fn push_words(&mut self, words: &str) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push(' ');
        }
        self.text.push_str(words);
    }

    /// Put `content` on a line of its own (list items). Never doubles a
    /// break that is already there.
    pub fn start_line(&mut self, content: &str) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(content);
    }

    /// Trimmed text, `None` when nothing but whitespace was collected.
    pub fn finish(self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl Sink for Reflow {
    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.paragraph_break();
        } else {
            self.push_words(trimmed);
        }
    }
}

// -- Verbatim -----------------------------------------------------------------

/// Code collector: every line is cut at a fixed column and kept as-is.
#[derive(Debug, Clone)]
pub struct Verbatim {
    column: usize,
    code: String,
}

impl Verbatim {
    /// `column` counts characters; anything left of it is dropped.
    pub fn at_column(column: usize) -> Self {
        Verbatim {
            column,
            code: String::new(),
        }
    }

    /// Code without leading blank lines or trailing whitespace; `None` when
    /// only whitespace was collected.
    pub fn finish(self) -> Option<String> {
        let body = self.code.trim_end();
        if body.trim().is_empty() {
            return None;
        }
        let mut offset = 0;
        for line in body.split('\n') {
            if !line.trim().is_empty() {
                break;
            }
            offset += line.len() + 1;
        }
        Some(body[offset..].to_string())
    }
}

impl Sink for Verbatim {
    fn push_line(&mut self, line: &str) {
        self.code.push_str(cut_at_column(line, self.column));
        self.code.push('\n');
    }
}

/// Drop the first `column` characters of `line`.
fn cut_at_column(line: &str, column: usize) -> &str {
    match line.char_indices().nth(column) {
        Some((pos, _)) => &line[pos..],
        None => "",
    }
}
