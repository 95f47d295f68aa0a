//! Line classifier: splits a doc-comment and spots tag-start lines.

/// The doc-comment split into raw lines, addressed by index.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Lines<'a> {
    pub fn new(doc: &'a str) -> Self {
        Lines {
            lines: split_lines(doc),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Raw line at `index`, untrimmed.
    pub fn get(&self, index: usize) -> &'a str {
        self.lines[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines.iter().copied().enumerate()
    }

    /// Index of the first tag-start line, or `len()` when there is none.
    pub fn first_tag_start(&self) -> usize {
        self.lines
            .iter()
            .position(|line| is_tag_start(line))
            .unwrap_or(self.lines.len())
    }
}

/// True when the trimmed line begins with `@`.
///
/// Malformed or unknown tags count too: `@memberofFoo` still ends whatever
/// block came before it.
pub fn is_tag_start(line: &str) -> bool {
    line.trim().starts_with('@')
}

/// Line boundaries: `\n`, `\r\n` and a lone `\r`, plus the other Unicode
/// separators (vertical tab, form feed, the information separators
/// `\x1c`-`\x1e`, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR).
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line boundary. A trailing break does not produce an
/// extra empty line.
fn split_lines(doc: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = doc;
    while !rest.is_empty() {
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((pos, c)) => {
                lines.push(&rest[..pos]);
                let width = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[pos + width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
