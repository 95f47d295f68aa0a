//! GitHub-flavored markdown renderer.
//!
//! One page per unit listing: an index of the visible units, then one
//! `###` block per unit built from its parsed record.

use crate::model::*;
use crate::render::{RenderOptions, Renderer};
use crate::toc::{self, Anchors};
use anyhow::Result;

const INDEX_HEADING: &str = "Index";

pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        MarkdownRenderer { options }
    }

    fn is_visible(&self, unit: &DocumentedUnit) -> bool {
        self.options.show_private || !unit.is_hidden()
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, units: &[DocumentedUnit]) -> Result<String> {
        let mut output = String::new();

        let visible: Vec<&DocumentedUnit> = units.iter().filter(|u| self.is_visible(u)).collect();
        if visible.is_empty() {
            return Ok(output);
        }

        // Anchors follow page order, so the index heading and every
        // section heading above a unit take their slug first.
        let mut anchors = Anchors::default();
        anchors.anchor_for(INDEX_HEADING);

        let mut index = String::new();
        let mut blocks = String::new();
        for unit in &visible {
            let slug = anchors.anchor_for(&unit.name);
            index.push_str(&toc::render_toc_item(&unit.name, &slug));
            index.push('\n');
            blocks.push_str(&self.render_unit(unit, &mut anchors));
            blocks.push('\n');
        }

        output.push_str(&format!("## {}\n\n", INDEX_HEADING));
        output.push_str(&index);
        output.push('\n');
        output.push_str(&blocks);

        Ok(output)
    }

    fn render_record(&self, record: &ParsedRecord) -> Result<String> {
        Ok(self.render_body(record, &mut Anchors::default()))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

impl MarkdownRenderer {
    fn render_unit(&self, unit: &DocumentedUnit, anchors: &mut Anchors) -> String {
        let mut out = format!("### {}\n\n_{}_\n\n", unit.name, unit.kind.as_str());
        if let Some(ref record) = unit.docstring {
            out.push_str(&self.render_body(record, anchors));
        }
        out
    }

    /// Every section of a record; empty sections are skipped. Section
    /// headings are registered with `anchors` as they are written.
    fn render_body(&self, record: &ParsedRecord, anchors: &mut Anchors) -> String {
        let mut lines: Vec<String> = Vec::new();

        if let Some(notice) = deprecation_notice(&record.deprecated) {
            lines.push(notice);
            lines.push(String::new());
        }

        if let Some(ref desc) = record.description {
            lines.push(blockquote(desc));
            lines.push(String::new());
        }

        if !record.parameters.is_empty() {
            lines.push("|Parameter |Description |".to_string());
            lines.push("|---|---|".to_string());
            for param in &record.parameters {
                lines.push(format!(
                    "|`{}` |{} |",
                    escape_cell(&param.name),
                    escape_cell(&param.description)
                ));
            }
            lines.push(String::new());
        }

        if let Some(ref returns) = record.returns {
            lines.push(format!("**Returns**: {}", returns));
            lines.push(String::new());
        }

        if !record.throws.is_empty() {
            let items: Vec<String> = record.throws.iter().map(render_throw).collect();
            render_list(&mut lines, anchors, "Throws", &items);
        }

        if !record.examples.is_empty() {
            push_heading(&mut lines, anchors, "Examples");
            for example in &record.examples {
                if let Some(ref caption) = example.caption {
                    lines.push(caption.clone());
                    lines.push(String::new());
                }
                lines.push(format!("```{}", self.options.code_lang));
                lines.push(example.code.clone());
                lines.push("```".to_string());
                lines.push(String::new());
            }
        }

        let mut stamps = Vec::new();
        if let Some(ref since) = record.since {
            stamps.push(format!("**Since**: {}", since));
        }
        if let Some(ref version) = record.version {
            stamps.push(format!("**Version**: {}", version));
        }
        if !stamps.is_empty() {
            lines.push(stamps.join("  \n"));
            lines.push(String::new());
        }

        if !record.author.is_empty() {
            let items: Vec<String> = record.author.iter().filter_map(render_author).collect();
            render_list(&mut lines, anchors, "Authors", &items);
        }

        if !record.copyright.is_empty() {
            render_list(&mut lines, anchors, "Copyright", &record.copyright);
        }

        if let Some(ref license) = record.license {
            push_heading(&mut lines, anchors, "License");
            if let Some(ref name) = license.name {
                lines.push(format!("**{}**", name));
                lines.push(String::new());
            }
            if let Some(ref text) = license.text {
                lines.push(text.replace('\n', "\n\n"));
                lines.push(String::new());
            }
        }

        if !record.todo.is_empty() {
            render_list(&mut lines, anchors, "Todo", &record.todo);
        }

        if !record.namespaces.is_empty() {
            let items: Vec<String> = record
                .namespaces
                .iter()
                .map(|ns| match ns.description {
                    Some(ref desc) => format!("`{}`: {}", ns.name, desc),
                    None => format!("`{}`", ns.name),
                })
                .collect();
            render_list(&mut lines, anchors, "Namespaces", &items);
        }

        if !record.memberof.is_empty() || record.global {
            let mut scope: Vec<String> = record
                .memberof
                .iter()
                .map(|name| format!("`{}`", name))
                .collect();
            if record.global {
                scope.push("global scope".to_string());
            }
            lines.push(format!("_Member of: {}_", scope.join(", ")));
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn push_heading(lines: &mut Vec<String>, anchors: &mut Anchors, title: &str) {
    anchors.anchor_for(title);
    lines.push(format!("#### {}\n", title));
}

/// Render a `#### title` section as a bullet list.
fn render_list(lines: &mut Vec<String>, anchors: &mut Anchors, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    push_heading(lines, anchors, title);
    for item in items {
        let indented = item.replace('\n', "\n  ");
        lines.push(format!("* {}", indented));
    }
    lines.push(String::new());
}

fn deprecation_notice(deprecated: &Deprecation) -> Option<String> {
    if !deprecated.is_deprecated() {
        return None;
    }
    Some(match deprecated.reason() {
        Some(reason) => format!("***DEPRECATED: {}***", reason),
        None => "***NOTE: THIS IS DEPRECATED***".to_string(),
    })
}

/// Paragraph breaks become empty quote lines.
fn blockquote(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n>\n")
}

/// `Type`: description
fn render_throw(throw: &Throw) -> String {
    match (&throw.kind, &throw.description) {
        (Some(kind), Some(desc)) => format!("`{}`: {}", kind, desc),
        (Some(kind), None) => format!("`{}`", kind),
        (None, Some(desc)) => desc.clone(),
        (None, None) => String::new(),
    }
}

/// name <email>
fn render_author(author: &Author) -> Option<String> {
    match (&author.name, &author.email) {
        (Some(name), Some(email)) => Some(format!("{} <{}>", name, email)),
        (Some(name), None) => Some(name.clone()),
        (None, Some(email)) => Some(format!("<{}>", email)),
        (None, None) => None,
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
