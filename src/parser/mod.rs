//! Doc-comment parser: one pass of each extractor over the same lines.

pub mod block;
pub mod description;
pub mod lines;
pub mod tags;

pub use tags::Tag;

use crate::error::MalformedTagError;
use crate::model::ParsedRecord;
use lines::Lines;

/// Parse an optional doc-comment.
///
/// `None` means the item had no comment at all and yields `Ok(None)`
/// without running any extractor.
pub fn parse_docstring(docstring: Option<&str>) -> Result<Option<ParsedRecord>, MalformedTagError> {
    match docstring {
        Some(doc) => parse(doc).map(Some),
        None => Ok(None),
    }
}

/// Parse a doc-comment into a record.
pub fn parse(doc: &str) -> Result<ParsedRecord, MalformedTagError> {
    let lines = Lines::new(doc);
    tracing::trace!(lines = lines.len(), "parsing doc-comment");

    Ok(ParsedRecord {
        description: description::extract(&lines),
        author: tags::authors(&lines),
        copyright: tags::text_list(&lines, Tag::Copyright),
        deprecated: tags::deprecated(&lines),
        examples: tags::examples(&lines),
        global: tags::flag(&lines, Tag::Global),
        ignore: tags::flag(&lines, Tag::Ignore),
        license: tags::license(&lines),
        memberof: tags::memberof(&lines),
        namespaces: tags::namespaces(&lines),
        parameters: tags::parameters(&lines),
        private: tags::flag(&lines, Tag::Private),
        returns: tags::last_text(&lines, Tag::Returns),
        since: tags::last_text(&lines, Tag::Since),
        throws: tags::throws(&lines)?,
        todo: tags::text_list(&lines, Tag::Todo),
        version: tags::last_text(&lines, Tag::Version),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_comment_is_none() {
        assert_eq!(parse_docstring(None), Ok(None));
    }

    #[test]
    fn empty_comment_is_default_record() {
        assert_eq!(parse_docstring(Some("")), Ok(Some(ParsedRecord::default())));
        assert_eq!(parse("  \n\t\n").unwrap(), ParsedRecord::default());
    }

    #[test]
    fn full_comment() {
        let doc = "
            Adds two numbers.

            Works for ints only.

            @param a first operand
            @param b second operand
                spanning two lines
            @returns the sum
            @throws [OverflowError] when it does not fit
            @since 1.2
            @author Jane Roe [jane@example.com]
            @example Simple use
            add(1, 2)
        ";
        let record = parse(doc).unwrap();

        assert_eq!(
            record.description.as_deref(),
            Some("Adds two numbers.\nWorks for ints only.")
        );
        assert_eq!(
            record.parameters,
            vec![
                Parameter {
                    name: "a".into(),
                    description: "first operand".into(),
                },
                Parameter {
                    name: "b".into(),
                    description: "second operand spanning two lines".into(),
                },
            ]
        );
        assert_eq!(record.returns.as_deref(), Some("the sum"));
        assert_eq!(
            record.throws,
            vec![Throw {
                kind: Some("OverflowError".into()),
                description: Some("when it does not fit".into()),
            }]
        );
        assert_eq!(record.since.as_deref(), Some("1.2"));
        assert_eq!(
            record.author,
            vec![Author {
                name: Some("Jane Roe".into()),
                email: Some("jane@example.com".into()),
            }]
        );
        assert_eq!(
            record.examples,
            vec![Example {
                caption: Some("Simple use".into()),
                code: "add(1, 2)".into(),
            }]
        );
    }

    #[test]
    fn malformed_throws_fails_whole_parse() {
        let err = parse("Fine.\n@param x ok\n@throws [Oops").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(
            err.to_string(),
            "malformed @throws tag on line 2: error type is missing its closing `]`"
        );
    }
}
