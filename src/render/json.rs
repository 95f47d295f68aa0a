//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the model as-is, so `deprecated` comes out as `false`, `true`
//! or the reason text and each throw carries a `type` key. Every unit is
//! emitted; `private` and `ignore` stay visible as record fields.

use crate::model::{DocumentedUnit, ParsedRecord};
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, units: &[DocumentedUnit]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(units).context("serializing units")?;
        out.push('\n');
        Ok(out)
    }

    fn render_record(&self, record: &ParsedRecord) -> Result<String> {
        let mut out = serde_json::to_string_pretty(record).context("serializing record")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UnitKind;
    use crate::parse;
    use serde_json::Value;

    #[test]
    fn record_shape() {
        let record = parse("Hi.\n@deprecated use other\n@throws [E] bad").unwrap();
        let out = JsonRenderer.render_record(&record).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["description"], "Hi.");
        assert_eq!(value["deprecated"], "use other");
        assert_eq!(value["throws"][0]["type"], "E");
        assert_eq!(value["throws"][0]["description"], "bad");
        assert_eq!(value["parameters"], Value::Array(vec![]));
        assert_eq!(value["license"], Value::Null);
    }

    #[test]
    fn every_unit_is_emitted() {
        let units = vec![
            DocumentedUnit {
                name: "shown".into(),
                kind: UnitKind::Function,
                docstring: None,
            },
            DocumentedUnit {
                name: "secret".into(),
                kind: UnitKind::Function,
                docstring: Some(parse("@private").unwrap()),
            },
        ];

        let out = JsonRenderer.render(&units).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["name"], "shown");
        assert_eq!(value[0]["kind"], "function");
        assert_eq!(value[0]["docstring"], Value::Null);
        assert_eq!(value[1]["docstring"]["private"], true);
    }
}
