//! Unit pipeline: parse the doc-comment of every discovered item.

use crate::error::UnitError;
use crate::model::{DocumentedUnit, Unit};
use crate::parser::parse_docstring;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Many(Vec<Unit>),
    One(Unit),
}

/// Read a unit listing: either a JSON array of units or a single unit.
pub fn load_units(json: &str) -> Result<Vec<Unit>, UnitError> {
    let units = match serde_json::from_str::<Listing>(json)? {
        Listing::Many(units) => units,
        Listing::One(unit) => vec![unit],
    };
    tracing::debug!(count = units.len(), "loaded units");
    Ok(units)
}

/// Parse each unit independently. A unit whose doc-comment is malformed is
/// logged and left out; the rest still come through in order.
pub fn document_units(units: &[Unit]) -> Vec<DocumentedUnit> {
    units
        .iter()
        .filter_map(|unit| match parse_docstring(unit.docstring.as_deref()) {
            Ok(docstring) => Some(DocumentedUnit {
                name: unit.name.clone(),
                kind: unit.kind,
                docstring,
            }),
            Err(err) => {
                tracing::warn!(unit = %unit.name, %err, "skipping unit");
                None
            }
        })
        .collect()
}
