//! Row normalization.
//!
//! One interpreter handles all three datasets, driven by the field tables
//! in [`crate::schema`]. A raw row (header -> raw string) becomes a
//! normalized JSON object whose keys follow the schema's field order.
//!
//! Pure functions of their input; no I/O happens here.

use serde_json::{Map, Value};

use crate::error::{TransformError, TransformResult};
use crate::schema::{FieldKind, RecordSchema};

/// Normalize one raw row against a schema.
///
/// Field handling per [`FieldKind`]:
/// - `Text`: lookup (absent -> `""`), trim.
/// - `List`: lookup, split on comma, trim pieces, drop empty pieces.
/// - `Integer`: lookup, trim; empty -> `0`; otherwise base-10 parse,
///   failing with [`TransformError::InvalidNumber`] on non-numeric text.
pub fn normalize_row(row: &Value, schema: &RecordSchema) -> TransformResult<Value> {
    let empty = Map::new();
    let raw = row.as_object().unwrap_or(&empty);

    let mut output = Map::new();

    for spec in schema.fields {
        let value = raw
            .get(spec.name)
            .and_then(Value::as_str)
            .unwrap_or("");

        let normalized = match spec.kind {
            FieldKind::Text => Value::String(value.trim().to_string()),
            FieldKind::List => split_list(value),
            FieldKind::Integer => parse_integer(value, spec.name)?,
        };

        output.insert(spec.name.to_string(), normalized);
    }

    Ok(Value::Object(output))
}

/// Split a comma-separated field into a JSON array.
///
/// Pieces are trimmed and empty pieces dropped, so `"a, b ,,c"` yields
/// `["a", "b", "c"]` and an empty field yields `[]`.
fn split_list(value: &str) -> Value {
    let parts: Vec<Value> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| Value::String(p.to_string()))
        .collect();

    Value::Array(parts)
}

/// Coerce a raw field to an integer. Empty text counts as zero.
fn parse_integer(value: &str, field: &str) -> TransformResult<Value> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Ok(Value::Number(0.into()));
    }

    trimmed
        .parse::<i64>()
        .map(|n| Value::Number(n.into()))
        .map_err(|_| TransformError::InvalidNumber {
            field: field.to_string(),
            value: trimmed.to_string(),
        })
}
