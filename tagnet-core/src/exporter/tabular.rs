//! Tab-separated table rendering.
//!
//! The header is the key columns followed by the field names of the first
//! entry's serialized value, in declaration order. Every entry of a map has
//! the same value type, so the header fits every row.
//!
//! Cells are not quoted. Tabs and line breaks inside a cell become spaces,
//! which keeps the column count but can make two keys that differ only in
//! those characters render identically. [`Corpus`](crate::Corpus) loading
//! rejects such labels, so only posts or maps built in memory can hit this.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{GraphError, Result};
use crate::types::{EdgeKey, NodeKey};

/// Map keys that render as one or more leading columns.
pub trait KeyColumns {
    /// Header names of the key columns.
    const HEADERS: &'static [&'static str];
    /// What one row describes, for error messages.
    const ENTITY: &'static str;

    fn columns(&self) -> Vec<&str>;
}

impl KeyColumns for EdgeKey {
    const HEADERS: &'static [&'static str] = &["source", "target"];
    const ENTITY: &'static str = "edge";

    fn columns(&self) -> Vec<&str> {
        vec![self.source.as_str(), self.target.as_str()]
    }
}

impl KeyColumns for NodeKey {
    const HEADERS: &'static [&'static str] = &["node"];
    const ENTITY: &'static str = "attribute";

    fn columns(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

/// Render a keyed map as a tab-separated table, one row per entry.
pub fn render<K, V>(map: &BTreeMap<K, V>) -> Result<String>
where
    K: KeyColumns,
    V: Serialize,
{
    let first = map
        .values()
        .next()
        .ok_or(GraphError::EmptyMapError { relation: K::ENTITY })?;
    let fields = field_names(&serde_json::to_value(first)?);

    let mut output = K::HEADERS
        .iter()
        .copied()
        .chain(fields.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\t");
    output.push('\n');

    for (key, value) in map {
        let value = serde_json::to_value(value)?;
        let mut row: Vec<String> = key.columns().into_iter().map(escape_value).collect();
        match &value {
            Value::Object(obj) => row.extend(
                fields
                    .iter()
                    .map(|f| obj.get(f).map(value_to_cell).unwrap_or_default()),
            ),
            other => row.push(value_to_cell(other)),
        }
        output.push_str(&row.join("\t"));
        output.push('\n');
    }

    Ok(output)
}

fn field_names(value: &Value) -> Vec<String> {
    match value {
        Value::Object(obj) => obj.keys().cloned().collect(),
        _ => vec!["value".to_string()],
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => escape_value(s),
        other => escape_value(&other.to_string()),
    }
}

/// Replace characters that would break the row structure.
fn escape_value(s: &str) -> String {
    s.replace(['\t', '\r', '\n'], " ")
}
