//! JSON reading and writing for record sets

use crate::error::{RosterError, RosterResult};
use crate::types::{Record, RecordSet};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a JSON array of objects into records.
///
/// Any non-object entry rejects the whole input; no partial result is returned.
pub fn parse_records(text: &str) -> RosterResult<RecordSet> {
    // Byte order mark written by some Windows editors
    let text = text.trim_start_matches('\u{FEFF}');
    let value: Value =
        serde_json::from_str(text).map_err(|e| RosterError::MalformedJson(e.to_string()))?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(RosterError::MalformedJson(format!(
                "expected an array of objects, found {}",
                kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(key, value)| (key, value_text(value)))
                .collect::<Record>()),
            other => Err(RosterError::MalformedJson(format!(
                "entry {} is {}, expected an object",
                index,
                kind(&other)
            ))),
        })
        .collect()
}

/// Load records from a JSON file; undecodable content is malformed input, not an IO error
pub fn load_records(path: &Path) -> RosterResult<RecordSet> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        RosterError::MalformedJson(format!("{} is not valid UTF-8: {}", path.display(), e))
    })?;
    parse_records(&text)
}

/// Serialize records as a JSON array with 4-space indentation
pub fn to_json_string(records: &[Record]) -> RosterResult<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| RosterError::Export(e.to_string()))
}

/// Write records to `path` as indented JSON
pub fn write_records(path: &Path, records: &[Record]) -> RosterResult<()> {
    fs::write(path, to_json_string(records)?)?;
    Ok(())
}

/// Text form of a JSON value inside a record
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
