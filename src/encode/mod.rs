pub mod primitives;

use crate::Value;
use crate::encode::primitives::number_text;
use crate::shared::constants::{COMMA, INDENT_WIDTH};

/// Encode a value as TOON text.
///
/// Pure and total: every value encodes, possibly lossily. `Null` values and
/// empty (or all-null) collections leave no trace in the output, and strings
/// are written verbatim with no quoting or escaping, so a string holding a
/// newline is not round-trip safe.
#[must_use]
pub fn encode(value: &Value) -> String {
    encode_at(value, 0)
}

/// Encode a value as individual TOON lines.
#[must_use]
pub fn encode_lines(value: &Value) -> Vec<String> {
    let text = encode_at(value, 0);
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(ToString::to_string).collect()
}

fn encode_at(value: &Value, indent: usize) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => number_text(*value),
        Value::String(value) => value.clone(),
        Value::Sequence(items) => encode_sequence(items, indent),
        Value::Mapping(entries) => encode_mapping(entries, indent),
    }
}

fn encode_sequence(items: &[Value], indent: usize) -> String {
    let mut lines = Vec::new();
    for item in items {
        let encoded = encode_at(item, indent + 1);
        if !encoded.is_empty() {
            lines.push(format!("{}{encoded}", padding(indent + 1)));
        }
    }
    lines.join("\n")
}

fn encode_mapping(entries: &[(String, Value)], indent: usize) -> String {
    let mut lines = Vec::new();
    for (key, value) in entries {
        match value {
            // Nulls are unrepresentable: the whole key is dropped.
            Value::Null => {}
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                let scalar = encode_at(value, indent);
                lines.push(format!("{}{key}{COMMA}{scalar}", padding(indent)));
            }
            Value::Sequence(_) | Value::Mapping(_) => {
                // Empty value slot signals that children follow.
                lines.push(format!("{}{key}{COMMA}", padding(indent)));
                let children = encode_at(value, indent + 1);
                if !children.is_empty() {
                    lines.push(children);
                }
            }
        }
    }
    lines.join("\n")
}

fn padding(indent: usize) -> String {
    " ".repeat(INDENT_WIDTH * indent)
}
