pub mod parser;
pub mod scanner;

use crate::error::Result;
use crate::{MappingEntries, Value};
use parser::{coerce_scalar, split_key_value};
use scanner::{Depth, ParsedLine, scan_lines};

/// Try to decode TOON text into a value; the top level is always a mapping.
///
/// Malformed input is tolerated by omission rather than rejected: a line
/// without a comma is skipped, a duplicate key overwrites the earlier entry
/// in place, and stray indentation only affects nesting. An error from this
/// function means the decoding process itself faulted, not that the input
/// was unusual.
///
/// # Errors
///
/// Returns an error if an internal fault surfaces during decoding.
pub fn try_decode(input: &str) -> Result<Value> {
    let lines = scan_lines(input);
    let (entries, _) = decode_block(&lines, 0, None);
    Ok(Value::Mapping(entries))
}

/// Decode TOON text into a value.
///
/// # Panics
///
/// Panics if decoding fails. Use [`try_decode`] for a fallible version.
#[must_use]
pub fn decode(input: &str) -> Value {
    try_decode(input).unwrap_or_else(|err| panic!("{err}"))
}

/// Decode one indentation block starting at line index `start`.
///
/// A line whose depth is at or above the parent depth ends the block; the
/// top level has no parent, so every line qualifies there. Returns the
/// block's entries and the index of the first line not consumed.
fn decode_block(
    lines: &[ParsedLine],
    start: usize,
    parent_depth: Option<Depth>,
) -> (MappingEntries, usize) {
    let mut entries = MappingEntries::new();
    let mut index = start;

    while index < lines.len() {
        let line = &lines[index];
        if let Some(parent) = parent_depth {
            if line.depth <= parent {
                break;
            }
        }

        let Some((key, value_text)) = split_key_value(&line.content) else {
            // No comma, no data.
            index += 1;
            continue;
        };

        if value_text.is_empty() {
            // Empty value slot: the children are the following deeper lines.
            let (children, next) = decode_block(lines, index + 1, Some(line.depth));
            assign(&mut entries, key, Value::Mapping(children));
            index = next;
        } else {
            assign(&mut entries, key, coerce_scalar(value_text));
            index += 1;
        }
    }

    (entries, index)
}

// Repeated assignment semantics: the later occurrence wins and keeps the
// original entry position.
fn assign(entries: &mut MappingEntries, key: &str, value: Value) {
    if let Some(slot) = entries.iter_mut().find(|(existing, _)| existing.as_str() == key) {
        slot.1 = value;
    } else {
        entries.push((key.to_string(), value));
    }
}
