#![forbid(unsafe_code)]

//! Convert between JSON text and line-oriented TOON notation.
//!
//! TOON documents are sequences of `key,value` lines nested by two-space
//! indentation. The format carries no string quoting and no escaping; see
//! [`encode`] and [`try_decode`] for the exact (and deliberately lossy)
//! rules.

pub mod cli;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod shared;

pub use convert::{Conversion, Direction};
pub use decode::{decode, try_decode};
pub use encode::{encode, encode_lines};

/// Convenience wrapper: parse JSON text and encode to TOON.
///
/// For lower-level control, parse JSON yourself and call [`encode()`].
///
/// # Errors
/// Returns an error if the JSON input is invalid.
pub fn json_to_toon(json: &str) -> crate::error::Result<String> {
    convert::json_to_toon(json)
}

/// Convenience wrapper: decode TOON text and return pretty-printed JSON.
///
/// For lower-level control, call [`try_decode`] and handle [`Value`] directly.
///
/// # Errors
/// Returns an error if the TOON input cannot be decoded.
pub fn toon_to_json(toon: &str) -> crate::error::Result<String> {
    convert::toon_to_json(toon)
}

pub type MappingEntries = Vec<(String, Value)>;

/// In-memory form of a JSON-compatible document.
///
/// Mappings keep insertion order and hold at most one entry per key, so
/// re-encoding a decoded document is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(MappingEntries),
}

impl Value {
    /// Build a number value, normalizing non-finite doubles to `Null` so
    /// every held `Number` stays representable in JSON.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::Null;
        }
        if value == 0.0 {
            return Self::Number(0.0);
        }
        Self::Number(value)
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_)
        )
    }

    /// Look up a mapping entry by key. Returns `None` for non-mappings.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Sequence(value)
    }
}

impl From<MappingEntries> for Value {
    fn from(value: MappingEntries) -> Self {
        Self::Mapping(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Bool(value),
            serde_json::Value::Number(value) => {
                let number = value
                    .as_f64()
                    .unwrap_or_else(|| value.to_string().parse::<f64>().unwrap_or(f64::NAN));
                Self::from_f64(number)
            }
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(values) => {
                Self::Sequence(values.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    entries.push((key, Self::from(value)));
                }
                Self::Mapping(entries)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(value) => number_to_json(value),
            Value::String(value) => Self::String(value),
            Value::Sequence(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Mapping(entries) => {
                let mut map = serde_json::Map::new();
                for (key, val) in entries {
                    map.insert(key, Self::from(val));
                }
                Self::Object(map)
            }
        }
    }
}

// Integral doubles render as JSON integers (`1`, not `1.0`), matching the
// number-to-string rule of the JSON boundary.
#[allow(clippy::cast_possible_truncation)]
fn number_to_json(value: f64) -> serde_json::Value {
    const SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= SAFE_INTEGER {
        return serde_json::Value::Number(serde_json::Number::from(value as i64));
    }
    serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
