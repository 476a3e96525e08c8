//! Whole-document conversion façade: JSON text ⇄ TOON text, plus the
//! file-name plumbing shared by the CLI (extension checks, output naming).

use tracing::debug;

use crate::Value;
use crate::error::{ConvertError, Result};

pub const JSON_EXTENSION: &str = ".json";
pub const TOON_EXTENSION: &str = ".toon";

/// Direction of a whole-document conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    JsonToToon,
    ToonToJson,
}

impl Direction {
    /// Extension expected on the source file for this direction.
    #[must_use]
    pub const fn source_extension(self) -> &'static str {
        match self {
            Self::JsonToToon => JSON_EXTENSION,
            Self::ToonToJson => TOON_EXTENSION,
        }
    }

    /// Extension given to the produced file.
    #[must_use]
    pub const fn target_extension(self) -> &'static str {
        match self {
            Self::JsonToToon => TOON_EXTENSION,
            Self::ToonToJson => JSON_EXTENSION,
        }
    }

    /// Detect a direction from a file name's suffix, case-insensitively.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        if matches_expected_extension(name, Self::JsonToToon) {
            return Some(Self::JsonToToon);
        }
        if matches_expected_extension(name, Self::ToonToJson) {
            return Some(Self::ToonToJson);
        }
        None
    }
}

/// Successful outcome of one conversion: the produced text plus the file
/// name derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub data: String,
    pub file_name: String,
}

/// Convert JSON text to TOON text.
///
/// Encoding itself never fails; once the JSON parses, any value encodes
/// (possibly lossily).
///
/// # Errors
///
/// Returns [`ConvertError::InvalidJson`] when the input is not well-formed
/// JSON.
pub fn json_to_toon(json: &str) -> Result<String> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).map_err(|err| ConvertError::invalid_json(err.to_string()))?;
    let toon = crate::encode::encode(&Value::from(parsed));
    debug!(
        input_bytes = json.len(),
        output_bytes = toon.len(),
        "encoded JSON document as TOON"
    );
    Ok(toon)
}

/// Convert TOON text to pretty-printed JSON text (2-space indent).
///
/// # Errors
///
/// Returns [`ConvertError::InvalidToon`] when the decoding process faults.
/// Most malformed TOON input decodes without error; see
/// [`crate::decode::try_decode`].
pub fn toon_to_json(toon: &str) -> Result<String> {
    let value = crate::decode::try_decode(toon).map_err(|err| match err {
        ConvertError::InvalidToon { .. } => err,
        other => ConvertError::invalid_toon(other.to_string()),
    })?;
    let json = serde_json::to_string_pretty(&serde_json::Value::from(value))
        .map_err(|err| ConvertError::invalid_toon(err.to_string()))?;
    debug!(
        input_bytes = toon.len(),
        output_bytes = json.len(),
        "decoded TOON document as JSON"
    );
    Ok(json)
}

/// Convert named content in the given direction, deriving the output name.
///
/// # Errors
///
/// Propagates the underlying conversion error.
pub fn convert(direction: Direction, content: &str, file_name: &str) -> Result<Conversion> {
    let data = match direction {
        Direction::JsonToToon => json_to_toon(content)?,
        Direction::ToonToJson => toon_to_json(content)?,
    };
    Ok(Conversion {
        data,
        file_name: derive_output_name(file_name, direction),
    })
}

/// Derive the output file name by swapping the source extension for the
/// target extension, matched case-insensitively. A name without the source
/// extension passes through unchanged.
#[must_use]
pub fn derive_output_name(name: &str, direction: Direction) -> String {
    strip_suffix_ignore_ascii_case(name, direction.source_extension()).map_or_else(
        || name.to_string(),
        |stem| format!("{stem}{}", direction.target_extension()),
    )
}

/// Advisory pre-check that a file name's suffix matches the direction's
/// source format. The conversion still validates the content independently.
#[must_use]
pub fn matches_expected_extension(name: &str, direction: Direction) -> bool {
    strip_suffix_ignore_ascii_case(name, direction.source_extension()).is_some()
}

/// Check the file name against the direction, as a hard error.
///
/// # Errors
///
/// Returns [`ConvertError::Validation`] on a suffix mismatch.
pub fn validate_extension(name: &str, direction: Direction) -> Result<()> {
    if matches_expected_extension(name, direction) {
        return Ok(());
    }
    Err(ConvertError::extension_mismatch(
        name,
        direction.source_extension(),
    ))
}

fn strip_suffix_ignore_ascii_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    let tail = name.get(split..)?;
    if tail.eq_ignore_ascii_case(suffix) {
        return Some(&name[..split]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_name() {
        assert_eq!(
            derive_output_name("data.json", Direction::JsonToToon),
            "data.toon"
        );
        assert_eq!(
            derive_output_name("DATA.JSON", Direction::JsonToToon),
            "DATA.toon"
        );
        assert_eq!(
            derive_output_name("notes.toon", Direction::ToonToJson),
            "notes.json"
        );
        assert_eq!(
            derive_output_name("readme.txt", Direction::JsonToToon),
            "readme.txt"
        );
    }

    #[test]
    fn test_direction_detection() {
        assert_eq!(
            Direction::from_file_name("a.json"),
            Some(Direction::JsonToToon)
        );
        assert_eq!(
            Direction::from_file_name("a.TOON"),
            Some(Direction::ToonToJson)
        );
        assert_eq!(Direction::from_file_name("a.txt"), None);
    }
}
