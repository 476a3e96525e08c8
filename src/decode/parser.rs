use crate::Value;
use crate::shared::constants::{COMMA, FALSE_LITERAL, TRUE_LITERAL};
use crate::shared::literal_utils::{is_boolean_or_null_literal, is_numeric_literal};

/// Split line content at the first comma into `(key, value-text)`, both
/// trimmed. `None` means the line carries no comma and therefore no data.
#[must_use]
pub fn split_key_value(content: &str) -> Option<(&str, &str)> {
    let (key, value) = content.split_once(COMMA)?;
    Some((key.trim(), value.trim()))
}

/// Coerce non-empty scalar value text.
///
/// Keyword check is case-insensitive and runs before the numeric parse;
/// anything that is neither a keyword nor a full numeric literal stays the
/// literal text unchanged. The encoder never applied quoting, so no
/// unescaping happens here.
#[must_use]
pub fn coerce_scalar(text: &str) -> Value {
    if is_boolean_or_null_literal(text) {
        return match text.to_ascii_lowercase().as_str() {
            TRUE_LITERAL => Value::Bool(true),
            FALSE_LITERAL => Value::Bool(false),
            _ => Value::Null,
        };
    }

    if is_numeric_literal(text) {
        let parsed = text.parse::<f64>().unwrap_or(f64::NAN);
        return Value::from_f64(parsed);
    }

    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_first_comma() {
        assert_eq!(split_key_value("a,b,c"), Some(("a", "b,c")));
        assert_eq!(split_key_value("key , value "), Some(("key", "value")));
        assert_eq!(split_key_value("no comma here"), None);
    }

    #[test]
    fn test_coerce_keywords_case_insensitive() {
        assert_eq!(coerce_scalar("TRUE"), Value::Bool(true));
        assert_eq!(coerce_scalar("False"), Value::Bool(false));
        assert_eq!(coerce_scalar("Null"), Value::Null);
    }

    #[test]
    fn test_coerce_numbers_and_strings() {
        assert_eq!(coerce_scalar("42"), Value::Number(42.0));
        assert_eq!(coerce_scalar("3.14"), Value::Number(3.14));
        assert_eq!(coerce_scalar("42abc"), Value::String("42abc".to_string()));
        assert_eq!(coerce_scalar("-0"), Value::Number(0.0));
    }
}
