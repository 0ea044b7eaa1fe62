//! Natural-type parsing of option values.
//!
//! Option values reach the loader as strings (env vars, command-line flags).
//! [`parse_primitive`] turns them into the scalar they spell out so that
//! `DOTENV_CONFIG_SILENT=false` and `--silent=FALSE` both mean boolean `false`.

use std::fmt;

/// A scalar parsed from an option string.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Empty input or the literal `undefined`.
    Undefined,
    Null,
    Bool(bool),
    /// Any number, including NaN from the literal `nan`.
    Number(f64),
    String(String),
}

impl Primitive {
    /// Convert to a TOML value for an option layer. `Undefined` and `Null`
    /// carry no value, so the option falls through to the layer below.
    pub fn to_toml(&self) -> Option<toml::Value> {
        match self {
            Primitive::Undefined | Primitive::Null => None,
            Primitive::Bool(b) => Some(toml::Value::Boolean(*b)),
            Primitive::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                Some(toml::Value::Integer(*n as i64))
            }
            Primitive::Number(n) => Some(toml::Value::Float(*n)),
            Primitive::String(s) => Some(toml::Value::String(s.clone())),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Undefined => f.write_str("undefined"),
            Primitive::Null => f.write_str("null"),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) if n.is_nan() => f.write_str("NaN"),
            Primitive::Number(n) => write!(f, "{n}"),
            Primitive::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Primitive::Number(n as f64)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        parse_primitive(s)
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        parse_primitive(&s)
    }
}

impl<T: Into<Primitive>> From<Option<T>> for Primitive {
    fn from(value: Option<T>) -> Self {
        value.map_or(Primitive::Undefined, Into::into)
    }
}

/// Parse a string into the scalar it spells out.
///
/// Keywords are matched case-insensitively after trimming whitespace and one
/// layer of matching quotes: `undefined` (or empty), `null`, `nan`,
/// `true`/`1`, `false`/`0`. Anything that then parses fully as a number is a
/// number; everything else comes back as the original, untouched string.
pub fn parse_primitive(value: &str) -> Primitive {
    let normalized = strip_quotes(value.trim()).to_lowercase();

    match normalized.as_str() {
        "" | "undefined" => return Primitive::Undefined,
        "null" => return Primitive::Null,
        "nan" => return Primitive::Number(f64::NAN),
        "true" | "1" => return Primitive::Bool(true),
        "false" | "0" => return Primitive::Bool(false),
        _ => {}
    }

    match parse_number(&normalized) {
        Some(n) => Primitive::Number(n),
        None => Primitive::String(value.to_string()),
    }
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

// `f64::from_str` also accepts "inf"/"infinity", which are words, not numbers.
fn parse_number(s: &str) -> Option<f64> {
    let unsigned = s.trim_start_matches(['+', '-']);
    if unsigned.starts_with("inf") {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_undefined() {
        assert_eq!(parse_primitive(""), Primitive::Undefined);
        assert_eq!(parse_primitive("   "), Primitive::Undefined);
        assert_eq!(parse_primitive("undefined"), Primitive::Undefined);
        assert_eq!(parse_primitive("\"\""), Primitive::Undefined);
    }

    #[test]
    fn quoted_null() {
        assert_eq!(parse_primitive("'null'"), Primitive::Null);
        assert_eq!(parse_primitive("NULL"), Primitive::Null);
    }

    #[test]
    fn nan_is_number() {
        assert!(matches!(parse_primitive("NaN"), Primitive::Number(n) if n.is_nan()));
    }

    #[test]
    fn booleans_case_insensitive() {
        assert_eq!(parse_primitive("TRUE"), Primitive::Bool(true));
        assert_eq!(parse_primitive(" False "), Primitive::Bool(false));
        assert_eq!(parse_primitive("1"), Primitive::Bool(true));
        assert_eq!(parse_primitive("0"), Primitive::Bool(false));
        assert_eq!(parse_primitive("\"true\""), Primitive::Bool(true));
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_primitive("12.5"), Primitive::Number(12.5));
        assert_eq!(parse_primitive("-3"), Primitive::Number(-3.0));
        assert_eq!(parse_primitive("1e3"), Primitive::Number(1000.0));
        assert_eq!(parse_primitive("'42'"), Primitive::Number(42.0));
    }

    #[test]
    fn infinity_words_stay_strings() {
        assert_eq!(
            parse_primitive("infinity"),
            Primitive::String("infinity".into())
        );
        assert_eq!(parse_primitive("-inf"), Primitive::String("-inf".into()));
    }

    #[test]
    fn strings_keep_original_text() {
        assert_eq!(
            parse_primitive("some-string"),
            Primitive::String("some-string".into())
        );
        assert_eq!(
            parse_primitive("  Mixed Case  "),
            Primitive::String("  Mixed Case  ".into())
        );
        assert_eq!(
            parse_primitive("test/.env.override"),
            Primitive::String("test/.env.override".into())
        );
    }

    #[test]
    fn mismatched_quotes_are_not_stripped() {
        assert_eq!(
            parse_primitive("\"true'"),
            Primitive::String("\"true'".into())
        );
    }

    #[test]
    fn already_typed_values_pass_through() {
        assert_eq!(Primitive::from(7i64), Primitive::Number(7.0));
        assert_eq!(Primitive::from(true), Primitive::Bool(true));
        assert_eq!(Primitive::from(None::<bool>), Primitive::Undefined);
    }

    #[test]
    fn to_toml_drops_null_and_undefined() {
        assert_eq!(Primitive::Null.to_toml(), None);
        assert_eq!(Primitive::Undefined.to_toml(), None);
        assert_eq!(
            Primitive::Number(3.0).to_toml(),
            Some(toml::Value::Integer(3))
        );
        assert_eq!(
            Primitive::Number(1.5).to_toml(),
            Some(toml::Value::Float(1.5))
        );
    }
}
