use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::primitive::Primitive;

/// Key-value pairs from one dotenv file, a merge of several, or the process
/// environment. Iteration follows insertion order.
pub type EnvMap = IndexMap<String, String>;

/// Sparse option bag produced by the env and command-line extractors.
/// Keys are normalized (camel-style), values primitive-parsed.
pub type OptionMap = IndexMap<String, Primitive>;

/// An ordered list of dotenv files, lowest priority first.
///
/// Deserializes from a comma-separated string or a list of strings. Any other
/// scalar (number, bool) deserializes to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathList(Vec<PathBuf>);

impl PathList {
    /// Split a comma-separated list, trimming entries and dropping empty ones.
    pub fn parse(list: &str) -> Self {
        PathList(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    /// Encode as a TOML array so the list can ride in an option layer.
    pub fn to_toml(&self) -> toml::Value {
        toml::Value::Array(
            self.0
                .iter()
                .map(|p| toml::Value::String(p.to_string_lossy().into_owned()))
                .collect(),
        )
    }
}

impl From<&str> for PathList {
    fn from(list: &str) -> Self {
        PathList::parse(list)
    }
}

impl From<String> for PathList {
    fn from(list: String) -> Self {
        PathList::parse(&list)
    }
}

impl From<PathBuf> for PathList {
    fn from(path: PathBuf) -> Self {
        PathList(vec![path])
    }
}

impl From<&Path> for PathList {
    fn from(path: &Path) -> Self {
        PathList(vec![path.to_path_buf()])
    }
}

impl<P: Into<PathBuf>> From<Vec<P>> for PathList {
    fn from(paths: Vec<P>) -> Self {
        PathList(paths.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for PathList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PathListVisitor)
    }
}

struct PathListVisitor;

impl<'de> Visitor<'de> for PathListVisitor {
    type Value = PathList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a path, a comma-separated list of paths, or an array of paths")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PathList, E> {
        Ok(PathList::parse(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PathList, A::Error> {
        let mut paths = Vec::new();
        while let Some(entry) = seq.next_element::<String>()? {
            let entry = entry.trim();
            if !entry.is_empty() {
                paths.push(PathBuf::from(entry));
            }
        }
        Ok(PathList(paths))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<PathList, E> {
        Ok(PathList::default())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<PathList, E> {
        Ok(PathList::default())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<PathList, E> {
        Ok(PathList::default())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<PathList, E> {
        Ok(PathList::default())
    }
}

/// Output format for `--print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFormat {
    /// Pretty-printed JSON object.
    #[default]
    Json,
    /// `KEY=VALUE` lines.
    Dotenv,
}

impl PrintFormat {
    /// Interpret the value of a `print` option. A bare flag (`true`) means JSON.
    pub fn from_primitive(value: &Primitive) -> Option<Self> {
        match value {
            Primitive::Bool(true) => Some(PrintFormat::Json),
            Primitive::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "json" => Some(PrintFormat::Json),
                "dotenv" | "env" => Some(PrintFormat::Dotenv),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(value: toml::Value) -> PathList {
        PathList::deserialize(value).unwrap()
    }

    #[test]
    fn comma_separated_list_is_split_and_trimmed() {
        let list = PathList::parse(" .env.defaults , .env ,, .env.local");
        let paths: Vec<&Path> = list.iter().collect();
        assert_eq!(
            paths,
            [
                Path::new(".env.defaults"),
                Path::new(".env"),
                Path::new(".env.local")
            ]
        );
    }

    #[test]
    fn empty_string_is_empty_list() {
        assert!(PathList::parse("").is_empty());
        assert!(PathList::parse(" , ").is_empty());
    }

    #[test]
    fn deserializes_from_string_and_array() {
        assert_eq!(
            from_toml(toml::Value::String("a,b".into())),
            PathList::from(vec!["a", "b"])
        );
        let array = toml::Value::Array(vec![
            toml::Value::String("first".into()),
            toml::Value::String("second".into()),
        ]);
        assert_eq!(from_toml(array), PathList::from(vec!["first", "second"]));
    }

    #[test]
    fn unsupported_scalars_deserialize_to_empty() {
        assert!(from_toml(toml::Value::Integer(123)).is_empty());
        assert!(from_toml(toml::Value::Boolean(true)).is_empty());
    }

    #[test]
    fn to_toml_round_trips_through_deserialize() {
        let list = PathList::from(vec![".env.defaults", ".env"]);
        assert_eq!(from_toml(list.to_toml()), list);
    }

    #[test]
    fn print_format_from_flag_and_name() {
        assert_eq!(
            PrintFormat::from_primitive(&Primitive::Bool(true)),
            Some(PrintFormat::Json)
        );
        assert_eq!(
            PrintFormat::from_primitive(&Primitive::String("DotEnv".into())),
            Some(PrintFormat::Dotenv)
        );
        assert_eq!(
            PrintFormat::from_primitive(&Primitive::String("yaml".into())),
            None
        );
        assert_eq!(PrintFormat::from_primitive(&Primitive::Bool(false)), None);
    }
}
