//! Convert option bags into sparse `toml::Table` layers.
//!
//! Keys arrive camel-style (`errorOnMissing`) from the extractors and are
//! rewritten to the snake_case field names of
//! [`ConfigOptions`](crate::ConfigOptions). `null` and `undefined` values are
//! dropped so the option falls through to the layer below.

use toml::{Table, Value};

use crate::normalize::{field_name, normalize_option_key};
use crate::types::OptionMap;

/// Convert a normalized option bag into an option layer.
pub fn options_to_table(options: &OptionMap) -> Table {
    let mut table = Table::new();
    for (key, value) in options {
        if let Some(v) = value.to_toml() {
            table.insert(field_name(key), v);
        }
    }
    table
}

/// Convert `(field, value)` override pairs into an option layer.
/// If multiple entries target the same field, the last one wins.
pub fn overrides_to_table(entries: &[(String, Value)]) -> Table {
    let mut table = Table::new();
    for (field, value) in entries {
        table.insert(field.clone(), value.clone());
    }
    table
}

/// Field name for an option key in any supported spelling
/// (`ERROR_ON_EXTRA`, `error-on-extra`, `errorOnExtra`).
pub fn option_field(key: &str) -> String {
    field_name(&normalize_option_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    #[test]
    fn camel_keys_become_fields() {
        let mut options = OptionMap::new();
        options.insert("errorOnMissing".into(), Primitive::Bool(true));
        options.insert("path".into(), Primitive::String(".env.local".into()));
        let table = options_to_table(&options);
        assert_eq!(table["error_on_missing"].as_bool(), Some(true));
        assert_eq!(table["path"].as_str(), Some(".env.local"));
    }

    #[test]
    fn null_and_undefined_are_dropped() {
        let mut options = OptionMap::new();
        options.insert("schema".into(), Primitive::Null);
        options.insert("path".into(), Primitive::Undefined);
        assert!(options_to_table(&options).is_empty());
    }

    #[test]
    fn last_override_wins() {
        let table = overrides_to_table(&[
            ("silent".into(), Value::Boolean(true)),
            ("silent".into(), Value::Boolean(false)),
        ]);
        assert_eq!(table["silent"].as_bool(), Some(false));
    }

    #[test]
    fn empty_list_empty_table() {
        assert!(overrides_to_table(&[]).is_empty());
    }

    #[test]
    fn option_field_accepts_any_spelling() {
        assert_eq!(option_field("ERROR_ON_EXTRA"), "error_on_extra");
        assert_eq!(option_field("error-on-extra"), "error_on_extra");
        assert_eq!(option_field("errorOnExtra"), "error_on_extra");
    }
}
