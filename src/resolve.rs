//! Option resolution: collapse the option tiers into one [`ConfigOptions`].
//!
//! Operates on pre-collected data (`OptionsInput`) with no I/O. Steps:
//!
//! 1. Convert `DOTENV_CONFIG_*` options to a table layer
//! 2. Merge explicit overrides on top (highest priority)
//! 3. Deserialize the merged table into the confique layer, noting ignored keys
//! 4. Let confique fill compiled defaults for everything left unset

use confique::Config;
use toml::{Table, Value};

use crate::error::EnvlayerError;
use crate::merge::merge_options;
use crate::options::ConfigOptions;
use crate::overrides;
use crate::types::OptionMap;

type OptionsLayer = <ConfigOptions as Config>::Layer;

/// Option tiers above the compiled defaults.
#[derive(Debug, Clone, Default)]
pub struct OptionsInput {
    /// Options taken from `DOTENV_CONFIG_*` variables.
    pub env_options: OptionMap,
    /// Explicit `(field, value)` overrides, later entries winning.
    pub overrides: Vec<(String, Value)>,
}

/// Resolve the effective options: compiled defaults < env options < explicit.
pub fn resolve_options(input: &OptionsInput) -> Result<ConfigOptions, EnvlayerError> {
    let mut merged = overrides::options_to_table(&input.env_options);

    if !input.overrides.is_empty() {
        merged = merge_options(merged, overrides::overrides_to_table(&input.overrides));
    }

    let layer = deserialize_layer(merged)?;

    ConfigOptions::builder()
        .preloaded(layer)
        .load()
        .map_err(EnvlayerError::from)
}

fn deserialize_layer(merged: Table) -> Result<OptionsLayer, EnvlayerError> {
    let mut ignored: Vec<String> = Vec::new();
    let layer: OptionsLayer = serde_ignored::deserialize(Value::Table(merged), |path| {
        ignored.push(path.to_string());
    })
    .map_err(|e: toml::de::Error| EnvlayerError::InvalidOption {
        key: "<options>".into(),
        reason: e.to_string(),
    })?;

    for key in &ignored {
        tracing::debug!(option = %key, "ignoring unrecognized option");
    }
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;
    use crate::types::PathList;
    use std::path::PathBuf;

    fn env_options(pairs: &[(&str, Primitive)]) -> OptionMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn defaults_only() {
        let options = resolve_options(&OptionsInput::default()).unwrap();
        assert_eq!(options, ConfigOptions::default());
    }

    #[test]
    fn env_options_override_defaults() {
        let input = OptionsInput {
            env_options: env_options(&[
                ("path", Primitive::String(".env.override".into())),
                ("overrideProcessEnv", Primitive::Bool(true)),
            ]),
            ..OptionsInput::default()
        };
        let options = resolve_options(&input).unwrap();
        assert_eq!(options.path, PathList::parse(".env.override"));
        assert!(options.override_process_env);
        assert_eq!(options.defaults, PathList::parse(".env.defaults"));
    }

    #[test]
    fn explicit_overrides_env_options() {
        let input = OptionsInput {
            env_options: env_options(&[("errorOnMissing", Primitive::Bool(true))]),
            overrides: vec![("error_on_missing".into(), Value::Boolean(false))],
        };
        let options = resolve_options(&input).unwrap();
        assert!(!options.error_on_missing);
    }

    #[test]
    fn schema_extends_from_comma_list() {
        let input = OptionsInput {
            env_options: env_options(&[(
                "schemaExtends",
                Primitive::String("a.schema,b.schema".into()),
            )]),
            ..OptionsInput::default()
        };
        let options = resolve_options(&input).unwrap();
        assert_eq!(
            options.schema_extends,
            Some(PathList::from(vec!["a.schema", "b.schema"]))
        );
    }

    #[test]
    fn numeric_schema_extends_is_ignored() {
        let input = OptionsInput {
            overrides: vec![("schema_extends".into(), Value::Integer(123))],
            ..OptionsInput::default()
        };
        let options = resolve_options(&input).unwrap();
        assert_eq!(options.schema_extends, Some(PathList::default()));
    }

    #[test]
    fn schema_is_single_path() {
        let input = OptionsInput {
            env_options: env_options(&[("schema", Primitive::String("custom.schema".into()))]),
            ..OptionsInput::default()
        };
        let options = resolve_options(&input).unwrap();
        assert_eq!(options.schema, PathBuf::from("custom.schema"));
    }

    #[test]
    fn unknown_options_are_ignored() {
        let input = OptionsInput {
            env_options: env_options(&[
                ("includedProcessEnv", Primitive::Bool(true)),
                ("print", Primitive::Bool(true)),
            ]),
            ..OptionsInput::default()
        };
        let options = resolve_options(&input).unwrap();
        assert_eq!(options, ConfigOptions::default());
    }

    #[test]
    fn wrong_type_is_invalid_option() {
        let input = OptionsInput {
            env_options: env_options(&[("silent", Primitive::Number(f64::NAN))]),
            ..OptionsInput::default()
        };
        let err = resolve_options(&input).unwrap_err();
        assert!(matches!(err, EnvlayerError::InvalidOption { .. }));
    }

    #[test]
    fn null_env_option_falls_back_to_default() {
        let input = OptionsInput {
            env_options: env_options(&[("defaults", Primitive::Null)]),
            ..OptionsInput::default()
        };
        let options = resolve_options(&input).unwrap();
        assert_eq!(options.defaults, PathList::parse(".env.defaults"));
    }
}
