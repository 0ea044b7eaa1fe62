//! Schema checks: missing keys, extra keys, and pattern mismatches.
//!
//! A schema is a dotenv file whose keys name the required variables. A
//! non-empty value is a regular expression the variable's value must match
//! (unanchored, like a search).

use regex::Regex;

use crate::error::EnvlayerError;
use crate::types::EnvMap;

/// Which checks to run, taken from the resolved options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checks {
    pub missing: bool,
    pub extra: bool,
    pub regex: bool,
}

/// Validate `config` against `schema`.
///
/// `config` is what the caller will see (file values, plus the live
/// environment when it is included); `file_config` holds only file-derived
/// values and is what the extra-key check looks at, so inherited process
/// variables never count as extras.
///
/// Missing keys are reported before extra keys, which are reported before
/// pattern problems; the first failing check ends validation.
pub fn validate(
    schema: &EnvMap,
    config: &EnvMap,
    file_config: &EnvMap,
    checks: Checks,
) -> Result<(), EnvlayerError> {
    if checks.missing {
        let missing = missing_keys(schema, config);
        if !missing.is_empty() {
            return Err(EnvlayerError::MissingConfigValues(missing));
        }
    }

    if checks.extra {
        let extra = extra_keys(schema, file_config);
        if !extra.is_empty() {
            return Err(EnvlayerError::ExtraConfigValues(extra));
        }
    }

    if checks.regex {
        let mismatched = regex_mismatches(schema, config)?;
        if !mismatched.is_empty() {
            return Err(EnvlayerError::RegexMismatch(mismatched));
        }
    }

    Ok(())
}

/// Schema keys absent from `config`, in schema order.
pub fn missing_keys(schema: &EnvMap, config: &EnvMap) -> Vec<String> {
    schema
        .keys()
        .filter(|key| !config.contains_key(*key))
        .cloned()
        .collect()
}

/// Keys of `config` the schema does not declare, in `config` order.
pub fn extra_keys(schema: &EnvMap, config: &EnvMap) -> Vec<String> {
    config
        .keys()
        .filter(|key| !schema.contains_key(*key))
        .cloned()
        .collect()
}

/// Keys whose value fails the schema pattern, in schema order. An absent key
/// is checked as the empty string.
///
/// Every pattern is compiled before any value is tested, so an invalid
/// pattern fails with [`EnvlayerError::RegexSyntax`] whether or not a value
/// would have needed it.
pub fn regex_mismatches(schema: &EnvMap, config: &EnvMap) -> Result<Vec<String>, EnvlayerError> {
    let patterns = compile_patterns(schema)?;

    Ok(patterns
        .into_iter()
        .filter(|(key, re)| {
            let value = config.get(*key).map(String::as_str).unwrap_or("");
            !re.is_match(value)
        })
        .map(|(key, _)| key.to_string())
        .collect())
}

fn compile_patterns(schema: &EnvMap) -> Result<Vec<(&str, Regex)>, EnvlayerError> {
    schema
        .iter()
        .filter(|(_, pattern)| !pattern.is_empty())
        .map(|(key, pattern)| {
            Regex::new(pattern)
                .map(|re| (key.as_str(), re))
                .map_err(|source| EnvlayerError::RegexSyntax {
                    key: key.clone(),
                    source,
                })
        })
        .collect()
}
