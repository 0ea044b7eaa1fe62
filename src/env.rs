use crate::normalize::normalize_option_key;
use crate::primitive::parse_primitive;
use crate::types::OptionMap;

/// Prefix of the environment variables that carry loader options.
pub const ENV_PREFIX: &str = "DOTENV_CONFIG_";

/// Build an option bag from environment variables matching `DOTENV_CONFIG_*`.
///
/// The suffix is normalized (`ERROR_ON_MISSING` → `errorOnMissing`) and the
/// value primitive-parsed (`"true"` → `true`). Variables without the prefix,
/// or with nothing after it, are skipped.
///
/// Takes an iterator so tests can pass synthetic data instead of the live
/// process environment.
pub fn options_from_env(vars: impl IntoIterator<Item = (String, String)>) -> OptionMap {
    let mut options = OptionMap::new();

    for (key, value) in vars {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }

        options.insert(normalize_option_key(rest), parse_primitive(&value));
    }

    options
}
