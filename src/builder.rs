use std::path::PathBuf;

use toml::Value;

use crate::engine;
use crate::env::options_from_env;
use crate::error::EnvlayerError;
use crate::options::ConfigOptions;
use crate::overrides::option_field;
use crate::primitive::Primitive;
use crate::process_env::{ProcessEnv, SystemEnv};
use crate::resolve::{self, OptionsInput};
use crate::types::{EnvMap, OptionMap, PathList};

/// Entry point for building an envlayer resolution.
pub struct Envlayer;

impl Envlayer {
    pub fn builder() -> EnvlayerBuilder {
        EnvlayerBuilder::new()
    }
}

/// Builder for one layered resolution.
///
/// Every setter records an explicit option, the highest-priority tier. Options
/// left unset fall through to `DOTENV_CONFIG_*` variables (unless
/// [`no_env_options()`](Self::no_env_options) is called), then to the
/// compiled defaults of [`ConfigOptions`].
#[derive(Debug, Clone)]
pub struct EnvlayerBuilder {
    overrides: Vec<(String, Value)>,
    env_options: bool,
}

impl EnvlayerBuilder {
    fn new() -> Self {
        Self {
            overrides: Vec::new(),
            env_options: true,
        }
    }

    fn set(mut self, field: &str, value: Value) -> Self {
        self.overrides.push((field.to_string(), value));
        self
    }

    /// Text encoding label for every file read (default: `utf8`).
    pub fn encoding(self, label: &str) -> Self {
        self.set("encoding", Value::String(label.to_string()))
    }

    /// Suppress warnings about unreadable files (default: `true`).
    pub fn silent(self, silent: bool) -> Self {
        self.set("silent", Value::Boolean(silent))
    }

    /// Main dotenv file(s). A string is split on commas; later files win.
    pub fn path(self, paths: impl Into<PathList>) -> Self {
        self.set("path", paths.into().to_toml())
    }

    /// Defaults file(s), overridden by [`path`](Self::path).
    pub fn defaults(self, paths: impl Into<PathList>) -> Self {
        self.set("defaults", paths.into().to_toml())
    }

    /// Schema file declaring the expected keys.
    pub fn schema(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.set("schema", Value::String(path.to_string_lossy().into_owned()))
    }

    /// Schema layer(s) applied on top of [`schema`](Self::schema).
    pub fn schema_extends(self, paths: impl Into<PathList>) -> Self {
        self.set("schema_extends", paths.into().to_toml())
    }

    pub fn error_on_missing(self, enabled: bool) -> Self {
        self.set("error_on_missing", Value::Boolean(enabled))
    }

    pub fn error_on_extra(self, enabled: bool) -> Self {
        self.set("error_on_extra", Value::Boolean(enabled))
    }

    pub fn error_on_regex(self, enabled: bool) -> Self {
        self.set("error_on_regex", Value::Boolean(enabled))
    }

    /// Fail with [`EnvlayerError::MissingConfigFile`] when a listed file does
    /// not exist.
    pub fn error_on_missing_files(self, enabled: bool) -> Self {
        self.set("error_on_missing_files", Value::Boolean(enabled))
    }

    pub fn return_schema_only(self, enabled: bool) -> Self {
        self.set("return_schema_only", Value::Boolean(enabled))
    }

    pub fn include_process_env(self, enabled: bool) -> Self {
        self.set("include_process_env", Value::Boolean(enabled))
    }

    pub fn assign_to_process_env(self, enabled: bool) -> Self {
        self.set("assign_to_process_env", Value::Boolean(enabled))
    }

    pub fn override_process_env(self, enabled: bool) -> Self {
        self.set("override_process_env", Value::Boolean(enabled))
    }

    /// Set an option by key in any spelling (`errorOnMissing`,
    /// `ERROR_ON_MISSING`, `error-on-missing`). `Null` and `Undefined` values
    /// are ignored. Unknown keys are accepted here and ignored at resolution.
    pub fn option(mut self, key: &str, value: impl Into<Primitive>) -> Self {
        if let Some(v) = value.into().to_toml() {
            self.overrides.push((option_field(key), v));
        }
        self
    }

    /// Apply every entry of an option bag, as produced by
    /// [`parse_command`](crate::parse_command) or
    /// [`options_from_preload_args`](crate::options_from_preload_args).
    pub fn options(self, options: &OptionMap) -> Self {
        options
            .iter()
            .fold(self, |builder, (key, value)| builder.option(key, value.clone()))
    }

    /// Skip the `DOTENV_CONFIG_*` option tier.
    pub fn no_env_options(mut self) -> Self {
        self.env_options = false;
        self
    }

    /// Resolve the effective options, reading `DOTENV_CONFIG_*` from `env`.
    pub fn resolve_options_with<E: ProcessEnv + ?Sized>(
        &self,
        env: &E,
    ) -> Result<ConfigOptions, EnvlayerError> {
        let env_options = if self.env_options {
            options_from_env(env.vars())
        } else {
            OptionMap::new()
        };
        resolve::resolve_options(&OptionsInput {
            env_options,
            overrides: self.overrides.clone(),
        })
    }

    /// Resolve against the real process environment.
    pub fn load(self) -> Result<EnvMap, EnvlayerError> {
        self.load_into(&mut SystemEnv)
    }

    /// Resolve against `env`, reading options from it and applying the
    /// result to it as the options dictate.
    pub fn load_into<E: ProcessEnv + ?Sized>(self, env: &mut E) -> Result<EnvMap, EnvlayerError> {
        let options = self.resolve_options_with(env)?;
        engine::resolve(&options, env)
    }
}
