use std::path::PathBuf;

use confique::Config;

use crate::types::PathList;

/// Every setting that shapes one resolution.
///
/// Defaults are compiled in through confique; option layers (the
/// `DOTENV_CONFIG_*` variables, then explicit builder values) are sparse and
/// override them key by key.
#[derive(Config, Debug, Clone, PartialEq)]
pub struct ConfigOptions {
    /// Text encoding label for every file read.
    #[config(default = "utf8")]
    pub encoding: String,

    /// Suppress warnings about files that cannot be read.
    #[config(default = true)]
    pub silent: bool,

    /// Main dotenv file(s); later entries win.
    #[config(default = ".env")]
    pub path: PathList,

    /// File(s) holding default values, overridden by `path`.
    #[config(default = ".env.defaults")]
    pub defaults: PathList,

    /// File declaring the expected keys and their optional patterns.
    #[config(default = ".env.schema")]
    pub schema: PathBuf,

    /// Additional schema layer(s) applied over `schema`.
    pub schema_extends: Option<PathList>,

    /// Fail when a schema key has no value.
    #[config(default = false)]
    pub error_on_missing: bool,

    /// Fail when a file defines a key the schema does not declare.
    #[config(default = false)]
    pub error_on_extra: bool,

    /// Fail when a value does not match its schema pattern.
    #[config(default = false)]
    pub error_on_regex: bool,

    /// Fail instead of warning when a configured file does not exist.
    #[config(default = false)]
    pub error_on_missing_files: bool,

    /// Return only the keys declared in the schema.
    #[config(default = false)]
    pub return_schema_only: bool,

    /// Overlay the live process environment for validation and output.
    #[config(default = false)]
    pub include_process_env: bool,

    /// Write the result into the process environment.
    #[config(default = true)]
    pub assign_to_process_env: bool,

    /// Let file values replace variables already set in the process environment.
    #[config(default = false)]
    pub override_process_env: bool,
}

impl ConfigOptions {
    /// Whether any requested behavior needs the schema loaded.
    pub fn needs_schema(&self) -> bool {
        self.error_on_missing || self.error_on_extra || self.error_on_regex || self.return_schema_only
    }
}

impl Default for ConfigOptions {
    fn default() -> Self {
        ConfigOptions {
            encoding: "utf8".into(),
            silent: true,
            path: PathList::parse(".env"),
            defaults: PathList::parse(".env.defaults"),
            schema: PathBuf::from(".env.schema"),
            schema_extends: None,
            error_on_missing: false,
            error_on_extra: false,
            error_on_regex: false,
            error_on_missing_files: false,
            return_schema_only: false,
            include_process_env: false,
            assign_to_process_env: true,
            override_process_env: false,
        }
    }
}
