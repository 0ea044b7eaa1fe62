//! Layered dotenv loading with schema validation.
//!
//! Envlayer merges a defaults file, an environment-specific file and the live
//! process environment into one key-value map, checks the result against a
//! schema file, and (optionally) writes it back into the process environment.
//!
//! ```ignore
//! let config = envlayer::Envlayer::builder()
//!     .error_on_missing(true)
//!     .load()?;
//! ```
//!
//! With no settings, that reads `.env.defaults`, then `.env` over it, and
//! sets every resulting variable the process does not already have.
//!
//! # Layer precedence
//!
//! Values:
//!
//! ```text
//! defaults files       DOTENV_CONFIG_DEFAULTS / .defaults(), in list order
//!        ↑ overridden by
//! path files           DOTENV_CONFIG_PATH / .path(), in list order
//!        ↑ overridden by (only with include_process_env)
//! process environment
//! ```
//!
//! Options shaping the resolution have their own three tiers:
//!
//! ```text
//! Compiled defaults    #[config(default = ...)] on ConfigOptions
//!        ↑ overridden by
//! DOTENV_CONFIG_*      e.g. DOTENV_CONFIG_ERROR_ON_MISSING=true
//!        ↑ overridden by
//! Explicit options     builder setters, .option(), .options()
//! ```
//!
//! Every tier is sparse: an option one tier does not mention, or sets to
//! `null`/`undefined`, falls through to the tier below.
//!
//! # Option keys and values
//!
//! Option keys are accepted in any common spelling and normalized to a
//! camel-style key: `ERROR_ON_MISSING`, `error-on-missing` and
//! `errorOnMissing` are the same option (see [`normalize_option_key`]).
//! String values are read as the scalar they spell out with
//! [`parse_primitive`]: `true`/`false`, numbers, `null`, `undefined`, `NaN`,
//! otherwise the string itself.
//!
//! `path`, `defaults` and `schemaExtends` take either one path, a
//! comma-separated list, or an array; later files override earlier ones.
//!
//! # Schemas
//!
//! A schema is itself a dotenv file. Its keys are the variables the
//! configuration must define; a non-empty value is a regular expression the
//! variable's value must match:
//!
//! ```text
//! DATABASE_URL=^postgres://
//! PORT=^\d+$
//! LOG_LEVEL=
//! ```
//!
//! The schema is only read when a schema feature is on:
//!
//! - **`errorOnMissing`** fails with [`EnvlayerError::MissingConfigValues`]
//!   when a schema key has no value.
//! - **`errorOnExtra`** fails with [`EnvlayerError::ExtraConfigValues`] when
//!   a file defines a key the schema does not declare. Inherited process
//!   variables never count as extras.
//! - **`errorOnRegex`** fails with [`EnvlayerError::RegexMismatch`] for
//!   values not matching their pattern. An invalid pattern is
//!   [`EnvlayerError::RegexSyntax`].
//! - **`returnSchemaOnly`** drops every key the schema does not declare.
//!
//! Checks run in that order and the first failure ends resolution.
//! `schemaExtends` layers further schema files on top of `schema`.
//!
//! Patterns are written as-is: dotenv values are never escaped or expanded,
//! so `\` and `$` need no quoting. A pattern with a `#` or with surrounding
//! spaces is quoted like any other value.
//!
//! # The process environment
//!
//! Resolution reads and writes the environment through the [`ProcessEnv`]
//! trait. [`EnvlayerBuilder::load`] uses [`SystemEnv`], the real
//! environment; [`EnvlayerBuilder::load_into`] takes any implementation, such
//! as [`MemoryEnv`] for tests.
//!
//! By default existing variables are left alone. `overrideProcessEnv` lets
//! file values replace them; `assignToProcessEnv=false` turns writing off
//! entirely. With `includeProcessEnv` the live environment takes part in
//! validation and, unless overriding, its values win in the returned map.
//!
//! # Files that are not there
//!
//! Every listed file is optional. A missing file reads as empty and, when
//! `silent` is off, a warning is logged through `tracing`. Turn on
//! `errorOnMissingFiles` to fail with [`EnvlayerError::MissingConfigFile`]
//! instead. Lines of a file that are not `KEY=VALUE` assignments are skipped.
//!
//! # Other entry points
//!
//! - [`parse`] parses dotenv text without touching the filesystem.
//! - [`parse_command`] splits `--option=value ... command args` argument
//!   lists; [`options_from_preload_args`] picks `dotenv_config_<key>=<value>`
//!   tokens out of an arbitrary argument list. Both produce an [`OptionMap`]
//!   for [`EnvlayerBuilder::options`].
//! - [`render`] prints a resolved map as JSON or dotenv lines.
//!
//! # Command line
//!
//! The `cli` feature (on by default) builds the `envlayer` binary:
//!
//! ```text
//! envlayer --path=.env.local --errorOnMissing=true npm start
//! envlayer --print=dotenv
//! ```
//!
//! Flags up to the first non-flag token configure the loader; the rest is a
//! command run through the shell with the resolved environment. `--print`
//! resolves without reading or writing the environment and prints the result
//! instead. See the [`cli`] module.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "cli")]
pub mod cli;
mod command;
mod engine;
mod env;
mod file;
pub(crate) mod merge;
mod normalize;
mod ops;
mod options;
mod overrides;
mod primitive;
mod process_env;
mod resolve;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::{Envlayer, EnvlayerBuilder};
pub use command::{ParsedCommand, options_from_preload_args, parse_command};
pub use engine::resolve;
pub use env::{ENV_PREFIX, options_from_env};
pub use error::EnvlayerError;
pub use file::{FileLoader, parse};
pub use normalize::normalize_option_key;
pub use ops::{Rendered, render};
pub use options::ConfigOptions;
pub use primitive::{Primitive, parse_primitive};
pub use process_env::{MemoryEnv, ProcessEnv, SystemEnv};
pub use resolve::{OptionsInput, resolve_options};
pub use types::{EnvMap, OptionMap, PathList, PrintFormat};
pub use validate::{Checks, validate};

/// Resolve with default options (plus any `DOTENV_CONFIG_*` variables)
/// against the real process environment.
pub fn load() -> Result<EnvMap, EnvlayerError> {
    Envlayer::builder().load()
}
