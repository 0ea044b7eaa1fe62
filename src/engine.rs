//! The merge engine: files + schema + process environment → result map.
//!
//! Given resolved [`ConfigOptions`] and the shared [`ProcessEnv`]:
//!
//! 1. Load `defaults` then `path` (each a layered list); `path` wins. This is
//!    the file config.
//! 2. With `include_process_env`, the live environment is laid over the file
//!    config to form the checked config; otherwise the two are the same.
//! 3. If a schema feature is on, load `schema` plus `schema_extends` layers
//!    and validate (missing, then extra, then patterns).
//! 4. With `include_process_env` but not `override_process_env`, every live
//!    variable is copied into the file config: the environment wins.
//! 5. With `return_schema_only`, keep only schema keys (schema order).
//! 6. With `assign_to_process_env`, write the result into the environment:
//!    unconditionally under `override_process_env`, else only variables that
//!    are not already set.

use crate::error::EnvlayerError;
use crate::file::FileLoader;
use crate::merge::overlay;
use crate::options::ConfigOptions;
use crate::process_env::ProcessEnv;
use crate::types::EnvMap;
use crate::validate::{self, Checks};

/// Resolve the configuration and apply it to `env` as `options` dictate.
///
/// Nothing is cached: every call reads the files and the environment afresh.
/// On error the environment is left untouched.
pub fn resolve<E: ProcessEnv + ?Sized>(
    options: &ConfigOptions,
    env: &mut E,
) -> Result<EnvMap, EnvlayerError> {
    let loader = FileLoader::from_options(options);

    let defaults_data = loader.load_layered(&options.defaults)?;
    let environment_data = loader.load_layered(&options.path)?;
    let mut config_data = overlay(defaults_data, environment_data);

    let live = options.include_process_env.then(|| env.vars());
    let config = match &live {
        Some(live) => overlay(config_data.clone(), live.clone()),
        None => config_data.clone(),
    };

    let schema = if options.needs_schema() {
        Some(load_schema(&loader, options)?)
    } else {
        None
    };

    if let Some(schema) = &schema {
        let checks = Checks {
            missing: options.error_on_missing,
            extra: options.error_on_extra,
            regex: options.error_on_regex,
        };
        validate::validate(schema, &config, &config_data, checks)?;
    }

    if let Some(live) = &live
        && !options.override_process_env
    {
        for key in config.keys() {
            if let Some(value) = live.get(key) {
                config_data.insert(key.clone(), value.clone());
            }
        }
    }

    if options.return_schema_only
        && let Some(schema) = &schema
    {
        config_data = schema
            .keys()
            .filter_map(|key| Some((key.clone(), config.get(key)?.clone())))
            .collect();
    }

    if options.assign_to_process_env {
        assign(env, &config_data, options.override_process_env);
    }

    Ok(config_data)
}

/// Load the schema file with its extension layers on top.
fn load_schema(loader: &FileLoader<'_>, options: &ConfigOptions) -> Result<EnvMap, EnvlayerError> {
    let base = loader.load(&options.schema)?;
    let extends = options
        .schema_extends
        .as_ref()
        .map(|list| loader.load_layered(list))
        .transpose()?
        .unwrap_or_default();
    Ok(overlay(base, extends))
}

fn assign<E: ProcessEnv + ?Sized>(env: &mut E, config: &EnvMap, override_existing: bool) {
    let mut written = 0usize;
    for (key, value) in config {
        if override_existing || !env.contains(key) {
            env.set(key, value);
            written += 1;
        }
    }
    tracing::debug!(
        written,
        skipped = config.len() - written,
        "applied configuration to process environment"
    );
}
