use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvlayerError {
    #[error("Missing config file: {}", .path.display())]
    MissingConfigFile { path: PathBuf },

    #[error("Missing config values: {}", .0.join(", "))]
    MissingConfigValues(Vec<String>),

    #[error("Extra config values: {}", .0.join(", "))]
    ExtraConfigValues(Vec<String>),

    #[error("Invalid schema pattern for '{key}': {source}")]
    RegexSyntax { key: String, source: regex::Error },

    #[error("Regex mismatch: {}", .0.join(", "))]
    RegexMismatch(Vec<String>),

    #[error("Invalid value for option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] confique::Error),
}

impl EnvlayerError {
    /// The configuration keys this error is about, if it names any.
    pub fn keys(&self) -> &[String] {
        match self {
            EnvlayerError::MissingConfigValues(keys)
            | EnvlayerError::ExtraConfigValues(keys)
            | EnvlayerError::RegexMismatch(keys) => keys,
            EnvlayerError::RegexSyntax { key, .. } | EnvlayerError::InvalidOption { key, .. } => {
                std::slice::from_ref(key)
            }
            _ => &[],
        }
    }
}
