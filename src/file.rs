//! Reading dotenv files into [`EnvMap`]s.
//!
//! A [`FileLoader`] carries the three settings that govern every file read
//! during one resolution:
//!
//! - **encoding**: a WHATWG label (`utf8`, `latin1`, …) used to decode the
//!   raw bytes with `encoding_rs`.
//! - **silent**: whether an unreadable file is reported through `tracing`.
//! - **strict files** (`errorOnMissingFiles`): whether a file that does not
//!   exist aborts resolution instead of reading as empty.
//!
//! Any other read failure (permissions, unknown encoding) is never fatal: the
//! file reads as empty and, unless silent, a warning is logged. File content
//! is never fatal either: lines that are not assignments are skipped.
//!
//! The format is plain `KEY=VALUE` text. Unquoted values are taken as written
//! up to a `#` comment and trimmed; nothing is escaped or expanded, so
//! `PATTERN=^\S+$` and `PASSWORD=abc$def` keep every character. Values may
//! be wrapped in `'`, `"` or `` ` `` quotes (which may span lines); inside
//! double quotes `\n` and `\r` become line breaks.
//!
//! [`FileLoader::load_layered`] reads a [`PathList`] in order and folds the
//! results so later files override earlier ones.

use std::io;
use std::path::Path;

use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::EnvlayerError;
use crate::merge::overlay_all;
use crate::options::ConfigOptions;
use crate::types::{EnvMap, PathList};

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r##"(?m)^\s*(?:export\s+)?([\w.-]+)(?:\s*=\s*?|:\s+?)(\s*'(?:\\'|[^'])*'|\s*"(?:\\"|[^"])*"|\s*`(?:\\`|[^`])*`|[^#\r\n]+)?\s*(?:#.*)?$"##,
    )
    .expect("valid dotenv line regex")
});

/// Parse dotenv-formatted text. Later assignments of a key win; lines that
/// are not assignments are ignored.
pub fn parse(content: &str) -> EnvMap {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut map = EnvMap::new();
    for caps in LINE.captures_iter(&content) {
        let key = caps[1].to_string();
        let raw = caps.get(2).map_or("", |m| m.as_str()).trim();
        map.insert(key, unquote(raw));
    }
    map
}

fn unquote(raw: &str) -> String {
    let mut chars = raw.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return raw.to_string();
    };
    if first != last || !matches!(first, '\'' | '"' | '`') {
        return raw.to_string();
    }
    let inner = &raw[1..raw.len() - 1];
    if first == '"' {
        inner.replace("\\n", "\n").replace("\\r", "\r")
    } else {
        inner.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FileLoader<'a> {
    encoding: &'a str,
    silent: bool,
    error_on_missing_files: bool,
}

impl<'a> FileLoader<'a> {
    pub fn new(encoding: &'a str, silent: bool, error_on_missing_files: bool) -> Self {
        Self {
            encoding,
            silent,
            error_on_missing_files,
        }
    }

    pub fn from_options(options: &'a ConfigOptions) -> Self {
        Self::new(
            &options.encoding,
            options.silent,
            options.error_on_missing_files,
        )
    }

    /// Load a single file.
    pub fn load(&self, path: &Path) -> Result<EnvMap, EnvlayerError> {
        let content = match read_text(path, self.encoding) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.error_on_missing_files => {
                return Err(EnvlayerError::MissingConfigFile {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                if !self.silent {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                }
                return Ok(EnvMap::new());
            }
        };

        let map = parse(&content);
        tracing::debug!(path = %path.display(), keys = map.len(), "loaded dotenv file");
        Ok(map)
    }

    /// Load every file in `paths`, later files overriding earlier ones.
    /// An empty list loads nothing.
    pub fn load_layered(&self, paths: &PathList) -> Result<EnvMap, EnvlayerError> {
        let layers = paths
            .iter()
            .map(|path| self.load(path))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(overlay_all(layers))
    }
}

fn read_text(path: &Path, label: &str) -> io::Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unknown encoding '{label}'"),
        )
    })?;
    let bytes = std::fs::read(path)?;
    let (text, _, _) = encoding.decode(&bytes);
    Ok(text.into_owned())
}
