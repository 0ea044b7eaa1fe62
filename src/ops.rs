//! Rendering a resolved configuration for `--print`.
//!
//! JSON is a pretty-printed object in map order. Dotenv output is one
//! `KEY=VALUE` line per entry. Values are written bare unless the dotenv
//! parser would trim them, cut them at `#`, or stop at a line break; those
//! are wrapped in `'` or `` ` `` (whichever the value does not contain) so
//! they read back unchanged. A value containing both quote kinds or a
//! carriage return falls back to double quotes, where a `"` inside cannot be
//! represented exactly. A quoted value ending in `\` does not read back
//! either, since the parser takes `\'` as an escaped quote.

use std::borrow::Cow;
use std::fmt;

use crate::types::{EnvMap, PrintFormat};

/// A configuration ready for display. Created by [`render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    map: &'a EnvMap,
    format: PrintFormat,
}

/// Prepare `map` for display in `format`. The output ends with a newline.
pub fn render(map: &EnvMap, format: PrintFormat) -> Rendered<'_> {
    Rendered { map, format }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            PrintFormat::Json => {
                let json = serde_json::to_string_pretty(self.map).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            PrintFormat::Dotenv => {
                for (key, value) in self.map {
                    writeln!(f, "{key}={}", dotenv_value(value))?;
                }
                Ok(())
            }
        }
    }
}

fn needs_quotes(value: &str) -> bool {
    value != value.trim()
        || value.contains(['#', '\n', '\r'])
        || value.starts_with(['\'', '"', '`'])
}

fn dotenv_value(value: &str) -> Cow<'_, str> {
    if !needs_quotes(value) {
        return Cow::Borrowed(value);
    }
    // A raw `\r` would be read back as a line break.
    if !value.contains('\r') {
        if let Some(q) = ['\'', '`'].into_iter().find(|q| !value.contains(*q)) {
            return Cow::Owned(format!("{q}{value}{q}"));
        }
    }
    let escaped = value.replace('\n', "\\n").replace('\r', "\\r");
    Cow::Owned(format!("\"{escaped}\""))
}
