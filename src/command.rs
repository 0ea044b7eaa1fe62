//! Option extraction from argument vectors.
//!
//! Two argument shapes are understood:
//!
//! - **Command lines** (`--path=.env.local --print`, then a command):
//!   [`parse_command`] reads flags strictly left to right and stops at the
//!   first token that is not a flag. That token is the command; everything
//!   after it belongs to the command, untouched.
//! - **Preload arguments** (`dotenv_config_path=.env.local` anywhere in the
//!   list): [`options_from_preload_args`] picks them out and ignores the rest.

use crate::normalize::normalize_option_key;
use crate::primitive::{Primitive, parse_primitive};
use crate::types::OptionMap;

const PRELOAD_PREFIX: &str = "dotenv_config_";

/// Option key set by a bare `--print`.
pub const PRINT_OPTION: &str = "print";

/// A command line split into loader options and the command to run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCommand {
    pub options: OptionMap,
    pub command: Option<String>,
    pub args: Vec<String>,
}

/// Split `args` into leading `--name=value` flags, a command, and its arguments.
///
/// - `--name=value` (both sides non-empty) sets `normalize(name)` to the
///   primitive-parsed value. The split happens at the first `=`, so the value
///   keeps any further `=`: `--path=a=b` sets `path` to `a=b`, never `a` to
///   `b`. Splitting at the last `=` instead would read `--path=a=b` as an
///   option named `path=a`.
/// - A bare `--print` (any spelling that normalizes to `print`) sets `print`
///   to `true`.
/// - Any other token ends flag parsing: it becomes the command and the
///   remaining tokens its arguments, verbatim.
pub fn parse_command<S: AsRef<str>>(args: &[S]) -> ParsedCommand {
    let mut parsed = ParsedCommand::default();

    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();

        if let Some((name, value)) = split_flag(arg) {
            parsed
                .options
                .insert(normalize_option_key(name), parse_primitive(value));
            continue;
        }

        if is_print_flag(arg) {
            parsed
                .options
                .insert(PRINT_OPTION.to_string(), Primitive::Bool(true));
            continue;
        }

        parsed.command = Some(arg.to_string());
        parsed.args = args[i + 1..]
            .iter()
            .map(|a| a.as_ref().to_string())
            .collect();
        break;
    }

    parsed
}

/// Collect `dotenv_config_<key>=<value>` tokens from an argument list.
pub fn options_from_preload_args<S: AsRef<str>>(args: &[S]) -> OptionMap {
    let mut options = OptionMap::new();
    for arg in args {
        let Some(rest) = arg.as_ref().strip_prefix(PRELOAD_PREFIX) else {
            continue;
        };
        let Some((key, value)) = rest.split_once('=') else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        options.insert(normalize_option_key(key), parse_primitive(value));
    }
    options
}

fn split_flag(arg: &str) -> Option<(&str, &str)> {
    let (name, value) = arg.strip_prefix("--")?.split_once('=')?;
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name, value))
}

fn is_print_flag(arg: &str) -> bool {
    arg.strip_prefix("--")
        .is_some_and(|name| !name.is_empty() && normalize_option_key(name) == PRINT_OPTION)
}
