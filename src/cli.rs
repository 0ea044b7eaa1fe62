//! Command-line front end for the `envlayer` binary.
//!
//! Compiled only with the `cli` Cargo feature (on by default). Clap collects
//! the raw argument vector so `--help` and `--version` work; the loader's own
//! flags are then read by [`parse_command`](crate::parse_command), which is
//! tolerant of option names clap knows nothing about.
//!
//! ```text
//! envlayer [--option=value ...] [--print[=json|dotenv]] [command [args ...]]
//! ```
//!
//! The flow is split in two so the decision logic stays testable:
//! [`plan`] turns parsed arguments into an [`Action`], and [`run`] carries it
//! out against a [`ProcessEnv`].

use std::io::{self, Write};
use std::process::Command;

use clap::Parser;
use thiserror::Error;

use crate::builder::Envlayer;
use crate::command::{PRINT_OPTION, ParsedCommand, parse_command};
use crate::error::EnvlayerError;
use crate::ops::render;
use crate::process_env::ProcessEnv;
use crate::types::{OptionMap, PrintFormat};

/// Load layered dotenv files, then run a command with the result in its
/// environment.
#[derive(Debug, Parser)]
#[command(name = "envlayer", version, about, long_about = None)]
pub struct CliArgs {
    /// Loader flags (`--errorOnMissing=true`, `--print=dotenv`, …), then the
    /// command to run and its arguments.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Resolve(#[from] EnvlayerError),

    #[error("Failed to run '{command}': {source}")]
    Spawn { command: String, source: io::Error },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// What one invocation does.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Resolve without touching the environment and print the result.
    Print {
        options: OptionMap,
        format: PrintFormat,
    },
    /// Resolve into the environment, then run `command args…`.
    Execute {
        options: OptionMap,
        command: String,
        args: Vec<String>,
    },
    /// No command and no `--print`: nothing to do.
    Idle,
}

/// Decide what a parsed command line asks for.
///
/// `--print` and a command are mutually exclusive.
pub fn plan(parsed: ParsedCommand) -> Result<Action, CliError> {
    let ParsedCommand {
        mut options,
        command,
        args,
    } = parsed;

    if let Some(print) = options.shift_remove(PRINT_OPTION) {
        if let Some(command) = command {
            return Err(CliError::Usage(format!(
                "--print cannot be combined with a command (got '{command}')"
            )));
        }
        let format = PrintFormat::from_primitive(&print).ok_or_else(|| {
            CliError::Usage(format!(
                "Unknown print format '{print}' (expected json or dotenv)"
            ))
        })?;
        return Ok(Action::Print { options, format });
    }

    Ok(match command {
        Some(command) => Action::Execute {
            options,
            command,
            args,
        },
        None => Action::Idle,
    })
}

/// Resolve with the live environment neither read nor written, and write the
/// rendered configuration to `out`.
pub fn print_config<E: ProcessEnv + ?Sized, W: Write>(
    options: &OptionMap,
    format: PrintFormat,
    env: &mut E,
    out: &mut W,
) -> Result<(), CliError> {
    let config = Envlayer::builder()
        .options(options)
        .include_process_env(false)
        .assign_to_process_env(false)
        .load_into(env)?;
    write!(out, "{}", render(&config, format))?;
    out.flush()?;
    Ok(())
}

/// Build the shell invocation for `command args…`.
///
/// The command is passed to the shell as written, so it may itself be a
/// shell snippet; the arguments are quoted so they arrive verbatim.
pub fn shell_command(command: &str, args: &[String]) -> Command {
    let line = if args.is_empty() {
        command.to_string()
    } else {
        format!("{command} {}", shell_words::join(args))
    };

    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(line);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line);
        cmd
    }
}

/// Replace the current process with `cmd`. Signals go straight to the
/// command and its exit status becomes ours; this only returns on failure.
#[cfg(unix)]
fn exec(mut cmd: Command, command: &str) -> Result<u8, CliError> {
    use std::os::unix::process::CommandExt;

    let source = cmd.exec();
    Err(CliError::Spawn {
        command: command.to_string(),
        source,
    })
}

/// Run `cmd` to completion and pass its exit code through.
#[cfg(not(unix))]
fn exec(mut cmd: Command, command: &str) -> Result<u8, CliError> {
    let status = cmd.status().map_err(|source| CliError::Spawn {
        command: command.to_string(),
        source,
    })?;
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1))
}

/// Carry out one invocation and return the process exit code.
pub fn run<E: ProcessEnv + ?Sized, W: Write>(
    args: &[String],
    env: &mut E,
    out: &mut W,
) -> Result<u8, CliError> {
    match plan(parse_command(args))? {
        Action::Print { options, format } => {
            print_config(&options, format, env, out)?;
            Ok(0)
        }
        Action::Execute {
            options,
            command,
            args,
        } => {
            Envlayer::builder().options(&options).load_into(env)?;
            tracing::debug!(%command, args = args.len(), "running command");
            exec(shell_command(&command, &args), &command)
        }
        Action::Idle => {
            tracing::debug!("no command given");
            Ok(0)
        }
    }
}
