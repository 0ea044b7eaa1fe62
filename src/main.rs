use std::io;
use std::process::ExitCode;

use clap::Parser;
use envlayer::SystemEnv;
use envlayer::cli::{self, CliArgs};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    // RUST_LOG when set, warnings otherwise.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::WARN.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    let cli = CliArgs::parse();
    let mut stdout = io::stdout().lock();

    match cli::run(&cli.args, &mut SystemEnv, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("envlayer: {e}");
            ExitCode::FAILURE
        }
    }
}
