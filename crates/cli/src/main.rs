//! robotrpc binary.
//!
//! Loads the configuration, registers libraries from the built-in catalog and answers one
//! remote-library request per invocation, printing the wire response as JSON.

use std::process::ExitCode;

use clap::Parser;
use robotrpc_registry::RemoteConfig;

mod app;
mod cli;
mod demo;

fn main() -> anyhow::Result<ExitCode> {
	let cli = cli::Cli::parse();
	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => RemoteConfig::load(path)?,
		None => RemoteConfig::default(),
	};
	tracing::debug!(?config, "configuration loaded");

	let remote = app::build(&config, &demo::catalog())?;
	let outcome = app::execute(&remote, &cli.command)?;
	println!("{}", serde_json::to_string_pretty(&outcome.value)?);

	Ok(if outcome.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("robotrpc=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
