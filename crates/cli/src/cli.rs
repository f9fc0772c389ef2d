use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "robotrpc")]
#[command(about = "Host keyword libraries and call them through the remote-library API")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (TOML)
	#[arg(short, long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
	/// List loaded libraries and their keywords
	List,
	/// Print the library information of LIBRARY
	Describe {
		/// Library name
		library: String,
	},
	/// Run KEYWORD of LIBRARY
	Run {
		/// Library name
		library: String,
		/// Keyword display name (case-insensitive)
		keyword: String,
		/// Positional arguments; JSON when they parse as JSON, text otherwise
		#[arg(allow_negative_numbers = true)]
		args: Vec<String>,
		/// Named argument, repeatable
		#[arg(long = "named", value_name = "NAME=VALUE", value_parser = parse_named)]
		named: Vec<(String, String)>,
	},
	/// Send a raw protocol request, e.g. `call /Demo get_keyword_arguments '"ADD"'`
	Call {
		/// Request path naming the library
		path: String,
		/// Protocol method
		method: String,
		/// Protocol parameters; JSON when they parse as JSON, text otherwise
		#[arg(allow_negative_numbers = true)]
		params: Vec<String>,
	},
}

fn parse_named(input: &str) -> Result<(String, String), String> {
	match input.split_once('=') {
		Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
		_ => Err(format!("expected NAME=VALUE, got '{input}'")),
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn run_collects_named_arguments() {
		let cli = Cli::try_parse_from([
			"robotrpc", "run", "Demo", "add", "1", "--named", "right=2", "--named", "x==",
		])
		.unwrap();
		assert_eq!(
			cli.command,
			Command::Run {
				library: "Demo".into(),
				keyword: "add".into(),
				args: vec!["1".into()],
				named: vec![("right".into(), "2".into()), ("x".into(), "=".into())],
			}
		);
	}

	#[test]
	fn named_arguments_need_a_name() {
		assert!(Cli::try_parse_from(["robotrpc", "run", "Demo", "add", "--named", "=1"]).is_err());
		assert!(Cli::try_parse_from(["robotrpc", "run", "Demo", "add", "--named", "novalue"]).is_err());
	}
}
