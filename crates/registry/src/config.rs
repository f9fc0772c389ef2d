//! Server configuration.
//!
//! Every field has a default, so an empty document is a valid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration or documentation tables.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
	pub discovery: DiscoveryConfig,
	pub invocation: InvocationConfig,
	pub libraries: LibrariesConfig,
}

/// Options consulted while discovering keywords.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
	/// Accept methods marked obsolete regardless of their parameter types.
	pub accept_obsolete: bool,
}

impl Default for DiscoveryConfig {
	fn default() -> Self {
		Self { accept_obsolete: true }
	}
}

/// Options consulted while binding and invoking keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvocationConfig {
	/// Fail calls that pass more positional arguments than the keyword declares.
	pub strict_positional: bool,
}

/// Libraries instantiated at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibrariesConfig {
	/// Catalog type names, registered in order.
	pub load: Vec<String>,
}

impl RemoteConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_uses_defaults() {
		let config = RemoteConfig::from_toml_str("").unwrap();
		assert!(config.discovery.accept_obsolete);
		assert!(!config.invocation.strict_positional);
		assert!(config.libraries.load.is_empty());
	}

	#[test]
	fn parses_all_sections() {
		let config = RemoteConfig::from_toml_str(
			r#"
[discovery]
accept_obsolete = false

[invocation]
strict_positional = true

[libraries]
load = ["TestKeywords", "RunKeyword"]
"#,
		)
		.unwrap();
		assert!(!config.discovery.accept_obsolete);
		assert!(config.invocation.strict_positional);
		assert_eq!(config.libraries.load, ["TestKeywords", "RunKeyword"]);
	}

	#[test]
	fn unknown_keys_are_rejected() {
		let err = RemoteConfig::from_toml_str("[invocation]\nstrict = true\n").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn missing_file_is_io_error() {
		let err = RemoteConfig::load("/nonexistent/robotrpc.toml").unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));
	}
}
