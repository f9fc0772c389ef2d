//! Errors raised while binding a call and the marker failures keywords raise.

/// Argument binding failure. The engine reports these as fatal keyword failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
	/// A named argument matched no parameter (names match exactly).
	#[error("Unexpected named argument '{name}' for {keyword}. Expected one of: {expected}")]
	UnknownNamedArgument {
		name: String,
		keyword: String,
		/// Declared parameter names, comma separated.
		expected: String,
	},
	/// A required parameter was left unset after positional, named and default binding.
	#[error("Missing required argument '{name}' for {keyword}.")]
	MissingArgument { name: String, keyword: String },
	/// More positional arguments than parameters. Only raised in strict positional mode.
	#[error("Too many positional arguments for {keyword}: expected at most {expected}, got {given}.")]
	ExcessPositional { keyword: String, expected: usize, given: usize },
}

/// A keyword failure after which the client should continue the test.
///
/// Return it (through `anyhow`) from a keyword body to produce `continuable=true`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ContinuableFailure {
	message: String,
}

impl ContinuableFailure {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

/// A keyword failure after which the client should stop the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FatalFailure {
	message: String,
}

impl FatalFailure {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}
