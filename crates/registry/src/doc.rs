//! Keyword documentation sources.
//!
//! # Role
//!
//! A [`DocSource`] supplies structured documentation per method (summary, remarks,
//! per-parameter text, return text). When a library provides one, keyword documentation is
//! generated from it; otherwise the inline text given to the builder is used verbatim.
//!
//! [`DocTable`] is the bundled source, read from TOML:
//!
//! ```toml
//! [methods.String_ParameterType]
//! summary = "Echoes its input."
//! returns = "The input."
//!
//! [methods.String_ParameterType.params]
//! value = "Text to echo."
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use indexmap::IndexMap;
use robotrpc_invocation::{ParamSpec, TypeDesc};
use serde::Deserialize;

use crate::config::ConfigError;

/// Structured documentation of one method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MethodDocs {
	pub summary: String,
	pub remarks: String,
	/// Parameter name to description. Names match case-insensitively.
	pub params: IndexMap<String, String>,
	pub returns: String,
}

/// Provides [`MethodDocs`] keyed by method name.
pub trait DocSource: Send + Sync {
	fn method_docs(&self, method: &str) -> Option<MethodDocs>;
}

/// TOML-backed [`DocSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocTable {
	methods: HashMap<String, MethodDocs>,
}

impl DocTable {
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

	pub fn insert(&mut self, method: impl Into<String>, docs: MethodDocs) {
		self.methods.insert(method.into(), docs);
	}

	pub fn len(&self) -> usize {
		self.methods.len()
	}

	pub fn is_empty(&self) -> bool {
		self.methods.is_empty()
	}
}

impl DocSource for DocTable {
	fn method_docs(&self, method: &str) -> Option<MethodDocs> {
		self.methods.get(method).cloned()
	}
}

/// Renders generated documentation for a keyword.
pub(crate) fn render(docs: &MethodDocs, params: &[ParamSpec], return_type: &TypeDesc) -> String {
	let mut out = String::new();
	if !docs.summary.is_empty() {
		let _ = writeln!(out, "Summary: {}", docs.summary);
	}
	if !docs.remarks.is_empty() {
		let _ = writeln!(out, "\nRemarks: {}", docs.remarks);
	}

	let described: Vec<_> = params
		.iter()
		.filter_map(|param| {
			docs.params
				.iter()
				.find(|(name, _)| name.eq_ignore_ascii_case(&param.name))
				.map(|(_, text)| (param, text))
		})
		.collect();
	if !described.is_empty() {
		out.push_str("\nParameter information:\n");
		for (param, text) in described {
			let _ = writeln!(out, "\t{}: {}\n\t\t{text}", param.arg_spec(), param.ty);
		}
	}

	let _ = write!(out, "\nReturns: {return_type}");
	if !docs.returns.is_empty() {
		let _ = write!(out, "\n\t{}", docs.returns);
	}
	out.push('\n');
	out
}
