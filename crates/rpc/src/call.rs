//! Raw protocol requests.
//!
//! # Role
//!
//! A transport decodes one request into a [`RemoteCall`]: the request path, the method name
//! and the untyped parameter list. [`RemoteLibrary::dispatch`](crate::RemoteLibrary::dispatch)
//! validates the parameters against the method and routes the call.
//!
//! # Invariants
//!
//! - The library name is derived from the path alone (see [`library_from_path`]).
//! - Parameter validation failures are faults, never keyword results.

use std::fmt;

use robotrpc_invocation::WireValue;

/// Protocol methods of the remote-library API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteMethod {
	/// `run_keyword(name, args[, kwargs])`.
	RunKeyword,
	/// `get_keyword_names()`.
	GetKeywordNames,
	/// `get_keyword_arguments(name)`.
	GetKeywordArguments,
	/// `get_keyword_types(name)`.
	GetKeywordTypes,
	/// `get_keyword_tags(name)`.
	GetKeywordTags,
	/// `get_keyword_documentation(name)`.
	GetKeywordDocumentation,
	/// `get_library_information()`.
	GetLibraryInformation,
	/// `get_loaded_libraries()`. Ignores the request path.
	GetLoadedLibraries,
}

impl RemoteMethod {
	/// Every method, in protocol order.
	pub const ALL: [Self; 8] = [
		Self::RunKeyword,
		Self::GetKeywordNames,
		Self::GetKeywordArguments,
		Self::GetKeywordTypes,
		Self::GetKeywordTags,
		Self::GetKeywordDocumentation,
		Self::GetLibraryInformation,
		Self::GetLoadedLibraries,
	];

	/// Wire name of the method.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::RunKeyword => "run_keyword",
			Self::GetKeywordNames => "get_keyword_names",
			Self::GetKeywordArguments => "get_keyword_arguments",
			Self::GetKeywordTypes => "get_keyword_types",
			Self::GetKeywordTags => "get_keyword_tags",
			Self::GetKeywordDocumentation => "get_keyword_documentation",
			Self::GetLibraryInformation => "get_library_information",
			Self::GetLoadedLibraries => "get_loaded_libraries",
		}
	}

	/// Resolves a wire method name. Matching is exact.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|m| m.as_str() == name)
	}
}

impl fmt::Display for RemoteMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One decoded protocol request.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCall {
	/// Request path, e.g. `/TestKeywords`.
	pub path: String,
	/// Wire method name.
	pub method: String,
	/// Positional protocol parameters.
	pub params: Vec<WireValue>,
}

impl RemoteCall {
	/// Creates a request.
	pub fn new(path: impl Into<String>, method: impl Into<String>, params: Vec<WireValue>) -> Self {
		Self {
			path: path.into(),
			method: method.into(),
			params,
		}
	}

	/// Library name addressed by [`Self::path`].
	pub fn library(&self) -> String {
		library_from_path(&self.path)
	}
}

/// Maps a request path to a library name: the segments after the root joined with `.`.
///
/// `/a/b` becomes `a.b`; empty segments are dropped, so `/` yields an empty name.
pub fn library_from_path(path: &str) -> String {
	path.split('/').filter(|segment| !segment.is_empty()).collect::<Vec<_>>().join(".")
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("/TestKeywords", "TestKeywords")]
	#[case("/a/b", "a.b")]
	#[case("/a/b/", "a.b")]
	#[case("a//b", "a.b")]
	#[case("/", "")]
	#[case("", "")]
	fn paths_map_to_library_names(#[case] path: &str, #[case] expected: &str) {
		assert_eq!(library_from_path(path), expected);
	}

	#[test]
	fn method_names_round_trip() {
		for method in RemoteMethod::ALL {
			assert_eq!(RemoteMethod::from_name(method.as_str()), Some(method));
		}
		assert_eq!(RemoteMethod::from_name("Run_Keyword"), None);
	}
}
