//! Keyword libraries.
//!
//! A library is any type implementing [`Library`]. Instead of runtime reflection, the type
//! declares its keyword table once through [`Library::keywords`], naming each method and its
//! parameters; discovery then filters that table exactly as it would filter reflected methods.

use std::sync::Arc;

use crate::doc::DocSource;
use crate::keyword::KeywordSet;

/// Library-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryInfo {
	/// Text for the `__intro__` entry.
	pub introduction: String,
	/// Text for the `__init__` entry.
	pub initialization: String,
	/// Only methods carrying the explicit keyword marker become keywords.
	pub explicit_discovery: bool,
}

impl LibraryInfo {
	pub fn new(introduction: impl Into<String>, initialization: impl Into<String>) -> Self {
		Self {
			introduction: introduction.into(),
			initialization: initialization.into(),
			explicit_discovery: false,
		}
	}

	pub fn explicit(mut self) -> Self {
		self.explicit_discovery = true;
		self
	}
}

/// A type whose methods are exposed as keywords.
///
/// ```ignore
/// impl Library for Greeter {
/// 	fn keywords(set: &mut KeywordSet<Self>) {
/// 		set.method("Say_Hello", Self::say_hello).params(["name"]);
/// 	}
/// }
/// ```
pub trait Library: Send + Sync + Sized + 'static {
	/// Name the library registers under. Defaults to the unqualified type name.
	fn name() -> String {
		short_type_name::<Self>().to_string()
	}

	fn info() -> LibraryInfo {
		LibraryInfo::default()
	}

	/// Declares every candidate method of the library.
	fn keywords(set: &mut KeywordSet<Self>);

	/// Structured per-method documentation, if the library ships any.
	fn doc_source(&self) -> Option<Arc<dyn DocSource>> {
		None
	}
}

/// Last path segment of a type name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
	let full = std::any::type_name::<T>();
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
	use super::short_type_name;

	struct Plain;
	struct Wrapper<T>(T);

	#[test]
	fn short_names() {
		assert_eq!(short_type_name::<Plain>(), "Plain");
		assert_eq!(short_type_name::<Wrapper<Plain>>(), "Wrapper");
		assert_eq!(short_type_name::<String>(), "String");
	}
}
