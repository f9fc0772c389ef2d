//! Library information records returned by `Registry::describe`.

use indexmap::IndexMap;
use robotrpc_invocation::{WireMap, WireValue};

/// Synthetic entry carrying the library introduction.
pub const INTRO: &str = "__intro__";
/// Synthetic entry carrying the library initialization text.
pub const INIT: &str = "__init__";

/// Information about one keyword, or one of the synthetic entries (which only carry `doc`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordInformation {
	pub args: Option<Vec<String>>,
	pub types: Option<Vec<String>>,
	pub doc: String,
	pub tags: Option<Vec<String>>,
}

impl KeywordInformation {
	pub fn doc_only(doc: impl Into<String>) -> Self {
		Self {
			doc: doc.into(),
			..Self::default()
		}
	}

	pub fn to_wire(&self) -> WireValue {
		let mut map = WireMap::new();
		if let Some(args) = &self.args {
			map.insert("args".into(), WireValue::list(args.iter().map(String::as_str)));
		}
		if let Some(types) = &self.types {
			map.insert("types".into(), WireValue::list(types.iter().map(String::as_str)));
		}
		map.insert("doc".into(), self.doc.as_str().into());
		if let Some(tags) = &self.tags {
			map.insert("tags".into(), WireValue::list(tags.iter().map(String::as_str)));
		}
		WireValue::Map(map)
	}
}

/// Information about a whole library, keyed by `__intro__`, `__init__` and display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryInformation {
	pub entries: IndexMap<String, KeywordInformation>,
}

impl LibraryInformation {
	pub fn get(&self, name: &str) -> Option<&KeywordInformation> {
		self.entries.get(name)
	}

	/// Nested wire map, one inner map per entry.
	pub fn to_wire(&self) -> WireValue {
		WireValue::Map(self.entries.iter().map(|(name, info)| (name.clone(), info.to_wire())).collect())
	}
}
