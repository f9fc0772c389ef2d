//! Library shipped with the binary so that a fresh install has something to call.

use std::collections::BTreeMap;
use std::time::Duration;

use robotrpc_invocation::{ContinuableFailure, TraceSink};
use robotrpc_registry::{KeywordSet, Library, LibraryCatalog, LibraryInfo};

/// Small general-purpose keywords.
#[derive(Debug, Default)]
pub struct Demo;

impl Demo {
	fn echo(&self, _: &mut TraceSink, value: String) -> String {
		value
	}

	fn add(&self, trace: &mut TraceSink, left: i32, right: i32) -> anyhow::Result<i32> {
		trace.line(format!("{left} + {right}"));
		left.checked_add(right)
			.ok_or_else(|| anyhow::anyhow!("{left} + {right} overflows a 32-bit integer"))
	}

	fn join(&self, _: &mut TraceSink, items: Vec<String>, separator: String) -> String {
		items.join(&separator)
	}

	fn word_count(&self, _: &mut TraceSink, text: String) -> BTreeMap<String, i32> {
		let mut counts = BTreeMap::new();
		for word in text.split_whitespace() {
			*counts.entry(word.to_lowercase()).or_insert(0) += 1;
		}
		counts
	}

	fn sleep(&self, trace: &mut TraceSink, millis: i32) {
		trace.line(format!("sleeping {millis} ms"));
		std::thread::sleep(Duration::from_millis(u64::try_from(millis).unwrap_or(0)));
	}

	fn should_be_equal(&self, _: &mut TraceSink, first: String, second: String) -> Result<(), ContinuableFailure> {
		if first == second {
			Ok(())
		} else {
			Err(ContinuableFailure::new(format!("{first} != {second}")))
		}
	}
}

impl Library for Demo {
	fn info() -> LibraryInfo {
		LibraryInfo::new(
			"General purpose keywords served by the robotrpc binary.",
			"The library takes no initialization arguments.",
		)
	}

	fn keywords(set: &mut KeywordSet<Self>) {
		set.method("Echo", Self::echo)
			.params(["value"])
			.doc("Returns `value` unchanged.");
		set.method("Add", Self::add)
			.params(["left", "right"])
			.default("right", 0)
			.doc("Adds two integers and logs the operation.")
			.tags(["math"]);
		set.method("Join", Self::join)
			.params(["items", "separator"])
			.default("separator", ",")
			.doc("Joins `items` with `separator`.");
		set.method("Word_Count", Self::word_count)
			.params(["text"])
			.doc("Counts whitespace separated words, case-insensitively.");
		set.method("Sleep", Self::sleep)
			.params(["millis"])
			.doc("Blocks for `millis` milliseconds.");
		set.method("Should_Be_Equal", Self::should_be_equal)
			.params(["first", "second"])
			.doc("Fails, continuably, when the two values differ.")
			.tags(["assertion"]);
	}
}

/// Catalog of every library the binary can load by name.
pub fn catalog() -> LibraryCatalog {
	let mut catalog = LibraryCatalog::new();
	catalog.add_default::<Demo>();
	catalog
}
