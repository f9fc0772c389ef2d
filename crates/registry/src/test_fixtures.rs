//! Keyword libraries shared by the registry and engine tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use indexmap::IndexMap;
use robotrpc_invocation::{ContinuableFailure, FatalFailure, TraceSink};

use crate::doc::{DocSource, DocTable};
use crate::keyword::KeywordSet;
use crate::library::{Library, LibraryInfo};

/// Keywords covering the supported and unsupported signature shapes.
#[derive(Debug, Default)]
pub struct TestKeywords;

impl TestKeywords {
	fn int_return_type(&self, _: &mut TraceSink) -> i32 {
		1
	}

	fn long_return_type(&self, _: &mut TraceSink) -> i64 {
		9_000_000_000
	}

	fn string_return_type(&self, _: &mut TraceSink) -> String {
		"1".to_string()
	}

	fn double_return_type(&self, _: &mut TraceSink) -> f64 {
		1.0
	}

	fn boolean_return_type(&self, _: &mut TraceSink) -> bool {
		true
	}

	fn string_array_return_type(&self, _: &mut TraceSink) -> Box<[String]> {
		vec!["1".to_string(), "2".to_string(), "3".to_string()].into_boxed_slice()
	}

	fn void_return_type(&self, _: &mut TraceSink) {}

	fn single_return_type(&self, _: &mut TraceSink) -> f32 {
		1.0
	}

	fn string_parameter_type(&self, _: &mut TraceSink, value: String) -> String {
		value
	}

	#[allow(clippy::too_many_arguments)]
	fn optional_parameters_mixed(
		&self,
		trace: &mut TraceSink,
		arg1: String,
		arg2: i32,
		arg3: f64,
		arg4: bool,
		arg5: String,
		arg6: i32,
	) -> String {
		let text = format!("arg1={arg1}\narg2={arg2}\narg3={arg3}\narg4={arg4}\narg5={arg5}\narg6={arg6}");
		trace.line(&text);
		text
	}

	fn nullable_parameter(&self, _: &mut TraceSink, required: String, maybe: Option<i32>) -> String {
		match maybe {
			Some(v) => format!("{required}:{v}"),
			None => format!("{required}:none"),
		}
	}

	fn list_of_maps(&self, _: &mut TraceSink, rows: Vec<IndexMap<String, i32>>) -> Vec<IndexMap<String, i32>> {
		rows.into_iter()
			.map(|row| row.into_iter().map(|(k, v)| (k, v * 2)).collect())
			.collect()
	}

	fn unsupported_parameter(&self, _: &mut TraceSink, _value: u64) {}

	fn private_method(&self, _: &mut TraceSink) {}
}

impl Library for TestKeywords {
	fn info() -> LibraryInfo {
		LibraryInfo::new("This is a test library", "This is the initialization string")
	}

	fn keywords(set: &mut KeywordSet<Self>) {
		set.method("Int_ReturnType", Self::int_return_type);
		set.method("Long_ReturnType", Self::long_return_type);
		set.method("String_ReturnType", Self::string_return_type);
		set.method("Double_ReturnType", Self::double_return_type);
		set.method("Boolean_ReturnType", Self::boolean_return_type);
		set.method("StringArray_ReturnType", Self::string_array_return_type);
		set.method("Void_ReturnType", Self::void_return_type);
		set.method("Single_ReturnType", Self::single_return_type);
		set.method("String_ParameterType", Self::string_parameter_type)
			.params(["value"])
			.tags(["smoke"]);
		set.method("OptionalParameters_Mixed", Self::optional_parameters_mixed)
			.params(["arg1", "arg2", "arg3", "arg4", "arg5", "arg6"])
			.default("arg5", "optional")
			.default("arg6", -1);
		set.method("Nullable_Parameter", Self::nullable_parameter)
			.params(["required", "maybe"])
			.optional("maybe");
		set.method("List_Of_Maps", Self::list_of_maps).params(["rows"]);
		set.method("Unsupported_Parameter", Self::unsupported_parameter).params(["value"]);
		set.method("Obsolete_Method", Self::unsupported_parameter)
			.params(["value"])
			.obsolete();
		set.method("Private_Method", Self::private_method).private();
		set.method("Required_After_Optional", Self::nullable_parameter)
			.params(["required", "maybe"])
			.default("required", "x");
	}
}

/// Keywords exercising outcome classification and trace capture.
#[derive(Debug, Default)]
pub struct RunKeyword;

impl RunKeyword {
	fn no_input_no_output(&self, _: &mut TraceSink) {}

	fn throws_exception(&self, _: &mut TraceSink) -> anyhow::Result<()> {
		anyhow::bail!("A regular exception")
	}

	fn throws_fatal_exception(&self, _: &mut TraceSink) -> Result<(), FatalFailure> {
		Err(FatalFailure::new("A fatal exception"))
	}

	fn throws_continuable_exception(&self, _: &mut TraceSink) -> Result<(), ContinuableFailure> {
		Err(ContinuableFailure::new("A continuable exception"))
	}

	fn writes_trace_output(&self, trace: &mut TraceSink) {
		trace.line("First line");
		trace.line("Second line");
	}

	fn multi_thread_keyword(&self, trace: &mut TraceSink, tag: String, wait: i32) -> String {
		trace.line(format!("Waiting {tag}"));
		std::thread::sleep(Duration::from_millis(u64::try_from(wait).unwrap_or(0)));
		trace.line(format!("Done {tag}"));
		"OK".to_string()
	}

	fn logs_message(&self, trace: &mut TraceSink, tag: String, wait: i32) -> String {
		trace.line(format!("Before {tag}"));
		tracing::info!(target: "RunKeyword", "Logged {tag}");
		std::thread::sleep(Duration::from_millis(u64::try_from(wait).unwrap_or(0)));
		tracing::warn!(target: "RunKeyword", "Done {tag}");
		tag
	}

	fn panics(&self, trace: &mut TraceSink) -> i32 {
		trace.line("before panic");
		panic!("keyword exploded")
	}
}

impl Library for RunKeyword {
	fn keywords(set: &mut KeywordSet<Self>) {
		set.method("NoInputNoOutput", Self::no_input_no_output);
		set.method("ThrowsException", Self::throws_exception);
		set.method("ThrowsFatalException", Self::throws_fatal_exception);
		set.method("ThrowsContinuableException", Self::throws_continuable_exception);
		set.method("WritesTraceOutput", Self::writes_trace_output);
		set.method("MultiThreadKeyword", Self::multi_thread_keyword).params(["tag", "wait"]);
		set.method("LogsMessage", Self::logs_message).params(["tag", "wait"]);
		set.method("Panics", Self::panics);
	}
}

/// Keywords documented through a [`DocTable`] and inline text.
#[derive(Debug)]
pub struct WithDocumentation {
	docs: Arc<DocTable>,
}

pub const DOC_TABLE: &str = r#"
[methods.Add_Numbers]
summary = "Adds two numbers."
returns = "The sum."

[methods.Add_Numbers.params]
left = "First operand."
right = "Second operand."
"#;

impl Default for WithDocumentation {
	fn default() -> Self {
		let docs = DocTable::from_toml_str(DOC_TABLE).unwrap_or_default();
		Self { docs: Arc::new(docs) }
	}
}

impl WithDocumentation {
	fn add_numbers(&self, _: &mut TraceSink, left: i32, right: i32) -> i32 {
		left.wrapping_add(right)
	}

	fn inline_documented(&self, _: &mut TraceSink) {}

	fn undocumented(&self, _: &mut TraceSink) {}
}

impl Library for WithDocumentation {
	fn info() -> LibraryInfo {
		LibraryInfo::new("Documented library", "")
	}

	fn keywords(set: &mut KeywordSet<Self>) {
		set.method("Add_Numbers", Self::add_numbers)
			.params(["left", "right"])
			.default("right", 1);
		set.method("Inline_Documented", Self::inline_documented)
			.keyword("Documented inline.", ["docs", "inline"]);
		set.method("Undocumented", Self::undocumented);
	}

	fn doc_source(&self) -> Option<Arc<dyn DocSource>> {
		Some(self.docs.clone())
	}
}

/// Only marked methods become keywords.
#[derive(Debug, Default)]
pub struct ExplicitOnly;

impl ExplicitOnly {
	fn marked(&self, _: &mut TraceSink) {}

	fn unmarked(&self, _: &mut TraceSink) {}
}

impl Library for ExplicitOnly {
	fn info() -> LibraryInfo {
		LibraryInfo::default().explicit()
	}

	fn keywords(set: &mut KeywordSet<Self>) {
		set.method("Marked", Self::marked).keyword("", Vec::<String>::new());
		set.method("Unmarked", Self::unmarked);
	}
}

/// Two methods that map to the same display name.
#[derive(Debug, Default)]
pub struct Duplicates;

impl Duplicates {
	fn noop(&self, _: &mut TraceSink) {}
}

impl Library for Duplicates {
	fn keywords(set: &mut KeywordSet<Self>) {
		set.method("Same_Name", Self::noop);
		set.method("SAME name", Self::noop);
	}
}

/// Counts how often its keyword table is built.
#[derive(Debug, Default)]
pub struct Counting;

pub static COUNTING_DISCOVERIES: AtomicUsize = AtomicUsize::new(0);

impl Counting {
	fn ping(&self, _: &mut TraceSink) -> String {
		"pong".to_string()
	}
}

impl Library for Counting {
	fn keywords(set: &mut KeywordSet<Self>) {
		COUNTING_DISCOVERIES.fetch_add(1, Ordering::SeqCst);
		set.method("Ping", Self::ping);
	}
}
