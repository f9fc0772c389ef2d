//! Keyword declarations and descriptors.
//!
//! # Role
//!
//! [`KeywordSet`] is the registration-time table a [`Library`](crate::Library) fills in:
//! one [`MethodDecl`] per candidate method, carrying what reflection and attributes would
//! otherwise provide (parameter names, defaults, documentation, tags, markers).
//! Discovery turns accepted declarations into [`Keyword`] descriptors.
//!
//! # Invariants
//!
//! - A [`Keyword`] is immutable after discovery, apart from its memoized documentation.
//! - Documentation is rendered at most once per descriptor.

use std::fmt;
use std::sync::{Arc, OnceLock};

use robotrpc_invocation::{CallFrame, ParamSpec, TraceSink, TypeDesc, WireValue};

use crate::doc::{self, MethodDocs};
use crate::handler::Handler;

pub(crate) type KeywordFn<L> =
	Arc<dyn Fn(&L, &mut TraceSink, &CallFrame) -> anyhow::Result<Option<WireValue>> + Send + Sync>;

type BoundFn = Arc<dyn Fn(&mut TraceSink, &CallFrame) -> anyhow::Result<Option<WireValue>> + Send + Sync>;

/// Client-facing name of a method: underscores become spaces, upper-cased.
pub fn display_name(method: &str) -> String {
	method.replace('_', " ").to_uppercase()
}

/// Candidate keyword methods of library type `L`.
pub struct KeywordSet<L> {
	pub(crate) decls: Vec<MethodDecl<L>>,
}

impl<L> Default for KeywordSet<L> {
	fn default() -> Self {
		Self { decls: Vec::new() }
	}
}

impl<L: Send + Sync + 'static> KeywordSet<L> {
	/// Declares method `name` backed by `handler`.
	///
	/// Parameter types come from the handler signature; name them with
	/// [`MethodDecl::params`].
	pub fn method<F, Args>(&mut self, name: impl Into<String>, handler: F) -> &mut MethodDecl<L>
	where
		F: Handler<L, Args>,
		Args: 'static,
	{
		let call: KeywordFn<L> = Arc::new(move |library: &L, trace: &mut TraceSink, frame: &CallFrame| {
			handler.call(library, trace, frame)
		});
		self.decls.push(MethodDecl {
			name: name.into(),
			param_types: F::param_types(),
			param_names: Vec::new(),
			defaults: Vec::new(),
			return_type: F::return_type(),
			doc: None,
			tags: Vec::new(),
			marked: false,
			obsolete: false,
			public: true,
			call,
		});
		let index = self.decls.len() - 1;
		&mut self.decls[index]
	}

	pub fn len(&self) -> usize {
		self.decls.len()
	}

	pub fn is_empty(&self) -> bool {
		self.decls.is_empty()
	}
}

/// Registration-time metadata of one method.
pub struct MethodDecl<L> {
	pub(crate) name: String,
	pub(crate) param_types: Vec<TypeDesc>,
	pub(crate) param_names: Vec<String>,
	pub(crate) defaults: Vec<(String, WireValue)>,
	pub(crate) return_type: TypeDesc,
	pub(crate) doc: Option<String>,
	pub(crate) tags: Vec<String>,
	pub(crate) marked: bool,
	pub(crate) obsolete: bool,
	pub(crate) public: bool,
	pub(crate) call: KeywordFn<L>,
}

impl<L> MethodDecl<L> {
	/// Names the parameters, in declaration order.
	pub fn params<I, S>(&mut self, names: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.param_names = names.into_iter().map(Into::into).collect();
		self
	}

	/// Makes parameter `name` optional with the given default.
	pub fn default(&mut self, name: impl Into<String>, value: impl Into<WireValue>) -> &mut Self {
		self.defaults.push((name.into(), value.into()));
		self
	}

	/// Makes parameter `name` optional with a null default.
	pub fn optional(&mut self, name: impl Into<String>) -> &mut Self {
		self.defaults.push((name.into(), WireValue::Null));
		self
	}

	pub fn doc(&mut self, doc: impl Into<String>) -> &mut Self {
		self.doc = Some(doc.into());
		self
	}

	pub fn tags<I, S>(&mut self, tags: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	/// Explicit keyword marker with its documentation and tags.
	pub fn keyword<I, S>(&mut self, doc: impl Into<String>, tags: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.marked = true;
		self.doc(doc).tags(tags)
	}

	pub fn obsolete(&mut self) -> &mut Self {
		self.obsolete = true;
		self
	}

	/// Marks the method non-public. Non-public methods never become keywords.
	pub fn private(&mut self) -> &mut Self {
		self.public = false;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl<L> fmt::Debug for MethodDecl<L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MethodDecl")
			.field("name", &self.name)
			.field("param_types", &self.param_types)
			.field("param_names", &self.param_names)
			.field("return_type", &self.return_type)
			.field("marked", &self.marked)
			.field("obsolete", &self.obsolete)
			.field("public", &self.public)
			.finish_non_exhaustive()
	}
}

/// A discovered keyword, bound to its library instance.
pub struct Keyword {
	method: String,
	display_name: String,
	params: Vec<ParamSpec>,
	return_type: TypeDesc,
	tags: Vec<String>,
	inline_doc: Option<String>,
	method_docs: Option<MethodDocs>,
	doc: OnceLock<String>,
	call: BoundFn,
}

impl Keyword {
	pub(crate) fn new<L: Send + Sync + 'static>(
		decl: MethodDecl<L>,
		params: Vec<ParamSpec>,
		instance: Arc<L>,
		method_docs: Option<MethodDocs>,
	) -> Self {
		let inner = decl.call;
		let call: BoundFn = Arc::new(move |trace: &mut TraceSink, frame: &CallFrame| inner(instance.as_ref(), trace, frame));
		Self {
			display_name: display_name(&decl.name),
			method: decl.name,
			params,
			return_type: decl.return_type,
			tags: decl.tags,
			inline_doc: decl.doc,
			method_docs,
			doc: OnceLock::new(),
			call,
		}
	}

	/// Underlying method name, e.g. `String_ParameterType`.
	pub fn method_name(&self) -> &str {
		&self.method
	}

	/// Client-facing name, e.g. `STRING PARAMETERTYPE`.
	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	pub fn params(&self) -> &[ParamSpec] {
		&self.params
	}

	pub fn return_type(&self) -> &TypeDesc {
		&self.return_type
	}

	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	/// Plain parameter names.
	pub fn arg_names(&self) -> Vec<String> {
		self.params.iter().map(|p| p.name.clone()).collect()
	}

	/// Argument specs: required names, then `name=default` for optional ones.
	pub fn arg_specs(&self) -> Vec<String> {
		let required = self.params.iter().filter(|p| !p.is_optional());
		let optional = self.params.iter().filter(|p| p.is_optional());
		required.chain(optional).map(ParamSpec::arg_spec).collect()
	}

	/// Wire type names of the parameters.
	pub fn arg_types(&self) -> Vec<String> {
		self.params.iter().map(|p| p.ty.wire_name()).collect()
	}

	/// Full documentation text, rendered on first access.
	pub fn documentation(&self) -> &str {
		self.doc.get_or_init(|| match (&self.method_docs, &self.inline_doc) {
			(Some(docs), _) => doc::render(docs, &self.params, &self.return_type),
			(None, Some(inline)) => inline.clone(),
			(None, None) => String::new(),
		})
	}

	pub(crate) fn call(&self, trace: &mut TraceSink, frame: &CallFrame) -> anyhow::Result<Option<WireValue>> {
		(self.call)(trace, frame)
	}
}

impl fmt::Debug for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Keyword")
			.field("method", &self.method)
			.field("display_name", &self.display_name)
			.field("params", &self.params)
			.field("return_type", &self.return_type)
			.field("tags", &self.tags)
			.finish_non_exhaustive()
	}
}
