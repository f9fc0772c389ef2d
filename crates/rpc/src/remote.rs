//! The remote-library API.
//!
//! # Role
//!
//! [`RemoteLibrary`] answers the protocol methods for any registered library. Library names
//! come from the transport (see [`library_from_path`](crate::library_from_path)); the facade
//! itself keeps no per-request state.
//!
//! # Invariants
//!
//! - Registration and lookup errors become [`Fault`]s and are logged at `error`.
//! - Keyword failures, including binding failures, are returned as a [`KeywordResult`].
//! - `__intro__` and `__init__` documentation is answered from library metadata and matches
//!   case-insensitively, before any keyword lookup.

use std::sync::Arc;

use robotrpc_invocation::{KeywordResult, WireMap, WireValue};
use robotrpc_registry::{Engine, INIT, INTRO, LibraryInformation, Registry, RegistryError};

use crate::call::{RemoteCall, RemoteMethod};
use crate::fault::Fault;

/// Remote-library facade over a shared registry.
#[derive(Debug, Clone)]
pub struct RemoteLibrary {
	registry: Arc<Registry>,
	engine: Engine,
}

impl RemoteLibrary {
	/// Creates a facade serving every library in `registry`.
	pub fn new(registry: Arc<Registry>, engine: Engine) -> Self {
		Self { registry, engine }
	}

	/// The served registry.
	pub fn registry(&self) -> &Arc<Registry> {
		&self.registry
	}

	/// The engine running keywords.
	pub fn engine(&self) -> &Engine {
		&self.engine
	}

	/// Runs keyword `name` of `library`.
	///
	/// Named argument values must not be null.
	pub fn run_keyword(
		&self,
		library: &str,
		name: &str,
		args: &[WireValue],
		kwargs: Option<&WireMap>,
	) -> Result<KeywordResult, Fault> {
		tracing::debug!(method = "run_keyword", library, keyword = name, args = args.len(), "remote call");
		if let Some(kwargs) = kwargs {
			check_named(kwargs)?;
		}
		let keyword = self
			.registry
			.lookup(library, name)
			.map_err(|err| fault(RemoteMethod::RunKeyword, err))?;
		let result = self.engine.invoke(&keyword, args, kwargs);
		tracing::debug!(%result, "run_keyword finished");
		Ok(result)
	}

	/// Display names of every keyword in `library`.
	pub fn get_keyword_names(&self, library: &str) -> Result<Vec<String>, Fault> {
		tracing::debug!(method = "get_keyword_names", library, "remote call");
		self.registry
			.list_names(library)
			.map_err(|err| fault(RemoteMethod::GetKeywordNames, err))
	}

	/// Parameter names of keyword `name`.
	pub fn get_keyword_arguments(&self, library: &str, name: &str) -> Result<Vec<String>, Fault> {
		tracing::debug!(method = "get_keyword_arguments", library, keyword = name, "remote call");
		self.registry
			.lookup(library, name)
			.map(|kw| kw.arg_names())
			.map_err(|err| fault(RemoteMethod::GetKeywordArguments, err))
	}

	/// Wire type names of the parameters of keyword `name`.
	pub fn get_keyword_types(&self, library: &str, name: &str) -> Result<Vec<String>, Fault> {
		tracing::debug!(method = "get_keyword_types", library, keyword = name, "remote call");
		self.registry
			.lookup(library, name)
			.map(|kw| kw.arg_types())
			.map_err(|err| fault(RemoteMethod::GetKeywordTypes, err))
	}

	/// Tags of keyword `name`.
	pub fn get_keyword_tags(&self, library: &str, name: &str) -> Result<Vec<String>, Fault> {
		tracing::debug!(method = "get_keyword_tags", library, keyword = name, "remote call");
		self.registry
			.lookup(library, name)
			.map(|kw| kw.tags().to_vec())
			.map_err(|err| fault(RemoteMethod::GetKeywordTags, err))
	}

	/// Documentation of keyword `name`, or the library introduction / initialization text
	/// for `__intro__` / `__init__`.
	pub fn get_keyword_documentation(&self, library: &str, name: &str) -> Result<String, Fault> {
		tracing::debug!(method = "get_keyword_documentation", library, keyword = name, "remote call");
		let method = RemoteMethod::GetKeywordDocumentation;
		if name.eq_ignore_ascii_case(INTRO) || name.eq_ignore_ascii_case(INIT) {
			let entry = self.registry.library(library).map_err(|err| fault(method, err))?;
			let info = entry.info();
			let text = if name.eq_ignore_ascii_case(INTRO) {
				&info.introduction
			} else {
				&info.initialization
			};
			return Ok(text.clone());
		}
		self.registry
			.lookup(library, name)
			.map(|kw| kw.documentation().to_string())
			.map_err(|err| fault(method, err))
	}

	/// Complete information about `library`.
	pub fn get_library_information(&self, library: &str) -> Result<LibraryInformation, Fault> {
		tracing::debug!(method = "get_library_information", library, "remote call");
		self.registry
			.describe(library)
			.map_err(|err| fault(RemoteMethod::GetLibraryInformation, err))
	}

	/// Names of all registered libraries.
	pub fn get_loaded_libraries(&self) -> Vec<String> {
		tracing::debug!(method = "get_loaded_libraries", "remote call");
		self.registry.list_libraries()
	}

	/// Validates the raw parameters of `call` and routes it to the matching method.
	pub fn dispatch(&self, call: &RemoteCall) -> Result<WireValue, Fault> {
		let Some(method) = RemoteMethod::from_name(&call.method) else {
			tracing::error!(method = %call.method, path = %call.path, "unknown remote method");
			return Err(Fault::new(format!("Method '{}' is not supported.", call.method)));
		};
		let library = call.library();
		let params = call.params.as_slice();

		match method {
			RemoteMethod::RunKeyword => {
				let (name, args, kwargs) = run_keyword_params(params)?;
				self.run_keyword(&library, name, args, kwargs).map(|result| result.to_wire())
			}
			RemoteMethod::GetKeywordNames => self.get_keyword_names(&library).map(string_list),
			RemoteMethod::GetKeywordArguments => {
				let name = keyword_param(method, params)?;
				self.get_keyword_arguments(&library, name).map(string_list)
			}
			RemoteMethod::GetKeywordTypes => {
				let name = keyword_param(method, params)?;
				self.get_keyword_types(&library, name).map(string_list)
			}
			RemoteMethod::GetKeywordTags => {
				let name = keyword_param(method, params)?;
				self.get_keyword_tags(&library, name).map(string_list)
			}
			RemoteMethod::GetKeywordDocumentation => {
				let name = keyword_param(method, params)?;
				self.get_keyword_documentation(&library, name).map(WireValue::String)
			}
			RemoteMethod::GetLibraryInformation => {
				self.get_library_information(&library).map(|info| info.to_wire())
			}
			RemoteMethod::GetLoadedLibraries => Ok(string_list(self.get_loaded_libraries())),
		}
	}
}

fn fault(method: RemoteMethod, err: RegistryError) -> Fault {
	tracing::error!(%method, %err, "remote call failed");
	Fault::from(err)
}

fn check_named(kwargs: &WireMap) -> Result<(), Fault> {
	match kwargs.values().position(|value| *value == WireValue::Null) {
		Some(index) => Err(Fault::new(format!("Named argument [{index}].Value is null."))),
		None => Ok(()),
	}
}

/// `run_keyword` takes a name, a positional list and an optional named-argument map.
fn run_keyword_params(params: &[WireValue]) -> Result<(&str, &[WireValue], Option<&WireMap>), Fault> {
	let [name, args, rest @ ..] = params else {
		return Err(Fault::new("Insufficient parameters provided to run_keyword."));
	};
	let WireValue::String(name) = name else {
		return Err(Fault::new("First parameter must be a string (keyword name)."));
	};
	let WireValue::List(args) = args else {
		return Err(Fault::new("Second parameter must be an array (positional arguments)."));
	};
	let kwargs = match rest.first() {
		None => None,
		Some(WireValue::Map(map)) => Some(map),
		Some(_) => return Err(Fault::new("Third parameter must be a struct (named arguments).")),
	};
	Ok((name.as_str(), args.as_slice(), kwargs))
}

fn keyword_param(method: RemoteMethod, params: &[WireValue]) -> Result<&str, Fault> {
	match params.first() {
		Some(WireValue::String(name)) => Ok(name.as_str()),
		Some(_) => Err(Fault::new("First parameter must be a string (keyword name).")),
		None => Err(Fault::new(format!("Insufficient parameters provided to {method}."))),
	}
}

fn string_list(items: Vec<String>) -> WireValue {
	WireValue::List(items.into_iter().map(WireValue::String).collect())
}
