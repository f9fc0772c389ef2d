//! Builds the served registry from configuration and executes subcommands.

use std::sync::Arc;

use anyhow::Context as _;
use robotrpc_invocation::{KeywordStatus, WireMap, WireValue};
use robotrpc_registry::{Engine, LibraryCatalog, RemoteConfig, Registry};
use robotrpc_rpc::{RemoteCall, RemoteLibrary, RemoteService};
use tower_service::Service;

use crate::cli::Command;

/// Registers the configured libraries, or every catalog entry when none are configured.
pub fn build(config: &RemoteConfig, catalog: &LibraryCatalog) -> anyhow::Result<RemoteLibrary> {
	let registry = Registry::new(config.discovery.clone());
	let names: Vec<String> = if config.libraries.load.is_empty() {
		catalog.type_names().map(str::to_string).collect()
	} else {
		config.libraries.load.clone()
	};

	for name in &names {
		let outcome = registry
			.register_from_catalog(catalog, name)
			.with_context(|| format!("loading library {name}"))?;
		tracing::info!(library = %name, ?outcome, "library loaded");
	}

	Ok(RemoteLibrary::new(Arc::new(registry), Engine::new(config.invocation.clone())))
}

/// A command's printable value and whether it counts as success.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
	pub value: WireValue,
	pub success: bool,
}

impl Outcome {
	fn ok(value: WireValue) -> Self {
		Self { value, success: true }
	}
}

/// Executes `command`. Faults are errors; failed keywords are unsuccessful outcomes.
pub fn execute(remote: &RemoteLibrary, command: &Command) -> anyhow::Result<Outcome> {
	match command {
		Command::List => {
			let mut libraries = WireMap::new();
			for library in remote.get_loaded_libraries() {
				let names = remote.get_keyword_names(&library)?;
				libraries.insert(library, WireValue::list(names));
			}
			Ok(Outcome::ok(WireValue::Map(libraries)))
		}
		Command::Describe { library } => Ok(Outcome::ok(remote.get_library_information(library)?.to_wire())),
		Command::Run {
			library,
			keyword,
			args,
			named,
		} => {
			let args: Vec<WireValue> = args.iter().map(|arg| parse_value(arg)).collect();
			let named: Option<WireMap> = (!named.is_empty())
				.then(|| named.iter().map(|(name, value)| (name.clone(), parse_value(value))).collect());
			let result = remote.run_keyword(library, keyword, &args, named.as_ref())?;
			Ok(Outcome {
				success: result.status == KeywordStatus::Pass,
				value: result.to_wire(),
			})
		}
		Command::Call { path, method, params } => {
			let call = RemoteCall::new(path.as_str(), method.as_str(), params.iter().map(|p| parse_value(p)).collect());
			let mut service = RemoteService::new(Arc::new(remote.clone()));
			let value = service.call(call).into_inner()?;
			let success = match value.as_map().and_then(|map| map.get("status")) {
				Some(status) => status.as_str() == Some(KeywordStatus::Pass.as_str()),
				None => true,
			};
			Ok(Outcome { value, success })
		}
	}
}

/// JSON when `input` parses as JSON, the raw text otherwise.
pub fn parse_value(input: &str) -> WireValue {
	serde_json::from_str(input).unwrap_or_else(|_| WireValue::String(input.to_string()))
}
