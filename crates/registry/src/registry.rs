//! The library registry.
//!
//! # Role
//!
//! Maps library names to their discovered keywords. Reads (lookup, listing, describe) load
//! an immutable snapshot without locking; registration builds a new snapshot and publishes
//! it atomically.
//!
//! # Invariants
//!
//! - A library name is registered at most once. Re-registration is a logged no-op and runs
//!   no discovery (see `tests::reregistration_is_a_noop`).
//! - Registration is serialized by a single writer lock; discovery runs inside it.
//! - Display names are matched case-insensitively.
//! - Duplicate display names are reported by [`Registry::describe`], not at registration.

use std::sync::Arc;

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::catalog::LibraryCatalog;
use crate::config::DiscoveryConfig;
use crate::discovery::discover;
use crate::error::RegistryError;
use crate::info::{INIT, INTRO, KeywordInformation, LibraryInformation};
use crate::keyword::Keyword;
use crate::library::{Library, LibraryInfo};

/// A registered library and its keywords.
#[derive(Debug)]
pub struct LibraryEntry {
	name: String,
	info: LibraryInfo,
	keywords: Vec<Arc<Keyword>>,
}

impl LibraryEntry {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn info(&self) -> &LibraryInfo {
		&self.info
	}

	pub fn keywords(&self) -> &[Arc<Keyword>] {
		&self.keywords
	}

	/// Finds a keyword by display name, ignoring case.
	///
	/// Display names are stored upper-cased, so only `name` is folded.
	pub fn keyword(&self, name: &str) -> Option<&Arc<Keyword>> {
		let wanted = name.to_uppercase();
		self.keywords.iter().find(|kw| kw.display_name() == wanted)
	}
}

/// Result of [`Registry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
	/// The library was new; `keywords` descriptors were discovered.
	Registered { keywords: usize },
	/// A library of the same name was already present. Nothing changed.
	AlreadyRegistered,
}

type Libraries = IndexMap<String, Arc<LibraryEntry>>;

/// Thread-safe library registry.
pub struct Registry {
	snap: ArcSwap<Libraries>,
	write: Mutex<()>,
	config: DiscoveryConfig,
}

impl Default for Registry {
	fn default() -> Self {
		Self::new(DiscoveryConfig::default())
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("libraries", &self.list_libraries())
			.field("config", &self.config)
			.finish()
	}
}

impl Registry {
	pub fn new(config: DiscoveryConfig) -> Self {
		Self {
			snap: ArcSwap::from_pointee(Libraries::new()),
			write: Mutex::new(()),
			config,
		}
	}

	/// Registers `instance` under [`Library::name`].
	pub fn register<L: Library>(&self, instance: L) -> Result<RegisterOutcome, RegistryError> {
		self.register_arc(Arc::new(instance))
	}

	/// Registers a shared instance.
	pub fn register_arc<L: Library>(&self, instance: Arc<L>) -> Result<RegisterOutcome, RegistryError> {
		let name = L::name();
		if name.is_empty() {
			return Err(RegistryError::EmptyLibraryName);
		}

		let _guard = self.write.lock();
		let current = self.snap.load_full();
		if current.contains_key(&name) {
			tracing::debug!(library = %name, "library already registered");
			return Ok(RegisterOutcome::AlreadyRegistered);
		}

		let keywords = discover(instance, &self.config);
		tracing::debug!(
			library = %name,
			keywords = ?keywords.iter().map(|kw| kw.display_name()).collect::<Vec<_>>(),
			"registered library"
		);
		let count = keywords.len();
		let entry = Arc::new(LibraryEntry {
			name: name.clone(),
			info: L::info(),
			keywords,
		});

		let mut next = Libraries::clone(&current);
		next.insert(name, entry);
		self.snap.store(Arc::new(next));
		Ok(RegisterOutcome::Registered { keywords: count })
	}

	/// Constructs and registers a default instance of `L`.
	pub fn register_default<L: Library + Default>(&self) -> Result<RegisterOutcome, RegistryError> {
		self.register(L::default())
	}

	/// Constructs and registers the catalog entry named `type_name`.
	pub fn register_from_catalog(&self, catalog: &LibraryCatalog, type_name: &str) -> Result<RegisterOutcome, RegistryError> {
		catalog.register_into(self, type_name)
	}

	/// Returns the named library.
	pub fn library(&self, name: &str) -> Result<Arc<LibraryEntry>, RegistryError> {
		if name.is_empty() {
			return Err(RegistryError::EmptyLibraryName);
		}
		self.snap
			.load()
			.get(name)
			.cloned()
			.ok_or_else(|| RegistryError::UnknownLibrary(name.to_string()))
	}

	/// Finds a keyword by library name and display name (case-insensitive).
	pub fn lookup(&self, library: &str, keyword: &str) -> Result<Arc<Keyword>, RegistryError> {
		let entry = self.library(library)?;
		entry.keyword(keyword).cloned().ok_or_else(|| RegistryError::UnknownKeyword {
			library: library.to_string(),
			keyword: keyword.to_string(),
		})
	}

	/// Display names of a library's keywords, in discovery order.
	pub fn list_names(&self, library: &str) -> Result<Vec<String>, RegistryError> {
		let entry = self.library(library)?;
		Ok(entry.keywords.iter().map(|kw| kw.display_name().to_string()).collect())
	}

	/// Registered library names, in registration order.
	pub fn list_libraries(&self) -> Vec<String> {
		self.snap.load().keys().cloned().collect()
	}

	pub fn is_registered(&self, library: &str) -> bool {
		self.snap.load().contains_key(library)
	}

	/// Full information for a library: `__intro__`, `__init__`, then every keyword.
	pub fn describe(&self, library: &str) -> Result<LibraryInformation, RegistryError> {
		let entry = self.library(library)?;
		let mut info = LibraryInformation::default();
		info.entries
			.insert(INTRO.to_string(), KeywordInformation::doc_only(&entry.info.introduction));
		info.entries
			.insert(INIT.to_string(), KeywordInformation::doc_only(&entry.info.initialization));

		for kw in &entry.keywords {
			let record = KeywordInformation {
				args: Some(kw.arg_specs()),
				types: Some(kw.arg_types()),
				doc: kw.documentation().to_string(),
				tags: Some(kw.tags().to_vec()),
			};
			if info.entries.insert(kw.display_name().to_string(), record).is_some() {
				return Err(RegistryError::DuplicateKeyword(kw.display_name().to_string()));
			}
		}
		Ok(info)
	}
}
