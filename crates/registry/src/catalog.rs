//! Library catalog.
//!
//! Maps type names to constructors so that libraries can be instantiated by name, e.g. from
//! the `[libraries] load` list of the configuration.

use indexmap::IndexMap;

use crate::error::{ConstructError, RegistryError};
use crate::library::Library;
use crate::registry::{RegisterOutcome, Registry};

type Loader = Box<dyn Fn(&Registry) -> Result<RegisterOutcome, RegistryError> + Send + Sync>;

/// Named library constructors.
#[derive(Default)]
pub struct LibraryCatalog {
	loaders: IndexMap<String, Loader>,
}

impl std::fmt::Debug for LibraryCatalog {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.loaders.keys()).finish()
	}
}

impl LibraryCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `L` under [`Library::name`], built by `ctor`.
	pub fn add<L, F>(&mut self, ctor: F) -> &mut Self
	where
		L: Library,
		F: Fn() -> Result<L, ConstructError> + Send + Sync + 'static,
	{
		let type_name = L::name();
		let key = type_name.clone();
		self.loaders.insert(
			key,
			Box::new(move |registry: &Registry| {
				let instance = ctor().map_err(|source| RegistryError::Construction {
					type_name: type_name.clone(),
					source,
				})?;
				registry.register(instance)
			}),
		);
		self
	}

	/// Adds `L`, built with [`Default`].
	pub fn add_default<L: Library + Default>(&mut self) -> &mut Self {
		self.add::<L, _>(|| Ok(L::default()))
	}

	pub fn contains(&self, type_name: &str) -> bool {
		self.loaders.contains_key(type_name)
	}

	/// Known type names, in insertion order.
	pub fn type_names(&self) -> impl Iterator<Item = &str> {
		self.loaders.keys().map(String::as_str)
	}

	pub(crate) fn register_into(&self, registry: &Registry, type_name: &str) -> Result<RegisterOutcome, RegistryError> {
		if type_name.is_empty() {
			return Err(RegistryError::EmptyTypeName);
		}
		let loader = self
			.loaders
			.get(type_name)
			.ok_or_else(|| RegistryError::TypeNotFound(type_name.to_string()))?;
		tracing::debug!(type_name, "loading library from catalog");
		loader(registry)
	}
}
