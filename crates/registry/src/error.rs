//! Registration and lookup errors.

/// Boxed error returned by library constructors.
pub type ConstructError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced to callers of the registry. Transports turn these into protocol faults.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	#[error("Specified typename is null or empty")]
	EmptyLibraryName,

	#[error("Type {0} not found in loaded keywords")]
	UnknownLibrary(String),

	#[error("Keyword {keyword} not found in type {library}")]
	UnknownKeyword { library: String, keyword: String },

	/// Two keywords of one library share a display name. Raised when information is queried.
	#[error("Keyword name '{0}' exists more than once!")]
	DuplicateKeyword(String),

	#[error("Library type name is null or empty")]
	EmptyTypeName,

	#[error("Type '{0}' not found in library catalog")]
	TypeNotFound(String),

	#[error("Could not create instance of {type_name}: {source}")]
	Construction {
		type_name: String,
		#[source]
		source: ConstructError,
	},
}
