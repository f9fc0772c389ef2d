//! Keyword discovery, registry and invocation.
//!
//! # Overview
//!
//! - [`Library`]: a type exposing keywords through a declared [`KeywordSet`].
//! - [`Registry`]: library name to keyword descriptors; idempotent registration, lock-free
//!   reads.
//! - [`Engine`]: binds, runs and classifies one keyword call into a
//!   [`KeywordResult`](robotrpc_invocation::KeywordResult).
//! - [`LibraryCatalog`]: constructs libraries by type name.
//! - [`RemoteConfig`]: TOML configuration for discovery, invocation and startup libraries.
//!
//! # Example
//!
//! ```ignore
//! let registry = Registry::default();
//! registry.register(TestKeywords)?;
//! let keyword = registry.lookup("TestKeywords", "string parametertype")?;
//! let result = Engine::default().invoke(&keyword, &["hello".into()], None);
//! ```

mod capture;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod doc;
pub mod engine;
pub mod error;
pub mod handler;
pub mod info;
pub mod keyword;
pub mod library;
pub mod registry;

#[cfg(test)]
mod test_fixtures;

pub use catalog::LibraryCatalog;
pub use config::{ConfigError, DiscoveryConfig, InvocationConfig, LibrariesConfig, RemoteConfig};
pub use doc::{DocSource, DocTable, MethodDocs};
pub use engine::Engine;
pub use error::{ConstructError, RegistryError};
pub use handler::Handler;
pub use info::{INIT, INTRO, KeywordInformation, LibraryInformation};
pub use keyword::{Keyword, KeywordSet, MethodDecl, display_name};
pub use library::{Library, LibraryInfo};
pub use registry::{LibraryEntry, RegisterOutcome, Registry};
