//! Remote-library API facade.
//!
//! This crate exposes a [`Registry`](robotrpc_registry::Registry) and an
//! [`Engine`](robotrpc_registry::Engine) through the remote-library protocol methods:
//! * [`RemoteLibrary`]: typed entry points (`run_keyword`, `get_keyword_names`, ...)
//! * [`RemoteCall`]: a raw request (path, method name, parameter list) as a transport decodes it
//! * [`RemoteService`]: `tower_service::Service` adapter over [`RemoteLibrary::dispatch`]
//! * [`Fault`]: protocol-level fault for lookup, registration and request errors
//!
//! Keyword failures are not faults. They travel inside the `run_keyword` response map.

#![warn(missing_docs)]

pub mod call;
pub mod fault;
pub mod remote;
pub mod service;

pub use call::{RemoteCall, RemoteMethod, library_from_path};
pub use fault::{FAULT_CODE, Fault};
pub use remote::RemoteLibrary;
pub use service::RemoteService;
