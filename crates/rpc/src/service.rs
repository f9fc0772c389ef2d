//! `tower_service::Service` adapter.

use std::future::{Ready, ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use robotrpc_invocation::WireValue;
use tower_service::Service;

use crate::call::RemoteCall;
use crate::fault::Fault;
use crate::remote::RemoteLibrary;

/// Serves [`RemoteCall`]s through [`RemoteLibrary::dispatch`].
///
/// Keywords run on the calling task and the returned future is already complete. Transports
/// that must not block their executor should call the service from a blocking context.
#[derive(Debug, Clone)]
pub struct RemoteService {
	library: Arc<RemoteLibrary>,
}

impl RemoteService {
	/// Wraps a shared facade.
	pub fn new(library: Arc<RemoteLibrary>) -> Self {
		Self { library }
	}

	/// The wrapped facade.
	pub fn library(&self) -> &RemoteLibrary {
		&self.library
	}
}

impl Service<RemoteCall> for RemoteService {
	type Response = WireValue;
	type Error = Fault;
	type Future = Ready<Result<WireValue, Fault>>;

	fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		Poll::Ready(Ok(()))
	}

	fn call(&mut self, req: RemoteCall) -> Self::Future {
		ready(self.library.dispatch(&req))
	}
}
