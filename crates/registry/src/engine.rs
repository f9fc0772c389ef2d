//! The invocation engine.
//!
//! # Role
//!
//! [`Engine::invoke`] runs one keyword: bind the call frame, call the body with a fresh
//! [`TraceSink`], time the call and classify the outcome. Every path yields a
//! [`KeywordResult`]; nothing here returns an error or panics outward.
//!
//! # Invariants
//!
//! - Duration covers the keyword body only, never binding.
//! - The sink belongs to one invocation; its text always ends up in the result.
//! - `tracing` events emitted by the keyword body are captured into the sink.
//! - Binding errors are fatal failures; panics are plain failures.
//! - The engine holds no lock while a keyword runs.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use robotrpc_invocation::{CallFrame, KeywordResult, TraceSink, WireMap, WireValue, panic_message};

use crate::capture::capture;
use crate::config::InvocationConfig;
use crate::keyword::Keyword;

/// Stateless keyword runner.
#[derive(Debug, Clone, Default)]
pub struct Engine {
	config: InvocationConfig,
}

impl Engine {
	pub fn new(config: InvocationConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &InvocationConfig {
		&self.config
	}

	/// Invokes `keyword` with raw positional and named arguments.
	pub fn invoke(&self, keyword: &Keyword, positional: &[WireValue], named: Option<&WireMap>) -> KeywordResult {
		let sink = TraceSink::new();
		let frame = match CallFrame::bind(
			keyword.display_name(),
			keyword.params(),
			positional,
			named,
			self.config.strict_positional,
		) {
			Ok(frame) => frame,
			Err(err) => {
				tracing::debug!(keyword = keyword.display_name(), %err, "argument binding failed");
				return KeywordResult::from_error(&anyhow::Error::new(err), sink.into_output(), Duration::ZERO);
			}
		};

		tracing::debug!(call = %frame.trace(keyword.method_name(), keyword.params()), "keyword invocation");
		let result = run(keyword, &frame, sink);
		tracing::debug!(
			keyword = keyword.display_name(),
			status = %result.status,
			duration = ?result.duration,
			"keyword finished"
		);
		result
	}
}

fn run(keyword: &Keyword, frame: &CallFrame, sink: TraceSink) -> KeywordResult {
	let start = Instant::now();
	let outcome = capture(&sink, || {
		let mut body_sink = sink.clone();
		panic::catch_unwind(AssertUnwindSafe(|| keyword.call(&mut body_sink, frame)))
	});
	let duration = start.elapsed();
	let output = sink.into_output();

	match outcome {
		Ok(Ok(ret)) => KeywordResult::pass(ret, output, duration),
		Ok(Err(err)) => KeywordResult::from_error(&err, output, duration),
		Err(payload) => {
			let err = anyhow::Error::msg(panic_message(payload.as_ref()));
			KeywordResult::from_error(&err, output, duration)
		}
	}
}
