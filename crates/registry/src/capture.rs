//! Log capture for keyword bodies.
//!
//! While a keyword runs, [`capture`] makes a [`CaptureLayer`] the thread's default
//! subscriber, so `tracing` events emitted by the library land in the invocation's
//! [`TraceSink`] as `*LEVEL:unix_millis* target message` lines. The scope is
//! thread-local; concurrent invocations each see only their own events.

use std::fmt::{self, Write as _};

use robotrpc_invocation::TraceSink;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt as _};

/// Runs `f` with every `tracing` event on this thread recorded into `sink`.
pub(crate) fn capture<T>(sink: &TraceSink, f: impl FnOnce() -> T) -> T {
	let subscriber = tracing_subscriber::registry().with(CaptureLayer { sink: sink.clone() });
	tracing::subscriber::with_default(subscriber, f)
}

/// Writes events into a shared [`TraceSink`].
struct CaptureLayer {
	sink: TraceSink,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut visitor = MessageVisitor::default();
		event.record(&mut visitor);
		let meta = event.metadata();
		let text = visitor.finish();
		self.sink.clone().log(meta.level(), format_args!("{} {text}", meta.target()));
	}
}

/// Renders the `message` field followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
	text: String,
	fields: String,
}

impl MessageVisitor {
	fn finish(mut self) -> String {
		self.text.push_str(&self.fields);
		self.text
	}
}

impl Visit for MessageVisitor {
	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.text.push_str(value);
		} else {
			self.record_debug(field, &value);
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		// Writing to a String cannot fail.
		if field.name() == "message" {
			let _ = write!(self.text, "{value:?}");
		} else {
			let _ = write!(self.fields, " {}={value:?}", field.name());
		}
	}
}
