//! Per-invocation diagnostic output.
//!
//! A [`TraceSink`] is created by the engine for one call, handed to the keyword body and
//! drained into the result afterwards. Characters that the XML-based wire format cannot
//! carry are dropped as they are written, so the captured text always encodes.
//!
//! Clones share one buffer, so a log capture layer can write into the same output the
//! keyword body writes to.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Returns true if `c` may appear in an XML 1.0 document.
pub fn is_legal_xml_char(c: char) -> bool {
	matches!(
		c as u32,
		0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x1_0000..=0x10_FFFF
	)
}

/// Captured diagnostic output of a single keyword call.
#[derive(Debug, Clone, Default)]
pub struct TraceSink {
	buf: Arc<Mutex<String>>,
}

impl TraceSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Writes `text` followed by a newline.
	pub fn line(&mut self, text: impl fmt::Display) {
		use fmt::Write as _;
		// Writing to a String cannot fail.
		let _ = writeln!(self, "{text}");
	}

	/// Writes one log record as `*LEVEL:unix_millis* text`.
	pub fn log(&mut self, level: impl fmt::Display, text: impl fmt::Display) {
		let millis = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_or(0, |d| d.as_millis());
		self.line(format_args!("*{}:{millis}* {text}", level.to_string().to_uppercase()));
	}

	/// Snapshot of everything written so far.
	pub fn contents(&self) -> String {
		self.buf.lock().clone()
	}

	pub fn is_empty(&self) -> bool {
		self.buf.lock().is_empty()
	}

	/// Consumes the sink, returning everything written through it and its clones.
	pub fn into_output(self) -> String {
		match Arc::try_unwrap(self.buf) {
			Ok(buf) => buf.into_inner(),
			Err(shared) => shared.lock().clone(),
		}
	}
}

impl fmt::Write for TraceSink {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		let mut buf = self.buf.lock();
		if s.chars().all(is_legal_xml_char) {
			buf.push_str(s);
		} else {
			buf.extend(s.chars().filter(|&c| is_legal_xml_char(c)));
		}
		Ok(())
	}
}
