//! The uniform keyword outcome record.
//!
//! # Role
//!
//! Every invocation produces exactly one [`KeywordResult`], whichever way it ended. Failures
//! are classified from the error's concrete type: [`ContinuableFailure`], [`FatalFailure`]
//! and binding errors ([`BindError`], which are fatal) are recognised; anything else is a
//! plain failure.
//!
//! # Invariants
//!
//! - A `Fail` result always carries non-empty error text.
//! - `continuable` / `fatal` keys appear in the wire map only for those classes.
//! - The wire map keys are ordered `status, error, traceback, output, return`.

use std::any::Any;
use std::fmt;
use std::time::Duration;

use crate::error::{BindError, ContinuableFailure, FatalFailure};
use crate::value::{WireMap, WireValue};

const NO_TRACEBACK: &str = "No stack trace available";

/// Pass/fail status of a keyword run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordStatus {
	Pass,
	Fail,
}

impl KeywordStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Pass => "PASS",
			Self::Fail => "FAIL",
		}
	}
}

impl fmt::Display for KeywordStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Classification of a failed keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
	/// The test may continue after this failure.
	Continuable,
	/// The whole run should stop.
	Fatal,
	/// Ordinary failure.
	Fail,
}

impl FailureKind {
	/// Classifies an error by its concrete type. Context layers added with `anyhow` are
	/// looked through.
	pub fn classify(err: &anyhow::Error) -> Self {
		if err.downcast_ref::<ContinuableFailure>().is_some() {
			Self::Continuable
		} else if err.downcast_ref::<FatalFailure>().is_some() || err.downcast_ref::<BindError>().is_some() {
			Self::Fatal
		} else {
			Self::Fail
		}
	}
}

/// Outcome of one keyword invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordResult {
	pub status: KeywordStatus,
	/// Diagnostic output captured during the call.
	pub output: String,
	/// Converted return value. `None` for void keywords and for failures.
	pub return_value: Option<WireValue>,
	pub error: String,
	pub traceback: String,
	/// Time spent inside the keyword body only.
	pub duration: Duration,
	/// Set exactly when `status` is `Fail`.
	pub failure: Option<FailureKind>,
}

impl KeywordResult {
	pub fn pass(return_value: Option<WireValue>, output: String, duration: Duration) -> Self {
		Self {
			status: KeywordStatus::Pass,
			output,
			return_value,
			error: String::new(),
			traceback: String::new(),
			duration,
			failure: None,
		}
	}

	/// Captures a failed call.
	pub fn from_error(err: &anyhow::Error, output: String, duration: Duration) -> Self {
		let mut error = err.to_string();
		if error.is_empty() {
			error = format!("{err:#}");
		}
		if error.is_empty() {
			error = "Keyword failed".to_string();
		}
		let mut traceback = format!("{err:?}");
		if traceback.trim().is_empty() {
			traceback = NO_TRACEBACK.to_string();
		}
		Self {
			status: KeywordStatus::Fail,
			output,
			return_value: None,
			error,
			traceback,
			duration,
			failure: Some(FailureKind::classify(err)),
		}
	}

	pub fn is_pass(&self) -> bool {
		self.status == KeywordStatus::Pass
	}

	/// Encodes the response map returned by `run_keyword`.
	pub fn to_wire(&self) -> WireValue {
		let mut map = WireMap::with_capacity(6);
		map.insert("status".into(), self.status.as_str().into());
		map.insert("error".into(), self.error.clone().into());
		map.insert("traceback".into(), self.traceback.clone().into());
		map.insert("output".into(), self.output.clone().into());
		let ret = match &self.return_value {
			Some(WireValue::Null) | None => WireValue::String(String::new()),
			Some(value) => value.clone(),
		};
		map.insert("return".into(), ret);
		match self.failure {
			Some(FailureKind::Continuable) => {
				map.insert("continuable".into(), true.into());
			}
			Some(FailureKind::Fatal) => {
				map.insert("fatal".into(), true.into());
			}
			Some(FailureKind::Fail) | None => {}
		}
		WireValue::Map(map)
	}
}

impl fmt::Display for KeywordResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[KeywordResult status={}, output={:?}, return=", self.status, self.output)?;
		match &self.return_value {
			Some(value) => write!(f, "{value}")?,
			None => f.write_str("None")?,
		}
		write!(
			f,
			", error={:?}, duration={:.6}s, failure={:?}]",
			self.error,
			self.duration.as_secs_f64(),
			self.failure
		)
	}
}

/// Extracts the message of a caught panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&'static str>() {
		(*s).to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"keyword panicked".to_string()
	}
}
