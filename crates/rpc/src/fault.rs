//! Protocol faults.

use robotrpc_invocation::{WireMap, WireValue};
use robotrpc_registry::RegistryError;

/// Fault code carried by every fault this facade raises.
pub const FAULT_CODE: i32 = 1;

/// A protocol-level fault. Transports encode it as their native fault response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fault {code}: {message}")]
pub struct Fault {
	/// Numeric fault code.
	pub code: i32,
	/// Human-readable fault text.
	pub message: String,
}

impl Fault {
	/// Creates a fault with [`FAULT_CODE`].
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			code: FAULT_CODE,
			message: message.into(),
		}
	}

	/// Fault struct in the `faultCode`/`faultString` shape.
	pub fn to_wire(&self) -> WireValue {
		let mut map = WireMap::new();
		map.insert("faultCode".into(), WireValue::Int(self.code));
		map.insert("faultString".into(), self.message.as_str().into());
		WireValue::Map(map)
	}
}

impl From<RegistryError> for Fault {
	fn from(err: RegistryError) -> Self {
		Self::new(err.to_string())
	}
}
