//! Parameter specifications.

use crate::types::TypeDesc;
use crate::value::WireValue;

/// One declared parameter of a keyword.
///
/// A parameter is optional exactly when it has a default. An optional parameter whose
/// default is [`WireValue::Null`] is one whose host type admits "no value".
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
	pub name: String,
	pub ty: TypeDesc,
	pub default: Option<WireValue>,
}

impl ParamSpec {
	pub fn required(name: impl Into<String>, ty: TypeDesc) -> Self {
		Self {
			name: name.into(),
			ty,
			default: None,
		}
	}

	pub fn optional(name: impl Into<String>, ty: TypeDesc, default: WireValue) -> Self {
		Self {
			name: name.into(),
			ty,
			default: Some(default),
		}
	}

	pub fn is_optional(&self) -> bool {
		self.default.is_some()
	}

	/// Client-facing argument spec: `name` or `name=default`.
	pub fn arg_spec(&self) -> String {
		match &self.default {
			Some(default) => format!("{}={default}", self.name),
			None => self.name.clone(),
		}
	}
}
