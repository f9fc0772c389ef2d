//! The closed wire value model.

use std::fmt;

use indexmap::IndexMap;

/// Textual stand-in clients send for "no value" (Python's `None`).
pub const NONE_SENTINEL: &str = "None";

/// String-keyed wire map, iterated in insertion order.
pub type WireMap = IndexMap<String, WireValue>;

/// A value the remote-library protocol can carry.
///
/// Integers are 32 bit on the wire. Host 64-bit integers travel as their decimal string
/// form so that clients never see a truncated value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum WireValue {
	/// Absent value.
	#[default]
	Null,
	/// UTF-8 string.
	String(String),
	/// 32-bit signed integer.
	Int(i32),
	/// Double precision float.
	Float(f64),
	/// Boolean.
	Bool(bool),
	/// Ordered list.
	List(Vec<WireValue>),
	/// String-keyed map.
	Map(WireMap),
}

impl WireValue {
	/// Returns true for [`WireValue::Null`] and for the `"None"` sentinel string.
	pub fn is_none(&self) -> bool {
		match self {
			Self::Null => true,
			Self::String(s) => s == NONE_SENTINEL,
			_ => false,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i32> {
		match self {
			Self::Int(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[WireValue]> {
		match self {
			Self::List(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&WireMap> {
		match self {
			Self::Map(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the protocol type name of this value.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::String(_) => "string",
			Self::Int(_) => "int",
			Self::Float(_) => "double",
			Self::Bool(_) => "boolean",
			Self::List(_) => "list",
			Self::Map(_) => "dict",
		}
	}

	/// Replaces every [`WireValue::Null`] (at any depth) with an empty string.
	///
	/// Transports without a nil type need this before encoding.
	pub fn normalized(self) -> Self {
		match self {
			Self::Null => Self::String(String::new()),
			Self::List(items) => Self::List(items.into_iter().map(Self::normalized).collect()),
			Self::Map(entries) => Self::Map(entries.into_iter().map(|(k, v)| (k, v.normalized())).collect()),
			other => other,
		}
	}

	/// Builds a map value from key/value pairs.
	pub fn map<K, V, I>(entries: I) -> Self
	where
		K: Into<String>,
		V: Into<WireValue>,
		I: IntoIterator<Item = (K, V)>,
	{
		Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}

	/// Builds a list value.
	pub fn list<V, I>(items: I) -> Self
	where
		V: Into<WireValue>,
		I: IntoIterator<Item = V>,
	{
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

/// Textual representation, used for lenient parsing, default rendering and traces.
impl fmt::Display for WireValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str(NONE_SENTINEL),
			Self::String(s) => f.write_str(s),
			Self::Int(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Bool(true) => f.write_str("True"),
			Self::Bool(false) => f.write_str("False"),
			Self::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Map(entries) => {
				f.write_str("{")?;
				for (i, (k, v)) in entries.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{k}: {v}")?;
				}
				f.write_str("}")
			}
		}
	}
}

impl From<&str> for WireValue {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<String> for WireValue {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl From<i32> for WireValue {
	fn from(v: i32) -> Self {
		Self::Int(v)
	}
}

impl From<f64> for WireValue {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<bool> for WireValue {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<Vec<WireValue>> for WireValue {
	fn from(v: Vec<WireValue>) -> Self {
		Self::List(v)
	}
}

impl From<WireMap> for WireValue {
	fn from(v: WireMap) -> Self {
		Self::Map(v)
	}
}
