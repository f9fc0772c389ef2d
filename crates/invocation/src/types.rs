//! Host type descriptors.
//!
//! # Role
//!
//! A [`TypeDesc`] is the registration-time description of a keyword parameter or return
//! type. Discovery consults [`TypeDesc::is_representable`] to reject signatures that cannot
//! cross the wire, and clients receive [`TypeDesc::wire_name`] as the argument type list.
//!
//! # Invariants
//!
//! - `Void` is representable only as a top-level return type; containers of `Void` are not.
//! - Map keys must be `String` for the map to be representable.

use std::fmt;

/// Description of a host (Rust) type as seen by the type bridge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
	/// `String`.
	String,
	/// `i32`, carried as a wire int.
	Int,
	/// `i64`, carried as a decimal string.
	Long,
	/// `f64`.
	Float,
	/// `bool`.
	Bool,
	/// `()`; only valid as a return type.
	Void,
	/// Fixed-size sequence (`Box<[T]>`).
	Array(Box<TypeDesc>),
	/// Growable sequence (`Vec<T>`).
	List(Box<TypeDesc>),
	/// Keyed collection.
	Map { key: Box<TypeDesc>, value: Box<TypeDesc> },
	/// Any other host type, by name. Never representable.
	Opaque(&'static str),
}

impl TypeDesc {
	pub fn array(elem: TypeDesc) -> Self {
		Self::Array(Box::new(elem))
	}

	pub fn list(elem: TypeDesc) -> Self {
		Self::List(Box::new(elem))
	}

	pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
		Self::Map {
			key: Box::new(key),
			value: Box::new(value),
		}
	}

	/// Returns true if values of this type can cross the wire boundary.
	pub fn is_representable(&self) -> bool {
		match self {
			Self::String | Self::Int | Self::Long | Self::Float | Self::Bool | Self::Void => true,
			Self::Array(elem) | Self::List(elem) => elem.is_element(),
			Self::Map { key, value } => **key == Self::String && value.is_element(),
			Self::Opaque(_) => false,
		}
	}

	/// Returns true if this type is representable as a parameter.
	pub fn is_parameter(&self) -> bool {
		*self != Self::Void && self.is_representable()
	}

	fn is_element(&self) -> bool {
		*self != Self::Void && self.is_representable()
	}

	/// Protocol type name reported to clients (`string`, `list[int]`, `dict[string, double]`).
	///
	/// Types without a protocol equivalent (void, 64-bit integers, opaque types) report `None`.
	pub fn wire_name(&self) -> String {
		self.wire_name_opt().unwrap_or_else(|| "None".to_string())
	}

	fn wire_name_opt(&self) -> Option<String> {
		match self {
			Self::String => Some("string".to_string()),
			Self::Int => Some("int".to_string()),
			Self::Float => Some("double".to_string()),
			Self::Bool => Some("boolean".to_string()),
			Self::Array(elem) | Self::List(elem) => Some(format!("list[{}]", elem.wire_name_opt()?)),
			Self::Map { key, value } if **key == Self::String => {
				Some(format!("dict[string, {}]", value.wire_name_opt()?))
			}
			Self::Long | Self::Void | Self::Map { .. } | Self::Opaque(_) => None,
		}
	}
}

/// Host-side spelling, used in generated documentation.
impl fmt::Display for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String => f.write_str("String"),
			Self::Int => f.write_str("i32"),
			Self::Long => f.write_str("i64"),
			Self::Float => f.write_str("f64"),
			Self::Bool => f.write_str("bool"),
			Self::Void => f.write_str("()"),
			Self::Array(elem) => write!(f, "Box<[{elem}]>"),
			Self::List(elem) => write!(f, "Vec<{elem}>"),
			Self::Map { key, value } => write!(f, "Map<{key}, {value}>"),
			Self::Opaque(name) => f.write_str(name),
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::TypeDesc;

	#[rstest]
	#[case(TypeDesc::String, "string")]
	#[case(TypeDesc::Int, "int")]
	#[case(TypeDesc::Float, "double")]
	#[case(TypeDesc::Bool, "boolean")]
	#[case(TypeDesc::array(TypeDesc::String), "list[string]")]
	#[case(TypeDesc::list(TypeDesc::Bool), "list[boolean]")]
	#[case(TypeDesc::map(TypeDesc::String, TypeDesc::Int), "dict[string, int]")]
	#[case(TypeDesc::list(TypeDesc::map(TypeDesc::String, TypeDesc::Float)), "list[dict[string, double]]")]
	#[case(TypeDesc::map(TypeDesc::String, TypeDesc::list(TypeDesc::String)), "dict[string, list[string]]")]
	#[case(TypeDesc::Long, "None")]
	#[case(TypeDesc::Void, "None")]
	#[case(TypeDesc::map(TypeDesc::Int, TypeDesc::Int), "None")]
	#[case(TypeDesc::list(TypeDesc::Opaque("f32")), "None")]
	fn wire_names(#[case] ty: TypeDesc, #[case] expected: &str) {
		assert_eq!(ty.wire_name(), expected);
	}

	#[test]
	fn representability() {
		assert!(TypeDesc::Void.is_representable());
		assert!(!TypeDesc::Void.is_parameter());
		assert!(TypeDesc::Long.is_parameter());
		assert!(!TypeDesc::Opaque("f32").is_representable());
		assert!(!TypeDesc::list(TypeDesc::Void).is_representable());
		assert!(!TypeDesc::map(TypeDesc::Int, TypeDesc::String).is_representable());
		assert!(TypeDesc::map(TypeDesc::String, TypeDesc::list(TypeDesc::Int)).is_representable());
		assert!(TypeDesc::list(TypeDesc::map(TypeDesc::String, TypeDesc::Bool)).is_representable());
		assert!(!TypeDesc::list(TypeDesc::map(TypeDesc::String, TypeDesc::Opaque("u64"))).is_representable());
	}
}
