//! Bidirectional conversion between host values and [`WireValue`].
//!
//! # Role
//!
//! [`HostType`] is implemented for every Rust type a keyword may take or return. It carries
//! three things: the type's [`TypeDesc`] (consulted at discovery time), the outbound
//! conversion and the lenient inbound conversion (consulted at invocation time).
//!
//! # Conversion rules
//!
//! Outbound:
//! - `None` becomes an empty string.
//! - Primitives pass through; `i64` becomes its decimal string.
//! - Maps become string-keyed wire maps, keys rendered as text; sequences become lists.
//! - Types without a wire equivalent become their textual representation.
//!
//! Inbound:
//! - `Null` and the `"None"` sentinel become `""` for strings and the type default otherwise.
//! - Primitives parse leniently from the value's text and fall back to `0`, `0.0` or `false`.
//!   Booleans also accept `"1"` and `"0"`.
//! - Sequences and maps are rebuilt element by element; a non-container value yields an empty
//!   container.
//!
//! # Invariants
//!
//! - `T::from_wire(&v.to_wire()) == v` for every representable `T` (see `tests::roundtrip_*`),
//!   except the string `"None"`, which is the no-value sentinel.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::types::TypeDesc;
use crate::value::WireValue;

/// A host type that can cross the wire boundary.
pub trait HostType: Sized {
	/// Describes this type for signature validation and client type names.
	fn type_desc() -> TypeDesc;

	/// Converts a host value to its wire form.
	fn to_wire(&self) -> WireValue;

	/// Converts a wire value to this type. Never fails; see the module rules.
	fn from_wire(value: &WireValue) -> Self;
}

/// Converts a host value to its wire form.
pub fn to_wire<T: HostType>(value: &T) -> WireValue {
	value.to_wire()
}

/// Converts a wire value to the requested host type.
pub fn from_wire<T: HostType>(value: &WireValue) -> T {
	T::from_wire(value)
}

fn parse_text<T: std::str::FromStr + Default>(value: &WireValue) -> T {
	if value.is_none() {
		return T::default();
	}
	value.to_string().trim().parse().unwrap_or_default()
}

impl HostType for String {
	fn type_desc() -> TypeDesc {
		TypeDesc::String
	}

	fn to_wire(&self) -> WireValue {
		WireValue::String(self.clone())
	}

	fn from_wire(value: &WireValue) -> Self {
		match value {
			_ if value.is_none() => String::new(),
			WireValue::String(s) => s.clone(),
			other => other.to_string(),
		}
	}
}

impl HostType for i32 {
	fn type_desc() -> TypeDesc {
		TypeDesc::Int
	}

	fn to_wire(&self) -> WireValue {
		WireValue::Int(*self)
	}

	fn from_wire(value: &WireValue) -> Self {
		match value {
			WireValue::Int(v) => *v,
			other => parse_text(other),
		}
	}
}

impl HostType for i64 {
	fn type_desc() -> TypeDesc {
		TypeDesc::Long
	}

	fn to_wire(&self) -> WireValue {
		WireValue::String(self.to_string())
	}

	fn from_wire(value: &WireValue) -> Self {
		match value {
			WireValue::Int(v) => i64::from(*v),
			other => parse_text(other),
		}
	}
}

impl HostType for f64 {
	fn type_desc() -> TypeDesc {
		TypeDesc::Float
	}

	fn to_wire(&self) -> WireValue {
		WireValue::Float(*self)
	}

	fn from_wire(value: &WireValue) -> Self {
		match value {
			WireValue::Float(v) => *v,
			WireValue::Int(v) => f64::from(*v),
			other => parse_text(other),
		}
	}
}

impl HostType for bool {
	fn type_desc() -> TypeDesc {
		TypeDesc::Bool
	}

	fn to_wire(&self) -> WireValue {
		WireValue::Bool(*self)
	}

	fn from_wire(value: &WireValue) -> Self {
		if let WireValue::Bool(v) = value {
			return *v;
		}
		if value.is_none() {
			return false;
		}
		let text = value.to_string();
		let text = text.trim();
		if text.eq_ignore_ascii_case("true") || text == "1" {
			true
		} else {
			// "false", "0" and anything unparseable
			false
		}
	}
}

impl<T: HostType> HostType for Option<T> {
	fn type_desc() -> TypeDesc {
		T::type_desc()
	}

	fn to_wire(&self) -> WireValue {
		match self {
			Some(v) => v.to_wire(),
			None => WireValue::String(String::new()),
		}
	}

	fn from_wire(value: &WireValue) -> Self {
		if value.is_none() { None } else { Some(T::from_wire(value)) }
	}
}

impl<T: HostType> HostType for Vec<T> {
	fn type_desc() -> TypeDesc {
		TypeDesc::list(T::type_desc())
	}

	fn to_wire(&self) -> WireValue {
		WireValue::List(self.iter().map(HostType::to_wire).collect())
	}

	fn from_wire(value: &WireValue) -> Self {
		match value {
			WireValue::List(items) => items.iter().map(T::from_wire).collect(),
			_ => Vec::new(),
		}
	}
}

impl<T: HostType> HostType for Box<[T]> {
	fn type_desc() -> TypeDesc {
		TypeDesc::array(T::type_desc())
	}

	fn to_wire(&self) -> WireValue {
		WireValue::List(self.iter().map(HostType::to_wire).collect())
	}

	fn from_wire(value: &WireValue) -> Self {
		Vec::<T>::from_wire(value).into_boxed_slice()
	}
}

fn map_to_wire<'a, K, V, I>(entries: I) -> WireValue
where
	K: HostType + 'a,
	V: HostType + 'a,
	I: Iterator<Item = (&'a K, &'a V)>,
{
	WireValue::Map(entries.map(|(k, v)| (k.to_wire().to_string(), v.to_wire())).collect())
}

fn map_from_wire<K, V, C>(value: &WireValue) -> C
where
	K: HostType,
	V: HostType,
	C: FromIterator<(K, V)>,
{
	match value {
		WireValue::Map(entries) => entries
			.iter()
			.map(|(k, v)| (K::from_wire(&WireValue::String(k.clone())), V::from_wire(v)))
			.collect(),
		_ => std::iter::empty().collect(),
	}
}

impl<K, V, S> HostType for HashMap<K, V, S>
where
	K: HostType + Eq + Hash,
	V: HostType,
	S: BuildHasher + Default,
{
	fn type_desc() -> TypeDesc {
		TypeDesc::map(K::type_desc(), V::type_desc())
	}

	fn to_wire(&self) -> WireValue {
		map_to_wire(self.iter())
	}

	fn from_wire(value: &WireValue) -> Self {
		map_from_wire(value)
	}
}

impl<K, V, S> HostType for IndexMap<K, V, S>
where
	K: HostType + Eq + Hash,
	V: HostType,
	S: BuildHasher + Default,
{
	fn type_desc() -> TypeDesc {
		TypeDesc::map(K::type_desc(), V::type_desc())
	}

	fn to_wire(&self) -> WireValue {
		map_to_wire(self.iter())
	}

	fn from_wire(value: &WireValue) -> Self {
		map_from_wire(value)
	}
}

impl<K, V> HostType for BTreeMap<K, V>
where
	K: HostType + Ord,
	V: HostType,
{
	fn type_desc() -> TypeDesc {
		TypeDesc::map(K::type_desc(), V::type_desc())
	}

	fn to_wire(&self) -> WireValue {
		map_to_wire(self.iter())
	}

	fn from_wire(value: &WireValue) -> Self {
		map_from_wire(value)
	}
}

/// Numeric widths with no wire equivalent. Signatures using them are rejected at discovery;
/// the conversions exist so such methods can still be declared.
macro_rules! opaque_host_type {
	($($ty:ty => $name:literal),* $(,)?) => {$(
		impl HostType for $ty {
			fn type_desc() -> TypeDesc {
				TypeDesc::Opaque($name)
			}

			fn to_wire(&self) -> WireValue {
				WireValue::String(self.to_string())
			}

			fn from_wire(value: &WireValue) -> Self {
				parse_text(value)
			}
		}
	)*};
}

opaque_host_type! {
	f32 => "f32",
	i8 => "i8",
	i16 => "i16",
	u8 => "u8",
	u16 => "u16",
	u32 => "u32",
	u64 => "u64",
	usize => "usize",
}

#[cfg(test)]
mod tests;
