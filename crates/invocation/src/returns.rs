//! Keyword return values.
//!
//! A keyword body may return `()`, any [`HostType`], or a `Result` of either whose error
//! converts into [`anyhow::Error`]. [`KeywordReturn`] normalizes all of them into the
//! engine's outcome shape: `Ok(None)` for void, `Ok(Some(value))` otherwise.

use crate::bridge::HostType;
use crate::types::TypeDesc;
use crate::value::WireValue;

/// A value a keyword body can return.
pub trait KeywordReturn {
	/// Describes the successful return type.
	fn return_desc() -> TypeDesc;

	/// Converts the return into the engine's outcome shape.
	fn into_outcome(self) -> anyhow::Result<Option<WireValue>>;
}

impl KeywordReturn for () {
	fn return_desc() -> TypeDesc {
		TypeDesc::Void
	}

	fn into_outcome(self) -> anyhow::Result<Option<WireValue>> {
		Ok(None)
	}
}

impl<T: HostType> KeywordReturn for T {
	fn return_desc() -> TypeDesc {
		T::type_desc()
	}

	fn into_outcome(self) -> anyhow::Result<Option<WireValue>> {
		Ok(Some(self.to_wire()))
	}
}

impl<E> KeywordReturn for Result<(), E>
where
	E: Into<anyhow::Error>,
{
	fn return_desc() -> TypeDesc {
		TypeDesc::Void
	}

	fn into_outcome(self) -> anyhow::Result<Option<WireValue>> {
		self.map(|()| None).map_err(Into::into)
	}
}

impl<T, E> KeywordReturn for Result<T, E>
where
	T: HostType,
	E: Into<anyhow::Error>,
{
	fn return_desc() -> TypeDesc {
		T::type_desc()
	}

	fn into_outcome(self) -> anyhow::Result<Option<WireValue>> {
		match self {
			Ok(value) => Ok(Some(value.to_wire())),
			Err(err) => Err(err.into()),
		}
	}
}
