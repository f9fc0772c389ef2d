//! Argument binding.
//!
//! # Role
//!
//! [`CallFrame::bind`] merges positional arguments, named arguments and declared defaults
//! into one slot per parameter. The frame lives for a single invocation.
//!
//! # Invariants
//!
//! - Positional arguments fill slots left to right; extras are ignored unless strict.
//! - Named arguments match parameter names exactly and overwrite positional values.
//! - Defaults fill only optional slots that were not explicitly provided.
//! - After binding every slot is set. An explicit [`WireValue::Null`] is kept over a default
//!   but leaves a required slot missing.

use std::fmt::Write as _;

use crate::error::BindError;
use crate::param::ParamSpec;
use crate::value::{WireMap, WireValue};

/// Resolved arguments of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CallFrame {
	slots: Vec<WireValue>,
	provided: Vec<bool>,
}

impl CallFrame {
	/// Binds raw call arguments against `params`.
	///
	/// `keyword` is the display name used in error messages. With `strict` set, more
	/// positional arguments than parameters is an error instead of being ignored.
	pub fn bind(
		keyword: &str,
		params: &[ParamSpec],
		positional: &[WireValue],
		named: Option<&WireMap>,
		strict: bool,
	) -> Result<Self, BindError> {
		if strict && positional.len() > params.len() {
			return Err(BindError::ExcessPositional {
				keyword: keyword.to_string(),
				expected: params.len(),
				given: positional.len(),
			});
		}

		let mut slots: Vec<Option<WireValue>> = vec![None; params.len()];
		let mut provided = vec![false; params.len()];

		for (i, arg) in positional.iter().take(params.len()).enumerate() {
			slots[i] = Some(arg.clone());
			provided[i] = true;
		}

		for (name, value) in named.into_iter().flatten() {
			let Some(index) = params.iter().position(|p| p.name == *name) else {
				return Err(BindError::UnknownNamedArgument {
					name: name.clone(),
					keyword: keyword.to_string(),
					expected: params.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "),
				});
			};
			slots[index] = Some(value.clone());
			provided[index] = true;
		}

		for (i, param) in params.iter().enumerate() {
			if !provided[i]
				&& let Some(default) = &param.default
			{
				slots[i] = Some(default.clone());
			}
		}

		let slots = slots
			.into_iter()
			.zip(params)
			.map(|(slot, param)| {
				match slot {
					Some(WireValue::Null) if !param.is_optional() => None,
					slot => slot,
				}
				.ok_or_else(|| BindError::MissingArgument {
					name: param.name.clone(),
					keyword: keyword.to_string(),
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { slots, provided })
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Value bound to parameter `index`, or `Null` past the end.
	pub fn arg(&self, index: usize) -> &WireValue {
		const NULL: &WireValue = &WireValue::Null;
		self.slots.get(index).unwrap_or(NULL)
	}

	/// Returns true if the caller supplied parameter `index` (positionally or by name).
	pub fn is_provided(&self, index: usize) -> bool {
		self.provided.get(index).copied().unwrap_or(false)
	}

	pub fn values(&self) -> &[WireValue] {
		&self.slots
	}

	/// Human-readable call, e.g. `String_ParameterType(value=hello)`.
	pub fn trace(&self, method: &str, params: &[ParamSpec]) -> String {
		let mut out = String::with_capacity(method.len() + 2);
		out.push_str(method);
		out.push('(');
		for (i, (param, value)) in params.iter().zip(&self.slots).enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			// Writing to a String cannot fail.
			let _ = write!(out, "{}={value}", param.name);
		}
		out.push(')');
		out
	}
}

#[cfg(test)]
mod tests;
