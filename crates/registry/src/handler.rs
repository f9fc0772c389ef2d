//! Typed keyword handlers.
//!
//! [`Handler`] is implemented for every `Fn(&L, &mut TraceSink, A1, .., An) -> R` where each
//! `Ai` is a [`HostType`] and `R` is a [`KeywordReturn`]. The argument tuple is a type
//! parameter so that one closure type maps to exactly one implementation.

use robotrpc_invocation::{CallFrame, HostType, KeywordReturn, TraceSink, TypeDesc, WireValue};

/// A callable keyword body for library type `L`.
pub trait Handler<L, Args>: Send + Sync + 'static {
	/// Declared parameter types, in order.
	fn param_types() -> Vec<TypeDesc>;

	fn return_type() -> TypeDesc;

	/// Converts the bound frame to host arguments and calls the body.
	fn call(&self, library: &L, trace: &mut TraceSink, frame: &CallFrame) -> anyhow::Result<Option<WireValue>>;
}

macro_rules! impl_handler {
	($($ty:ident $var:ident),*) => {
		impl<L, F, R, $($ty,)*> Handler<L, ($($ty,)*)> for F
		where
			F: Fn(&L, &mut TraceSink, $($ty,)*) -> R + Send + Sync + 'static,
			R: KeywordReturn,
			$($ty: HostType,)*
		{
			fn param_types() -> Vec<TypeDesc> {
				vec![$(<$ty as HostType>::type_desc()),*]
			}

			fn return_type() -> TypeDesc {
				R::return_desc()
			}

			#[allow(unused_variables, unused_mut, unused_assignments)]
			fn call(&self, library: &L, trace: &mut TraceSink, frame: &CallFrame) -> anyhow::Result<Option<WireValue>> {
				let mut index = 0usize;
				$(
					let $var = <$ty as HostType>::from_wire(frame.arg(index));
					index += 1;
				)*
				(self)(library, trace, $($var,)*).into_outcome()
			}
		}
	};
}

impl_handler!();
impl_handler!(A1 a1);
impl_handler!(A1 a1, A2 a2);
impl_handler!(A1 a1, A2 a2, A3 a3);
impl_handler!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_handler!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_handler!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_handler!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_handler!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
