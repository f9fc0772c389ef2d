//! Canonical value and outcome types for remote keyword invocation.
//!
//! Everything that crosses the remote-library wire boundary is expressed with the types in
//! this crate:
//!
//! * [`WireValue`]: the closed set of values the protocol can carry.
//! * [`TypeDesc`]: a description of a host type, used to decide whether a keyword signature
//!   is representable and to name argument types for clients.
//! * [`HostType`]: the bridge between native Rust values and [`WireValue`] in both directions.
//! * [`KeywordReturn`]: what a keyword body may return (`()`, a host value, or a `Result`).
//! * [`CallFrame`]: the argument binding algorithm (positional, named, defaults).
//! * [`KeywordResult`]: the uniform outcome record handed back to a transport.
//! * [`TraceSink`]: the per-invocation diagnostic output writer.

pub mod bridge;
pub mod error;
pub mod frame;
pub mod outcome;
pub mod param;
pub mod returns;
pub mod trace;
pub mod types;
pub mod value;

pub use bridge::HostType;
pub use error::{BindError, ContinuableFailure, FatalFailure};
pub use frame::CallFrame;
pub use outcome::{FailureKind, KeywordResult, KeywordStatus, panic_message};
pub use param::ParamSpec;
pub use returns::KeywordReturn;
pub use trace::TraceSink;
pub use types::TypeDesc;
pub use value::{NONE_SENTINEL, WireMap, WireValue};
