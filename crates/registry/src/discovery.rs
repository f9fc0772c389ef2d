//! Keyword discovery.
//!
//! # Role
//!
//! Turns a library's declared [`KeywordSet`] into keyword descriptors. Each declaration is
//! checked by [`validate`]; rejected declarations are dropped with a debug event, never an
//! error.
//!
//! # Invariants
//!
//! - Descriptor order follows declaration order.
//! - With explicit discovery, unmarked declarations are skipped before validation.
//! - An obsolete declaration skips the parameter type check when the config allows it.

use std::collections::HashSet;
use std::sync::Arc;

use robotrpc_invocation::{ParamSpec, TypeDesc};

use crate::config::DiscoveryConfig;
use crate::keyword::{Keyword, KeywordSet, MethodDecl};
use crate::library::Library;

/// Why a declaration failed the signature check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
	#[error("declares {given} parameter names for {expected} parameters")]
	ParamNameCount { expected: usize, given: usize },
	#[error("parameter name '{0}' is declared twice")]
	DuplicateParam(String),
	#[error("default given for unknown parameter '{0}'")]
	UnknownDefault(String),
	#[error("required parameter '{0}' follows an optional one")]
	RequiredAfterOptional(String),
	#[error("return type {0} is not representable")]
	UnrepresentableReturn(TypeDesc),
	#[error("method is not public")]
	NotPublic,
	#[error("parameter '{name}' has unrepresentable type {ty}")]
	UnrepresentableParam { name: String, ty: TypeDesc },
}

/// Discovers the keywords of `instance`.
pub(crate) fn discover<L: Library>(instance: Arc<L>, config: &DiscoveryConfig) -> Vec<Arc<Keyword>> {
	let mut set = KeywordSet::default();
	L::keywords(&mut set);
	let info = L::info();
	let docs = instance.doc_source();

	let mut keywords = Vec::with_capacity(set.len());
	for decl in set.decls {
		if info.explicit_discovery && !decl.marked {
			continue;
		}
		match validate(&decl, config) {
			Ok(params) => {
				let method_docs = docs.as_ref().and_then(|d| d.method_docs(&decl.name));
				keywords.push(Arc::new(Keyword::new(decl, params, instance.clone(), method_docs)));
			}
			Err(reason) => {
				tracing::debug!(method = %decl.name, %reason, "excluding method from keywords");
			}
		}
	}
	keywords
}

/// The valid-signature predicate. On success returns the parameter specs.
pub fn validate<L>(decl: &MethodDecl<L>, config: &DiscoveryConfig) -> Result<Vec<ParamSpec>, Rejection> {
	if decl.param_names.len() != decl.param_types.len() {
		return Err(Rejection::ParamNameCount {
			expected: decl.param_types.len(),
			given: decl.param_names.len(),
		});
	}
	let mut seen = HashSet::with_capacity(decl.param_names.len());
	if let Some(dup) = decl.param_names.iter().find(|name| !seen.insert(name.as_str())) {
		return Err(Rejection::DuplicateParam(dup.clone()));
	}
	if let Some((unknown, _)) = decl.defaults.iter().find(|(name, _)| !decl.param_names.contains(name)) {
		return Err(Rejection::UnknownDefault(unknown.clone()));
	}

	let mut params = Vec::with_capacity(decl.param_names.len());
	for (name, ty) in decl.param_names.iter().zip(&decl.param_types) {
		// last default wins if a name is given twice
		let default = decl.defaults.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v.clone());
		let param = match default {
			Some(default) => ParamSpec::optional(name.clone(), ty.clone(), default),
			None => {
				if params.iter().any(ParamSpec::is_optional) {
					return Err(Rejection::RequiredAfterOptional(name.clone()));
				}
				ParamSpec::required(name.clone(), ty.clone())
			}
		};
		params.push(param);
	}

	if !decl.return_type.is_representable() {
		return Err(Rejection::UnrepresentableReturn(decl.return_type.clone()));
	}
	if !decl.public {
		return Err(Rejection::NotPublic);
	}
	if decl.obsolete && config.accept_obsolete {
		return Ok(params);
	}
	if let Some(bad) = params.iter().find(|p| !p.ty.is_parameter()) {
		return Err(Rejection::UnrepresentableParam {
			name: bad.name.clone(),
			ty: bad.ty.clone(),
		});
	}
	Ok(params)
}
