//! Assembly entry points: where a query object meets an environment.

use std::sync::Arc;

use anglekit_core::PredicateSpec;

use crate::compile::{scan_query, scan_value, Compiler};
use crate::env::RefEnv;
use crate::error::{CompileError, CompileResult};
use crate::value::{FieldValue, PredicateQuery};

/// Compile one query against a fresh environment.
///
/// Equivalent to [`assemble`] with a new [`RefEnv`]; the common path when
/// no named bindings or cross-query sharing are in play.
pub fn compile_query(query: &PredicateQuery) -> CompileResult<String> {
    let mut env = RefEnv::new();
    assemble(&mut env, query)
}

/// Compile one predicate invocation within an existing environment.
///
/// Sub-queries the environment has already assigned a variable render as
/// that variable; new shared sub-queries get bound at first occurrence.
pub fn assemble(env: &mut RefEnv, query: &PredicateQuery) -> CompileResult<String> {
    let occurrences = scan_query(env, query);
    Compiler::new(env, occurrences).predicate(query)
}

/// Compile a bare field value, labeled when `label` is given.
///
/// Used for positional keys and for building fragments outside a full
/// predicate invocation.
pub fn compile_value(
    env: &mut RefEnv,
    value: &FieldValue,
    label: Option<&str>,
) -> CompileResult<String> {
    let occurrences = scan_value(env, value);
    Compiler::new(env, occurrences).value(value, label)
}

/// Compile a sum-typed invocation supplying exactly one variant.
///
/// The tag must be one of the spec's declared variants; the value becomes
/// that variant's payload. The tag is always present in the output, so a
/// payload that would compile to nothing is rejected rather than collapsing
/// the invocation to a wildcard.
pub fn assemble_variant(
    env: &mut RefEnv,
    spec: Arc<PredicateSpec>,
    tag: &str,
    value: FieldValue,
) -> CompileResult<String> {
    if !spec.variants().contains(tag) {
        return Err(CompileError::UnknownVariant {
            predicate: spec.reference(),
            tag: tag.to_owned(),
        });
    }
    if is_empty_payload(&value) {
        return Err(CompileError::ContractViolation(format!(
            "variant `{tag}` of `{}` requires a value",
            spec.reference()
        )));
    }
    let query = PredicateQuery::new(spec).with_field(tag, value);
    assemble(env, &query)
}

/// True when the value would render as empty and so elide the tag.
fn is_empty_payload(value: &FieldValue) -> bool {
    match value {
        FieldValue::Unspecified => true,
        FieldValue::Optional(Some(inner)) => is_empty_payload(inner),
        _ => false,
    }
}
