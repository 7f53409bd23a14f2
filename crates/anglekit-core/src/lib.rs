#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Schema contracts for Anglekit fact predicates.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to registry JSON (`RawPredicate`)
//! - **Contract layer**: validated `PredicateSpec` values keyed by name and
//!   version
//!
//! Specs are pure data. The compiler consumes them read-only; nothing here
//! knows how a query fragment is rendered.

mod registry;
mod spec;

#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod spec_tests;

pub use registry::{RawField, RawPredicate, RegistryError, SchemaRegistry, parse_registry};
pub use spec::{
    FieldSpec, PredicateSpec, SpecError, is_valid_field_name, is_valid_predicate_name,
    is_valid_variable,
};
