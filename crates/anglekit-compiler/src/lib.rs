#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Angle query fragment compiler.
//!
//! Turns a partially-specified, keyword-based query object into the textual
//! fragment of the Angle fact-query language, enforcing the schema contract
//! along the way:
//! - `literal` - scalar rendering and string escaping
//! - `value` - the `FieldValue` / `PredicateQuery` model callers build
//! - `env` - per-compilation reference environment (deduplication state)
//! - `compile` - recursive-descent value compilation
//! - `assemble` - predicate and variant assembly entry points
//! - `error` - the compile error taxonomy
//!
//! Compilation is a pure, bounded transformation: no I/O, no persistent
//! state. Each top-level call owns its [`RefEnv`] exclusively; concurrent
//! compilations need one environment each.

mod assemble;
mod compile;
mod env;
mod error;
mod literal;
mod value;

#[cfg(test)]
mod literal_tests;
#[cfg(test)]
mod value_tests;

pub use assemble::{assemble, assemble_variant, compile_query, compile_value};
pub use env::RefEnv;
pub use error::{CompileError, CompileResult};
pub use literal::Literal;
pub use value::{FieldValue, PredicateHandle, PredicateQuery};
