#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Typed query builders for the shipped Angle schemas.
//!
//! Each schema module declares one marker type per predicate with a
//! chainable builder, backed by a lazily-built [`PredicateSpec`] shared by
//! every query against that predicate. Builders accumulate fields without
//! validating; the compiler checks the schema contract when the query is
//! rendered.
//!
//! [`PredicateSpec`]: anglekit_core::PredicateSpec

mod macros;

pub mod codeflow;
pub mod graphql;
pub mod src;
pub mod testinfra;

#[cfg(test)]
mod graphql_tests;
