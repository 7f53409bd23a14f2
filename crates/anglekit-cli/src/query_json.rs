//! JSON query documents and their translation to compiler values.
//!
//! The document mirrors the compiler's value model with externally tagged
//! variants: `{"nat": 5}`, `{"string": "s"}`, `{"bool": true}`,
//! `{"enum": "sha1"}`, `{"var": "X"}`, `{"just": ...}`, `"nothing"`,
//! `{"list": [...]}` and `{"query": {...}}`. Omitting a field in `fields`
//! leaves it unconstrained.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use anglekit_compiler::{FieldValue, PredicateQuery};
use anglekit_core::SchemaRegistry;

/// One predicate invocation. `version` defaults to the highest registered
/// version of the predicate.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDoc {
    pub predicate: String,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub fields: IndexMap<String, ValueDoc>,
}

/// One field value in a query document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueDoc {
    Nat(u64),
    String(String),
    Bool(bool),
    Enum(String),
    /// A query variable, emitted verbatim.
    Var(String),
    Just(Box<ValueDoc>),
    Nothing,
    List(Vec<ValueDoc>),
    Query(QueryDoc),
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("registry has no predicate `{0}`")]
    UnknownPredicate(String),

    #[error("registry has no predicate `{name}.{version}`")]
    UnknownVersion { name: String, version: u32 },
}

/// Resolve a document against the registry into a compilable query.
pub fn to_query(
    registry: &SchemaRegistry,
    doc: &QueryDoc,
) -> Result<PredicateQuery, TranslateError> {
    let spec = match doc.version {
        Some(version) => {
            registry
                .get(&doc.predicate, version)
                .ok_or_else(|| TranslateError::UnknownVersion {
                    name: doc.predicate.clone(),
                    version,
                })?
        }
        None => registry
            .latest(&doc.predicate)
            .ok_or_else(|| TranslateError::UnknownPredicate(doc.predicate.clone()))?,
    };
    let mut query = PredicateQuery::new(Arc::clone(spec));
    for (name, value) in &doc.fields {
        query.set_field(name, to_value(registry, value)?);
    }
    Ok(query)
}

fn to_value(registry: &SchemaRegistry, doc: &ValueDoc) -> Result<FieldValue, TranslateError> {
    Ok(match doc {
        ValueDoc::Nat(n) => FieldValue::nat(*n),
        ValueDoc::String(s) => FieldValue::string(s.clone()),
        ValueDoc::Bool(b) => FieldValue::boolean(*b),
        ValueDoc::Enum(label) => FieldValue::enum_label(label.clone()),
        ValueDoc::Var(name) => FieldValue::named(name.clone()),
        ValueDoc::Just(inner) => FieldValue::just(to_value(registry, inner)?),
        ValueDoc::Nothing => FieldValue::nothing(),
        ValueDoc::List(items) => FieldValue::sequence(
            items
                .iter()
                .map(|item| to_value(registry, item))
                .collect::<Result<_, _>>()?,
        ),
        ValueDoc::Query(inner) => to_query(registry, inner)?.into(),
    })
}
