//! Registry JSON layer.
//!
//! Schema registries arrive as JSON produced by the schema toolchain. The
//! raw layer maps 1:1 onto that JSON; `SchemaRegistry::build` turns it into
//! validated specs keyed by name and version. Each name+version pair is an
//! independent entry: a second definition of the same pair is an error,
//! never a silent override.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::spec::{FieldSpec, PredicateSpec, SpecError};

/// Raw field entry from registry JSON.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(default)]
    pub positional: bool,
}

/// Raw predicate entry from registry JSON.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawPredicate {
    pub predicate: String,
    pub version: u32,
    #[serde(default)]
    pub fields: Vec<RawField>,
    #[serde(default)]
    pub variants: Vec<String>,
    /// Inner (anonymous) schema types set this to false.
    #[serde(default = "default_shareable")]
    pub shareable: bool,
}

fn default_shareable() -> bool {
    true
}

/// Parse registry JSON content into raw predicate entries.
pub fn parse_registry(json: &str) -> Result<Vec<RawPredicate>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Errors raised while loading a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("malformed registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("registry already contains `{name}.{version}`")]
    DuplicateSpec { name: String, version: u32 },
}

/// Predicate specs keyed by name and version.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    specs: IndexMap<(String, u32), Arc<PredicateSpec>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and build in one step.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw = parse_registry(json)?;
        Self::build(&raw)
    }

    /// Build a registry from raw entries, validating every spec.
    pub fn build(raw: &[RawPredicate]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in raw {
            let fields = entry
                .fields
                .iter()
                .map(|f| FieldSpec::new(f.name.clone(), f.positional))
                .collect();
            let spec = PredicateSpec::validated(
                &entry.predicate,
                entry.version,
                fields,
                &entry.variants,
                entry.shareable,
            )?;
            registry.insert(Arc::new(spec))?;
        }
        Ok(registry)
    }

    /// Register one spec. Duplicate name+version is an error.
    pub fn insert(&mut self, spec: Arc<PredicateSpec>) -> Result<(), RegistryError> {
        let key = (spec.name().to_owned(), spec.version());
        if self.specs.contains_key(&key) {
            return Err(RegistryError::DuplicateSpec {
                name: key.0,
                version: key.1,
            });
        }
        self.specs.insert(key, spec);
        Ok(())
    }

    pub fn get(&self, name: &str, version: u32) -> Option<&Arc<PredicateSpec>> {
        self.specs.get(&(name.to_owned(), version))
    }

    /// Highest registered version of a predicate name.
    pub fn latest(&self, name: &str) -> Option<&Arc<PredicateSpec>> {
        self.specs
            .values()
            .filter(|s| s.name() == name)
            .max_by_key(|s| s.version())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<PredicateSpec>> {
        self.specs.values()
    }
}
