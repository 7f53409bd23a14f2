//! Validated predicate schema contracts.
//!
//! A `PredicateSpec` describes one versioned fact: its canonical name, the
//! declared field order, which field (if any) is positional, the variant
//! tags of sum types, and whether the predicate may be bound to a query
//! variable. Name and version together are the identity: `graphql.Directive`
//! at version 2 and version 3 are distinct specs, never interchanged.

use indexmap::IndexSet;

/// Errors raised while validating schema contracts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("invalid predicate name `{0}`")]
    InvalidPredicateName(String),

    #[error("predicate `{predicate}` declares invalid field name `{field}`")]
    InvalidFieldName { predicate: String, field: String },

    #[error("predicate `{predicate}` declares field `{field}` twice")]
    DuplicateField { predicate: String, field: String },

    #[error("positional predicate `{0}` must declare exactly one field")]
    PositionalArity(String),
}

/// One declared field of a predicate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    /// Positional fields render without the `name:` label.
    positional: bool,
}

impl FieldSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_positional(&self) -> bool {
        self.positional
    }
}

/// Schema contract for one versioned fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateSpec {
    name: String,
    version: u32,
    fields: Vec<FieldSpec>,
    variants: IndexSet<String>,
    shareable: bool,
}

impl PredicateSpec {
    /// A record fact with labeled fields in declaration order.
    ///
    /// Intended for trusted (generated or in-crate) schema data; inputs are
    /// checked with debug assertions only. Schema text loaded at runtime
    /// goes through [`PredicateSpec::validated`] instead.
    pub fn record(name: &str, version: u32, fields: &[&str]) -> Self {
        debug_assert!(is_valid_predicate_name(name), "bad predicate name {name}");
        Self {
            name: name.to_owned(),
            version,
            fields: fields
                .iter()
                .map(|f| {
                    debug_assert!(is_valid_field_name(f), "bad field name {f}");
                    FieldSpec {
                        name: (*f).to_owned(),
                        positional: false,
                    }
                })
                .collect(),
            variants: IndexSet::new(),
            shareable: true,
        }
    }

    /// A fact whose key is a single unlabeled value, e.g. `graphql.Value`.
    pub fn positional(name: &str, version: u32, fields: &[&str]) -> Self {
        debug_assert!(fields.len() == 1, "positional predicate has one field");
        let mut spec = Self::record(name, version, fields);
        spec.fields[0].positional = true;
        spec
    }

    /// A sum-typed fact: every field is a variant tag and exactly one may
    /// be supplied per invocation.
    pub fn union(name: &str, version: u32, tags: &[&str]) -> Self {
        let mut spec = Self::record(name, version, tags);
        spec.variants = tags.iter().map(|t| (*t).to_owned()).collect();
        spec
    }

    /// Mark the predicate as anonymous (an inner type of the schema): it
    /// always renders inline and is never bound to a query variable.
    pub fn anonymous(mut self) -> Self {
        self.shareable = false;
        self
    }

    /// Fully validated construction for schema data loaded at runtime.
    pub fn validated(
        name: &str,
        version: u32,
        fields: Vec<FieldSpec>,
        variants: &[String],
        shareable: bool,
    ) -> Result<Self, SpecError> {
        if !is_valid_predicate_name(name) {
            return Err(SpecError::InvalidPredicateName(name.to_owned()));
        }
        let mut seen = IndexSet::new();
        for field in &fields {
            if !is_valid_field_name(&field.name) {
                return Err(SpecError::InvalidFieldName {
                    predicate: name.to_owned(),
                    field: field.name.clone(),
                });
            }
            if !seen.insert(field.name.clone()) {
                return Err(SpecError::DuplicateField {
                    predicate: name.to_owned(),
                    field: field.name.clone(),
                });
            }
        }
        if fields.iter().filter(|f| f.positional).count() > 1
            || (fields.iter().any(|f| f.positional) && fields.len() != 1)
        {
            return Err(SpecError::PositionalArity(name.to_owned()));
        }
        // Variant tags double as fields; a tag the field list doesn't carry
        // is added in declaration order.
        let mut all_fields = fields;
        for tag in variants {
            if !is_valid_field_name(tag) {
                return Err(SpecError::InvalidFieldName {
                    predicate: name.to_owned(),
                    field: tag.clone(),
                });
            }
            if !all_fields.iter().any(|f| &f.name == tag) {
                all_fields.push(FieldSpec {
                    name: tag.clone(),
                    positional: false,
                });
            }
        }
        Ok(Self {
            name: name.to_owned(),
            version,
            fields: all_fields,
            variants: variants.iter().cloned().collect(),
            shareable,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// The versioned invocation head, e.g. `graphql.Directive.2`.
    pub fn reference(&self) -> String {
        format!("{}.{}", self.name, self.version)
    }

    /// Declared fields in schema order. Schema order, not caller-supplied
    /// order, governs rendered output.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Variant tags for sum types; empty for records.
    pub fn variants(&self) -> &IndexSet<String> {
        &self.variants
    }

    pub fn is_union(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Whether the key is a single unlabeled value.
    pub fn is_positional(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].positional
    }

    /// Whether the predicate may be registered in a reference environment
    /// and bound to a query variable. False for inner (anonymous) types.
    pub fn is_shareable(&self) -> bool {
        self.shareable
    }
}

/// Predicate names are dot-separated identifiers: `testinfra.CoveredFile`,
/// `code.flow.Entity`.
pub fn is_valid_predicate_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

/// Field names (and variant tags) are plain identifiers. Trailing
/// underscores are common in generated schemas (`query_`, `module_`).
pub fn is_valid_field_name(name: &str) -> bool {
    is_identifier(name)
}

/// Angle variables start with an uppercase ASCII letter.
pub fn is_valid_variable(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl FieldSpec {
    /// Construct a labeled field entry (runtime registry path).
    pub fn new(name: impl Into<String>, positional: bool) -> Self {
        Self {
            name: name.into(),
            positional,
        }
    }
}
