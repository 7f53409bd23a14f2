//! The query value model callers build before compilation.

use std::rc::Rc;
use std::sync::Arc;

use anglekit_core::PredicateSpec;

use crate::error::CompileResult;
use crate::literal::Literal;

/// What a caller supplied for one schema field.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Field omitted entirely. Never participates in output; distinct from
    /// an explicit null and from an empty list.
    Unspecified,
    Scalar(Literal),
    /// A nested fact query.
    Reference(PredicateHandle),
    /// Explicit presence marker: `None` compiles to the null literal,
    /// `Some` delegates to the inner value. Used where the schema
    /// distinguishes "present but null" from "not asked about".
    Optional(Option<Box<FieldValue>>),
    /// Ordered sibling values. The empty sequence is a real value (the
    /// empty-list literal), not omission.
    Sequence(Vec<FieldValue>),
}

impl FieldValue {
    pub fn nat(n: u64) -> Self {
        FieldValue::Scalar(Literal::Nat(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        FieldValue::Scalar(Literal::String(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        FieldValue::Scalar(Literal::Boolean(b))
    }

    /// An enum value by its declared label.
    pub fn enum_label(label: impl Into<String>) -> Self {
        FieldValue::Scalar(Literal::Enum(label.into()))
    }

    /// A nested query shared by identity: passing the same `Rc` twice
    /// within one compilation deduplicates the rendered text.
    pub fn reference(query: Rc<PredicateQuery>) -> Self {
        FieldValue::Reference(PredicateHandle::Inline(query))
    }

    /// A reference by Angle variable name; see [`PredicateHandle::Named`].
    pub fn named(name: impl Into<String>) -> Self {
        FieldValue::Reference(PredicateHandle::Named(name.into()))
    }

    /// Explicitly present optional.
    pub fn just(inner: FieldValue) -> Self {
        FieldValue::Optional(Some(Box::new(inner)))
    }

    /// Explicitly null optional, distinct from [`FieldValue::Unspecified`].
    pub fn nothing() -> Self {
        FieldValue::Optional(None)
    }

    pub fn sequence(items: Vec<FieldValue>) -> Self {
        FieldValue::Sequence(items)
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, FieldValue::Unspecified)
    }
}

impl From<Literal> for FieldValue {
    fn from(lit: Literal) -> Self {
        FieldValue::Scalar(lit)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::string(s)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::string(s)
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::nat(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::boolean(b)
    }
}

impl From<Rc<PredicateQuery>> for FieldValue {
    fn from(query: Rc<PredicateQuery>) -> Self {
        FieldValue::reference(query)
    }
}

impl From<PredicateQuery> for FieldValue {
    fn from(query: PredicateQuery) -> Self {
        FieldValue::reference(Rc::new(query))
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Pointer to another predicate query, by identity or by name.
#[derive(Debug, Clone)]
pub enum PredicateHandle {
    /// Nested query, shared by `Rc` identity.
    Inline(Rc<PredicateQuery>),
    /// An Angle variable. Expanded from the environment's bindings when one
    /// exists; emitted verbatim as a free variable otherwise.
    Named(String),
}

/// A partially-specified invocation of one predicate.
///
/// Fields accumulate in caller order; the schema's declared order governs
/// the rendered output. Validation happens at assembly, not here.
#[derive(Debug, Clone)]
pub struct PredicateQuery {
    spec: Arc<PredicateSpec>,
    fields: Vec<(String, FieldValue)>,
}

impl PredicateQuery {
    pub fn new(spec: Arc<PredicateSpec>) -> Self {
        Self {
            spec,
            fields: Vec::new(),
        }
    }

    /// Builder-style field append.
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    pub fn spec(&self) -> &Arc<PredicateSpec> {
        &self.spec
    }

    /// Supplied fields in caller order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Wrap for identity-based sharing across fields of one query.
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// Compile against a fresh environment.
    pub fn compile(&self) -> CompileResult<String> {
        crate::assemble::compile_query(self)
    }
}
