//! Compile error taxonomy.

/// Errors raised while compiling a query to Angle text.
///
/// All of these are caller/schema mismatches surfaced at the point of
/// detection, never transient conditions. There is no partial output:
/// compilation either returns one complete fragment or one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A value the Angle grammar cannot represent.
    #[error("cannot encode {what}: {reason}")]
    Encoding { what: String, reason: String },

    /// The same field was supplied twice in one invocation.
    #[error("field `{field}` supplied twice for `{predicate}`")]
    DuplicateField { predicate: String, field: String },

    /// A variant tag the sum type does not declare.
    #[error("`{predicate}` has no variant `{tag}`")]
    UnknownVariant { predicate: String, tag: String },

    /// The predicate reference graph contains a cycle.
    #[error("cyclic reference: {path}")]
    CyclicReference { path: String },

    /// Field not declared in the schema, or variant cardinality violated.
    #[error("{0}")]
    ContractViolation(String),
}

/// Result type for compilation.
pub type CompileResult<T> = std::result::Result<T, CompileError>;
