//! Per-compilation reference environment.

use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use anglekit_core::is_valid_variable;

use crate::error::{CompileError, CompileResult};
use crate::value::PredicateQuery;

/// Key identifying one sub-expression: pointer identity for inline
/// references, the variable name for named ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RefKey {
    Ptr(usize),
    Name(String),
}

/// Mutable mapping from already-rendered sub-expressions to their assigned
/// Angle variables, plus the named sub-queries a compilation may expand.
///
/// Scoped to one top-level compilation and discarded with it. An
/// environment is never shared between concurrent compilations; give each
/// its own instance.
#[derive(Debug, Default)]
pub struct RefEnv {
    assigned: IndexMap<RefKey, String>,
    bindings: IndexMap<String, Rc<PredicateQuery>>,
    used_names: IndexSet<String>,
    next_var: u32,
}

impl RefEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a named sub-query that [`crate::PredicateHandle::Named`] can
    /// expand. The name must be a valid Angle variable and the predicate
    /// must be shareable (inner predicates always render inline).
    pub fn bind(
        &mut self,
        name: impl Into<String>,
        query: Rc<PredicateQuery>,
    ) -> CompileResult<()> {
        let name = name.into();
        if !is_valid_variable(&name) {
            return Err(CompileError::Encoding {
                what: format!("binding `{name}`"),
                reason: "not a valid Angle variable (must start with an uppercase letter)"
                    .to_owned(),
            });
        }
        if !query.spec().is_shareable() {
            return Err(CompileError::ContractViolation(format!(
                "inner predicate `{}` cannot be bound to `{name}`",
                query.spec().reference()
            )));
        }
        if self.bindings.contains_key(&name) {
            return Err(CompileError::ContractViolation(format!(
                "binding `{name}` declared twice"
            )));
        }
        self.used_names.insert(name.clone());
        self.bindings.insert(name, query);
        Ok(())
    }

    pub(crate) fn binding(&self, name: &str) -> Option<Rc<PredicateQuery>> {
        self.bindings.get(name).cloned()
    }

    pub(crate) fn lookup(&self, key: &RefKey) -> Option<&str> {
        self.assigned.get(key).map(String::as_str)
    }

    /// Mark a variable name as taken without assigning it to a key. Free
    /// variables emitted verbatim reserve their name here so generated
    /// bindings never collide with them.
    pub(crate) fn reserve(&mut self, name: &str) {
        self.used_names.insert(name.to_owned());
    }

    /// Record the variable for a now-rendered sub-expression. A fresh
    /// `X{n}` is generated unless the caller supplies the name.
    pub(crate) fn assign(&mut self, key: RefKey, name: Option<String>) -> String {
        let name = name.unwrap_or_else(|| self.fresh());
        self.used_names.insert(name.clone());
        self.assigned.insert(key, name.clone());
        name
    }

    /// Next unused `X{n}`, skipping names the caller already bound.
    fn fresh(&mut self) -> String {
        loop {
            let candidate = format!("X{}", self.next_var);
            self.next_var += 1;
            if !self.used_names.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Number of sub-expressions assigned a variable so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
