//! Recursive-descent compilation of query values to Angle text.
//!
//! Two passes. The first pass counts how often each shared sub-query occurs
//! so the second knows, at the *first* occurrence, whether to bind it to a
//! variable. The second pass renders, threading the environment so later
//! occurrences collapse to the assigned variable.

use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use anglekit_core::is_valid_variable;

use crate::env::{RefEnv, RefKey};
use crate::error::{CompileError, CompileResult};
use crate::value::{FieldValue, PredicateHandle, PredicateQuery};

/// How many times each inline sub-query occurs under one compilation root,
/// plus the free variables the root mentions.
#[derive(Debug, Default)]
pub(crate) struct Occurrences {
    inline: IndexMap<usize, usize>,
    free: IndexSet<String>,
}

impl Occurrences {
    /// True when the sub-query occurs more than once and thus earns a
    /// `(X = ...)` binding at its first rendering.
    fn shared(&self, ptr: usize) -> bool {
        self.inline.get(&ptr).is_some_and(|&n| n > 1)
    }
}

/// Count inline occurrences under `query`. Infallible: cycles and contract
/// violations are reported by the rendering pass, so the scan only has to
/// terminate, which the first-visit gates guarantee.
pub(crate) fn scan_query(env: &RefEnv, query: &PredicateQuery) -> Occurrences {
    let mut occurrences = Occurrences::default();
    let mut expanded = IndexSet::new();
    for (_, value) in query.fields() {
        scan(env, value, &mut occurrences, &mut expanded);
    }
    occurrences
}

/// Count inline occurrences under a single value.
pub(crate) fn scan_value(env: &RefEnv, value: &FieldValue) -> Occurrences {
    let mut occurrences = Occurrences::default();
    let mut expanded = IndexSet::new();
    scan(env, value, &mut occurrences, &mut expanded);
    occurrences
}

fn scan(
    env: &RefEnv,
    value: &FieldValue,
    occurrences: &mut Occurrences,
    expanded: &mut IndexSet<String>,
) {
    match value {
        FieldValue::Unspecified | FieldValue::Scalar(_) | FieldValue::Optional(None) => {}
        FieldValue::Optional(Some(inner)) => scan(env, inner, occurrences, expanded),
        FieldValue::Sequence(items) => {
            for item in items {
                scan(env, item, occurrences, expanded);
            }
        }
        FieldValue::Reference(PredicateHandle::Inline(query)) => {
            let ptr = Rc::as_ptr(query) as usize;
            let count = occurrences.inline.entry(ptr).or_insert(0);
            *count += 1;
            // Fields only contribute once per distinct sub-query.
            if *count == 1 {
                for (_, value) in query.fields() {
                    scan(env, value, occurrences, expanded);
                }
            }
        }
        FieldValue::Reference(PredicateHandle::Named(name)) => {
            if expanded.insert(name.clone()) {
                match env.binding(name) {
                    Some(query) => {
                        for (_, value) in query.fields() {
                            scan(env, value, occurrences, expanded);
                        }
                    }
                    None => {
                        occurrences.free.insert(name.clone());
                    }
                }
            }
        }
    }
}

/// The rendering pass. Borrows the environment for the duration of one
/// top-level compilation; the visiting stack tracks the expansion path for
/// cycle reporting.
pub(crate) struct Compiler<'e> {
    env: &'e mut RefEnv,
    occurrences: Occurrences,
    visiting: Vec<(RefKey, String)>,
}

impl<'e> Compiler<'e> {
    pub(crate) fn new(env: &'e mut RefEnv, occurrences: Occurrences) -> Self {
        // Free variables keep their names no matter where in the render
        // order they appear; fresh binding names must skip all of them.
        for name in &occurrences.free {
            env.reserve(name);
        }
        Self {
            env,
            occurrences,
            visiting: Vec::new(),
        }
    }

    /// Render one field value. `label` is the schema field name for labeled
    /// output, or `None` at positional and nested positions. Returns the
    /// empty string when the value contributes nothing.
    pub(crate) fn value(
        &mut self,
        value: &FieldValue,
        label: Option<&str>,
    ) -> CompileResult<String> {
        let rendered = match value {
            FieldValue::Unspecified => return Ok(String::new()),
            FieldValue::Scalar(lit) => lit.render()?,
            FieldValue::Reference(handle) => self.reference(handle)?,
            FieldValue::Optional(None) => "nothing".to_owned(),
            FieldValue::Optional(Some(inner)) => {
                let inner = self.value(inner, None)?;
                if inner.is_empty() {
                    return Ok(String::new());
                }
                inner
            }
            FieldValue::Sequence(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    let part = self.value(item, None)?;
                    if part.is_empty() {
                        return Err(CompileError::ContractViolation(
                            "list elements must be specified".to_owned(),
                        ));
                    }
                    parts.push(part);
                }
                format!("[{}]", parts.join(", "))
            }
        };
        Ok(match label {
            Some(name) => format!("{name}: {rendered}"),
            None => rendered,
        })
    }

    fn reference(&mut self, handle: &PredicateHandle) -> CompileResult<String> {
        match handle {
            PredicateHandle::Inline(query) => {
                let ptr = Rc::as_ptr(query) as usize;
                let key = RefKey::Ptr(ptr);
                if let Some(var) = self.env.lookup(&key) {
                    return Ok(var.to_owned());
                }
                let label = query.spec().reference();
                let fragment = self.expand(key.clone(), label, query)?;
                if query.spec().is_shareable() && self.occurrences.shared(ptr) {
                    let var = self.env.assign(key, None);
                    Ok(format!("({var} = {fragment})"))
                } else {
                    Ok(fragment)
                }
            }
            PredicateHandle::Named(name) => {
                if !is_valid_variable(name) {
                    return Err(CompileError::Encoding {
                        what: format!("reference `{name}`"),
                        reason: "not a valid Angle variable (must start with an uppercase letter)"
                            .to_owned(),
                    });
                }
                let key = RefKey::Name(name.clone());
                if let Some(var) = self.env.lookup(&key) {
                    return Ok(var.to_owned());
                }
                let Some(query) = self.env.binding(name) else {
                    // Free variable, reserved at scan time: the
                    // surrounding query supplies it.
                    return Ok(name.clone());
                };
                let fragment = self.expand(key.clone(), name.clone(), &query)?;
                let var = self.env.assign(key, Some(name.clone()));
                Ok(format!("({var} = {fragment})"))
            }
        }
    }

    /// Render a sub-query, guarding against re-entry through the same key.
    fn expand(
        &mut self,
        key: RefKey,
        label: String,
        query: &PredicateQuery,
    ) -> CompileResult<String> {
        if self.visiting.iter().any(|(k, _)| *k == key) {
            return Err(self.cycle_error(&key, &label));
        }
        self.visiting.push((key, label));
        let result = self.predicate(query);
        self.visiting.pop();
        result
    }

    fn cycle_error(&self, key: &RefKey, label: &str) -> CompileError {
        let start = self
            .visiting
            .iter()
            .position(|(k, _)| k == key)
            .unwrap_or(0);
        let mut path: Vec<&str> = self.visiting[start..]
            .iter()
            .map(|(_, label)| label.as_str())
            .collect();
        path.push(label);
        let path = path
            .iter()
            .map(|p| format!("`{p}`"))
            .collect::<Vec<_>>()
            .join(" → ");
        CompileError::CyclicReference { path }
    }

    /// Render one predicate invocation: head, then the key pattern in
    /// schema field order.
    pub(crate) fn predicate(&mut self, query: &PredicateQuery) -> CompileResult<String> {
        let spec = query.spec().clone();
        let head = spec.reference();

        let mut seen = IndexSet::new();
        for (name, _) in query.fields() {
            if spec.field(name).is_none() {
                return Err(CompileError::ContractViolation(format!(
                    "`{head}` has no field `{name}`"
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(CompileError::DuplicateField {
                    predicate: head,
                    field: name.clone(),
                });
            }
        }

        if spec.is_union() {
            let supplied = query
                .fields()
                .iter()
                .filter(|(_, v)| !v.is_unspecified())
                .count();
            if supplied > 1 {
                return Err(CompileError::ContractViolation(format!(
                    "`{head}` is a sum type; at most one variant may be supplied"
                )));
            }
        }

        // Schema order, not caller order.
        let mut parts = Vec::new();
        for field in spec.fields() {
            let Some((name, value)) = query
                .fields()
                .iter()
                .find(|(n, _)| n.as_str() == field.name())
            else {
                continue;
            };
            let label = if field.is_positional() {
                None
            } else {
                Some(name.as_str())
            };
            let rendered = self.value(value, label)?;
            if !rendered.is_empty() {
                parts.push(rendered);
            }
        }

        Ok(if parts.is_empty() {
            format!("{head} _")
        } else if spec.is_positional() {
            format!("{head} {}", parts[0])
        } else {
            format!("{head} {{ {} }}", parts.join(", "))
        })
    }
}
