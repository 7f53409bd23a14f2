//! Scalar literal rendering.

use anglekit_core::is_valid_field_name;

use crate::error::{CompileError, CompileResult};

/// A primitive Angle value: the leaves of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Natural number, rendered in decimal.
    Nat(u64),
    Boolean(bool),
    /// UTF-8 string, rendered double-quoted with escapes.
    String(String),
    /// Enum value, rendered as its bare declared label.
    Enum(String),
}

impl Literal {
    /// Canonical textual form. Stable across platforms and locales, and
    /// round-trippable by the Angle parser.
    pub fn render(&self) -> CompileResult<String> {
        match self {
            Literal::Nat(n) => Ok(n.to_string()),
            Literal::Boolean(b) => Ok(if *b { "true" } else { "false" }.to_owned()),
            Literal::String(s) => render_string(s),
            Literal::Enum(label) => {
                if !is_valid_field_name(label) {
                    return Err(CompileError::Encoding {
                        what: format!("enum label `{label}`"),
                        reason: "not a bare identifier".to_owned(),
                    });
                }
                Ok(label.clone())
            }
        }
    }
}

/// Quote and escape a string literal.
///
/// Control characters other than `\n`, `\r`, `\t` have no escape in the
/// grammar; they fail rather than being dropped or truncated.
fn render_string(s: &str) -> CompileResult<String> {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                return Err(CompileError::Encoding {
                    what: "string literal".to_owned(),
                    reason: format!("control character U+{:04X} has no escape", c as u32),
                });
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}
