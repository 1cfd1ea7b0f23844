//! Allowlist compilation and matching utilities.
//!
//! Rules have the form `kind:function`, where either side may be `*`
//! (`notification:*`, `*:DeleteCommand`).

use sdlrpc_core::error::{Result, SdlRpcError};
use sdlrpc_core::MessageKind;

/// Compiled allowlist rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: Option<MessageKind>, // None => wildcard
    pub function: Option<String>,  // None => wildcard
}

pub fn compile_rules(raw: &[String]) -> Result<Vec<Rule>> {
    let mut out = Vec::with_capacity(raw.len());
    for s in raw {
        let (kind_s, function) = s.split_once(':').ok_or_else(|| {
            SdlRpcError::BadRequest(format!("invalid policy.allow entry: {s} (expected kind:function)"))
        })?;

        let kind = if kind_s == "*" {
            None
        } else {
            Some(MessageKind::from_tag(kind_s).ok_or_else(|| {
                SdlRpcError::BadRequest(format!("invalid policy.allow kind: {kind_s}"))
            })?)
        };

        if function.is_empty() {
            return Err(SdlRpcError::BadRequest(format!(
                "invalid policy.allow entry: {s} (empty function)"
            )));
        }
        let function = if function == "*" { None } else { Some(function.to_string()) };

        out.push(Rule { kind, function });
    }
    Ok(out)
}

pub fn is_allowed(rules: &[Rule], kind: MessageKind, function: &str) -> bool {
    rules.iter().any(|r| {
        if r.kind.is_some_and(|k| k != kind) {
            return false;
        }
        match &r.function {
            None => true,
            Some(f) => f == function,
        }
    })
}
