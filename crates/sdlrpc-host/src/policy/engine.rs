use sdlrpc_core::{ErrorCode, MessageKind};

use crate::config::HostConfig;

use super::allowlist::{compile_rules, is_allowed, Rule};

/// Decision from policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Pass,
    Reject { code: ErrorCode, msg: &'static str },
}

/// Compiled host policy.
/// Construct once at startup, then share via Arc.
#[derive(Debug)]
pub struct PolicyRuntime {
    max_frame_bytes: usize,
    rules: Vec<Rule>,
}

impl PolicyRuntime {
    pub fn new(cfg: &HostConfig) -> sdlrpc_core::Result<Self> {
        Ok(Self {
            max_frame_bytes: cfg.limits.max_frame_bytes,
            rules: compile_rules(&cfg.policy.allow)?,
        })
    }

    pub fn max_frame_bytes(&self) -> usize {
        self.max_frame_bytes
    }

    /// Cheap size check before any parsing.
    pub fn check_len(&self, bytes_len: usize) -> PolicyDecision {
        if bytes_len > self.max_frame_bytes {
            return PolicyDecision::Reject {
                code: ErrorCode::PayloadTooLarge,
                msg: "frame too large",
            };
        }
        PolicyDecision::Pass
    }

    /// Kind/function allowlist.
    pub fn check_message(&self, kind: MessageKind, function: &str) -> PolicyDecision {
        if self.rules.is_empty() {
            return PolicyDecision::Reject {
                code: ErrorCode::NotAllowed,
                msg: "policy.allow empty (strict deny)",
            };
        }

        if !is_allowed(&self.rules, kind, function) {
            return PolicyDecision::Reject {
                code: ErrorCode::NotAllowed,
                msg: "kind/function not allowed",
            };
        }

        PolicyDecision::Pass
    }
}
