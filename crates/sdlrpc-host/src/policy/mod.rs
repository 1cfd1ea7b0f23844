//! Policy layer (frame limit, kind/function allowlist).
//!
//! Compiles policy configuration into lookup structures the inspector loop
//! consults before dispatching.

pub mod allowlist;
pub mod engine;

pub use engine::{PolicyDecision, PolicyRuntime};
