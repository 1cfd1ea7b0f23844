//! sdlrpc host library entry.
//!
//! This crate wires config, policy, the frame codec and the dispatcher around
//! the core codec. It is consumed by the inspector binary (`main.rs`) and by
//! integration tests.

pub mod config;
pub mod dispatch;
pub mod policy;
pub mod transport;
