//! sdlrpc core: versioned RPC message codec primitives.
//!
//! This crate converts typed head-unit RPC messages (requests, responses,
//! notifications and the vehicle telemetry snapshot) to and from the JSON
//! envelope used on the wire, across protocol versions that rename keys and
//! enum values over time. It carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Decoding never fails on a single bad field: wrong shapes and unknown enum
//! text degrade to absence. Only a malformed outer envelope is an error.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod rpc;

/// Shared result type.
pub use error::{ErrorCode, Result, SdlRpcError};
pub use protocol::{
    Field, FieldId, MessageEnvelope, MessageKind, ParameterStruct, ProtocolVersion, TypeRegistry,
    TypedParams, Value, WireEnum, WireType,
};
