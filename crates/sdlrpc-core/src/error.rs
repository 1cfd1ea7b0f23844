//! Shared error type across sdlrpc crates.
//!
//! Only envelope-level failures are hard errors on the decode path. Field-level
//! problems (wrong shape, unknown enum text, missing version entry) degrade to
//! absence and are logged instead of returned.

use thiserror::Error;

/// Stable error codes (safe to log, compare, or surface to peers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Outer envelope tag missing, ambiguous, or not JSON at all.
    MalformedEnvelope,
    /// Typed write against a registry entry of another shape.
    FieldTypeMismatch,
    /// Typed write of a field the container does not register.
    UnknownField,
    /// Protocol version outside the supported range.
    UnsupportedVersion,
    /// Invalid key table or registry definition.
    Schema,
    /// Frame exceeds the configured limit.
    PayloadTooLarge,
    /// Invalid input / configuration.
    BadRequest,
    /// Rejected by policy.
    NotAllowed,
    /// Internal failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedEnvelope => "MALFORMED_ENVELOPE",
            ErrorCode::FieldTypeMismatch => "FIELD_TYPE_MISMATCH",
            ErrorCode::UnknownField => "UNKNOWN_FIELD",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Schema => "SCHEMA",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotAllowed => "NOT_ALLOWED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SdlRpcError>;

/// Unified error type used by core and host.
#[derive(Debug, Error)]
pub enum SdlRpcError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    #[error("field `{field}` is registered as {expected}, got {found}")]
    FieldTypeMismatch {
        field: String,
        expected: String,
        found: String,
    },
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u8),
    #[error("schema: {0}")]
    Schema(String),
    #[error("payload too large: {len} > {max} bytes")]
    PayloadTooLarge { len: usize, max: usize },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not allowed: {0}")]
    NotAllowed(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SdlRpcError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SdlRpcError::MalformedEnvelope(_) => ErrorCode::MalformedEnvelope,
            SdlRpcError::FieldTypeMismatch { .. } => ErrorCode::FieldTypeMismatch,
            SdlRpcError::UnknownField(_) => ErrorCode::UnknownField,
            SdlRpcError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            SdlRpcError::Schema(_) => ErrorCode::Schema,
            SdlRpcError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            SdlRpcError::BadRequest(_) => ErrorCode::BadRequest,
            SdlRpcError::NotAllowed(_) => ErrorCode::NotAllowed,
            SdlRpcError::Internal(_) => ErrorCode::Internal,
        }
    }
}
