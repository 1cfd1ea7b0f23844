//! RPC message envelope (JSON).
//!
//! Wire shape:
//! ```text
//! { "<request|response|notification>": {
//!     "name": "<function name>",
//!     "correlationID": <integer>,   // request/response only
//!     "parameters": { ... } } }
//! ```
//!
//! Parsing rules:
//! - Exactly one of the three tag keys must be present; otherwise the whole
//!   decode fails with `MalformedEnvelope` and nothing partial is returned.
//! - Inside a valid tag, every member is optional. A missing name decodes as
//!   `""`, a missing correlation id as `None`; validity of those is left to the
//!   application.

use bytes::Bytes;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::error::{Result, SdlRpcError};

use super::params::{json_shape, ParameterStruct};

pub const KEY_REQUEST: &str = "request";
pub const KEY_RESPONSE: &str = "response";
pub const KEY_NOTIFICATION: &str = "notification";
pub const KEY_FUNCTION_NAME: &str = "name";
pub const KEY_CORRELATION_ID: &str = "correlationID";
pub const KEY_PARAMETERS: &str = "parameters";

/// Envelope tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Request,
    Response,
    Notification,
}

impl MessageKind {
    pub const ALL: [MessageKind; 3] = [
        MessageKind::Request,
        MessageKind::Response,
        MessageKind::Notification,
    ];

    /// Tag key used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Request => KEY_REQUEST,
            MessageKind::Response => KEY_RESPONSE,
            MessageKind::Notification => KEY_NOTIFICATION,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// Whether this kind carries a correlation id.
    pub fn is_correlated(self) -> bool {
        !matches!(self, MessageKind::Notification)
    }
}

/// Decoded or outgoing RPC message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    kind: MessageKind,
    function_name: String,
    correlation_id: Option<u32>,
    pub parameters: ParameterStruct,
}

impl MessageEnvelope {
    /// Generic constructor. The correlation id is dropped for notifications.
    pub fn new(
        kind: MessageKind,
        function_name: impl Into<String>,
        correlation_id: Option<u32>,
        parameters: ParameterStruct,
    ) -> Self {
        Self {
            kind,
            function_name: function_name.into(),
            correlation_id: correlation_id.filter(|_| kind.is_correlated()),
            parameters,
        }
    }

    pub fn request(function_name: impl Into<String>, correlation_id: u32, parameters: ParameterStruct) -> Self {
        Self {
            kind: MessageKind::Request,
            function_name: function_name.into(),
            correlation_id: Some(correlation_id),
            parameters,
        }
    }

    pub fn response(function_name: impl Into<String>, correlation_id: u32, parameters: ParameterStruct) -> Self {
        Self {
            kind: MessageKind::Response,
            function_name: function_name.into(),
            correlation_id: Some(correlation_id),
            parameters,
        }
    }

    pub fn notification(function_name: impl Into<String>, parameters: ParameterStruct) -> Self {
        Self {
            kind: MessageKind::Notification,
            function_name: function_name.into(),
            correlation_id: None,
            parameters,
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn correlation_id(&self) -> Option<u32> {
        self.correlation_id
    }

    /// Decode from a JSON tree.
    pub fn decode(tree: &JsonValue) -> Result<Self> {
        let outer = tree.as_object().ok_or_else(|| {
            SdlRpcError::MalformedEnvelope(format!("expected object, got {}", json_shape(tree)))
        })?;

        let mut tags = outer
            .keys()
            .filter_map(|k| MessageKind::from_tag(k).map(|kind| (kind, k.as_str())));
        let (kind, tag) = match (tags.next(), tags.next()) {
            (Some(found), None) => found,
            (None, _) => {
                return Err(SdlRpcError::MalformedEnvelope(
                    "missing request/response/notification tag".into(),
                ))
            }
            (Some((_, a)), Some((_, b))) => {
                return Err(SdlRpcError::MalformedEnvelope(format!(
                    "ambiguous tags `{a}` and `{b}`"
                )))
            }
        };

        let body = outer
            .get(tag)
            .and_then(JsonValue::as_object)
            .ok_or_else(|| SdlRpcError::MalformedEnvelope(format!("`{tag}` is not an object")))?;

        let function_name = match body.get(KEY_FUNCTION_NAME) {
            Some(JsonValue::String(s)) => s.clone(),
            other => {
                tracing::debug!(tag, found = other.map_or("absent", json_shape), "envelope without function name");
                String::new()
            }
        };

        let correlation_id = read_correlation_id(body);
        if kind.is_correlated() && correlation_id.is_none() {
            tracing::debug!(tag, function = %function_name, "correlated envelope without usable correlationID");
        }

        let parameters = body
            .get(KEY_PARAMETERS)
            .map(ParameterStruct::decode_value)
            .unwrap_or_default();

        Ok(Self {
            kind,
            function_name,
            correlation_id,
            parameters,
        })
    }

    /// Decode from raw frame bytes. Invalid JSON is a malformed envelope.
    pub fn decode_bytes(data: &[u8]) -> Result<Self> {
        let tree: JsonValue = serde_json::from_slice(data)
            .map_err(|e| SdlRpcError::MalformedEnvelope(format!("invalid json: {e}")))?;
        Self::decode(&tree)
    }

    /// Encode to a JSON tree.
    pub fn encode(&self) -> JsonValue {
        let mut body = JsonMap::new();
        body.insert(KEY_FUNCTION_NAME.into(), JsonValue::String(self.function_name.clone()));
        if self.kind.is_correlated() {
            if let Some(id) = self.correlation_id {
                body.insert(KEY_CORRELATION_ID.into(), JsonValue::from(id));
            }
        }
        body.insert(KEY_PARAMETERS.into(), JsonValue::Object(self.parameters.encode()));

        let mut outer = JsonMap::new();
        outer.insert(self.kind.as_str().into(), JsonValue::Object(body));
        JsonValue::Object(outer)
    }

    /// Encode to frame bytes.
    pub fn encode_bytes(&self) -> Result<Bytes> {
        let data = serde_json::to_vec(&self.encode())
            .map_err(|e| SdlRpcError::Internal(format!("json encode failed: {e}")))?;
        Ok(Bytes::from(data))
    }
}

fn read_correlation_id(body: &JsonMap<String, JsonValue>) -> Option<u32> {
    body.get(KEY_CORRELATION_ID)
        .and_then(JsonValue::as_u64)
        .and_then(|id| u32::try_from(id).ok())
}
