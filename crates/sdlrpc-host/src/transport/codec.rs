//! Decode-once frame codec.
//!
//! - Size limit is checked before the JSON parser sees the bytes.
//! - Outbound frames are held to the same limit.

use bytes::Bytes;
use sdlrpc_core::error::{Result, SdlRpcError};
use sdlrpc_core::MessageEnvelope;

#[derive(Debug)]
pub struct Inbound {
    pub env: MessageEnvelope,
    pub bytes_len: usize,
}

pub fn decode_frame(frame: &[u8], max_frame_bytes: usize) -> Result<Inbound> {
    let bytes_len = frame.len();
    if bytes_len > max_frame_bytes {
        return Err(SdlRpcError::PayloadTooLarge {
            len: bytes_len,
            max: max_frame_bytes,
        });
    }
    let env = MessageEnvelope::decode_bytes(frame)?;
    Ok(Inbound { env, bytes_len })
}

pub fn encode_frame(env: &MessageEnvelope, max_frame_bytes: usize) -> Result<Bytes> {
    let out = env.encode_bytes()?;
    if out.len() > max_frame_bytes {
        return Err(SdlRpcError::PayloadTooLarge {
            len: out.len(),
            max: max_frame_bytes,
        });
    }
    Ok(out)
}
