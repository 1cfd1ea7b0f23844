//! Transport layer (newline-delimited JSON frames).
//!
//! Exposes the codec that decodes frames once before they reach the policy
//! and dispatcher layers.

pub mod codec;

pub use codec::{decode_frame, encode_frame, Inbound};
