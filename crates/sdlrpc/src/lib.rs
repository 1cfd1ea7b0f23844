//! Top-level facade crate for sdlrpc.
//!
//! Re-exports the core codec and the host library so users can depend on a
//! single crate.
//!
//! ```
//! use sdlrpc::prelude::*;
//!
//! let env = DeleteCommand::new(42).to_envelope(Some(7), ProtocolVersion::LATEST);
//! assert_eq!(env.function_name(), "DeleteCommand");
//! ```

pub mod core {
    pub use sdlrpc_core::*;
}

pub mod host {
    pub use sdlrpc_host::*;
}

/// Types most applications need.
pub mod prelude {
    pub use sdlrpc_core::rpc::{
        vehicle_data, DeleteCommand, DeleteCommandResponse, FunctionId, OnButtonPress, OnVehicleData, RpcMessage,
        SystemRequest,
    };
    pub use sdlrpc_core::{
        Field, MessageEnvelope, MessageKind, ParameterStruct, ProtocolVersion, Result, SdlRpcError, WireEnum,
        WireType,
    };
}
