use std::marker::PhantomData;
use std::sync::Arc;

use dashmap::DashMap;

use sdlrpc_core::error::{Result, SdlRpcError};
use sdlrpc_core::protocol::WireEnum;
use sdlrpc_core::rpc::{FunctionId, RpcMessage};
use sdlrpc_core::{MessageEnvelope, MessageKind, ProtocolVersion};

/// Per-message context handed to handlers.
#[derive(Debug, Clone, Copy)]
pub struct HandlerCtx {
    pub version: ProtocolVersion,
    pub correlation_id: Option<u32>,
}

/// Handler for one function and message kind.
///
/// Returning `Some(envelope)` produces a reply frame.
pub trait RpcHandler: Send + Sync {
    fn function(&self) -> FunctionId;
    fn kind(&self) -> MessageKind;
    fn handle(&self, ctx: HandlerCtx, env: &MessageEnvelope) -> Result<Option<MessageEnvelope>>;
}

/// Adapts a closure over a typed message into an [`RpcHandler`].
pub struct TypedHandler<M, F> {
    f: F,
    _marker: PhantomData<fn() -> M>,
}

impl<M, F> TypedHandler<M, F>
where
    M: RpcMessage,
    F: Fn(HandlerCtx, M) -> Result<Option<MessageEnvelope>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<M, F> RpcHandler for TypedHandler<M, F>
where
    M: RpcMessage,
    F: Fn(HandlerCtx, M) -> Result<Option<MessageEnvelope>> + Send + Sync,
{
    fn function(&self) -> FunctionId {
        M::FUNCTION
    }

    fn kind(&self) -> MessageKind {
        M::KIND
    }

    fn handle(&self, ctx: HandlerCtx, env: &MessageEnvelope) -> Result<Option<MessageEnvelope>> {
        let msg = M::from_envelope(env, ctx.version).ok_or_else(|| {
            SdlRpcError::BadRequest(format!(
                "{} {} does not match handler",
                env.kind().as_str(),
                env.function_name()
            ))
        })?;
        (self.f)(ctx, msg)
    }
}

/// Registry and dispatcher keyed by function and kind.
#[derive(Default)]
pub struct Dispatcher {
    handlers: DashMap<(FunctionId, MessageKind), Arc<dyn RpcHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    pub fn register(&self, handler: Arc<dyn RpcHandler>) {
        self.handlers.insert((handler.function(), handler.kind()), handler);
    }

    pub fn registered(&self) -> Vec<(FunctionId, MessageKind)> {
        self.handlers.iter().map(|e| *e.key()).collect()
    }

    pub fn dispatch(&self, version: ProtocolVersion, env: &MessageEnvelope) -> Result<Option<MessageEnvelope>> {
        let name = env.function_name();
        let function = FunctionId::from_wire_name(name, version)
            .ok_or_else(|| SdlRpcError::BadRequest(format!("unknown function: {name:?}")))?;
        let handler = self
            .handlers
            .get(&(function, env.kind()))
            .ok_or_else(|| {
                SdlRpcError::BadRequest(format!("no handler for {} {name}", env.kind().as_str()))
            })?
            .value()
            .clone();
        let ctx = HandlerCtx {
            version,
            correlation_id: env.correlation_id(),
        };
        handler.handle(ctx, env)
    }
}
