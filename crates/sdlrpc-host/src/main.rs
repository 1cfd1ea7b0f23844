//! sdlrpc inspector
//!
//! Reads newline-delimited JSON envelopes from stdin, applies the configured
//! policy, dispatches them to logging handlers and writes replies to stdout.
//!
//! Usage: `sdlrpc-inspect [config.yaml]` (default `sdlrpc.yaml`).
//! Log level comes from `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use sdlrpc_core::rpc::{
    self, DeleteCommand, DeleteCommandResponse, OnButtonPress, OnVehicleData, ResultCode, RpcMessage,
    SystemRequest,
};
use sdlrpc_core::{MessageEnvelope, ProtocolVersion};
use sdlrpc_host::config;
use sdlrpc_host::dispatch::{Dispatcher, HandlerCtx, TypedHandler};
use sdlrpc_host::policy::{PolicyDecision, PolicyRuntime};
use sdlrpc_host::transport::{decode_frame, encode_frame};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "sdlrpc.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");
    rpc::validate_schema().expect("built-in schema invalid");
    let version = cfg.protocol_version().expect("protocol.version validated on load");
    let policy = PolicyRuntime::new(&cfg).expect("policy validated on load");
    let dispatcher = build_dispatcher();

    tracing::info!(%version, config = %path, handlers = dispatcher.registered().len(), "sdlrpc-inspect starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Some(reply) = process_line(&policy, &dispatcher, version, index + 1, line.as_bytes()) {
            if let Err(e) = stdout.write_all(&reply).and_then(|_| stdout.write_all(b"\n")) {
                tracing::error!(error = %e, "stdout write failed");
                break;
            }
        }
    }
}

fn process_line(
    policy: &PolicyRuntime,
    dispatcher: &Dispatcher,
    version: ProtocolVersion,
    line: usize,
    frame: &[u8],
) -> Option<bytes::Bytes> {
    if let PolicyDecision::Reject { code, msg } = policy.check_len(frame.len()) {
        tracing::warn!(line, code = code.as_str(), msg, "frame rejected");
        return None;
    }

    let inbound = match decode_frame(frame, policy.max_frame_bytes()) {
        Ok(i) => i,
        Err(e) => {
            tracing::warn!(line, code = e.code().as_str(), error = %e, "decode failed");
            return None;
        }
    };
    let env = inbound.env;

    if let PolicyDecision::Reject { code, msg } = policy.check_message(env.kind(), env.function_name()) {
        tracing::warn!(line, kind = env.kind().as_str(), function = env.function_name(), code = code.as_str(), msg, "message rejected");
        return None;
    }

    tracing::debug!(line, bytes = inbound.bytes_len, kind = env.kind().as_str(), function = env.function_name(), "dispatching");

    let reply = match dispatcher.dispatch(version, &env) {
        Ok(Some(reply)) => reply,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(line, code = e.code().as_str(), error = %e, "dispatch failed");
            return None;
        }
    };

    match encode_frame(&reply, policy.max_frame_bytes()) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::error!(line, code = e.code().as_str(), error = %e, "reply encode failed");
            None
        }
    }
}

fn build_dispatcher() -> Dispatcher {
    let d = Dispatcher::new();

    d.register(Arc::new(TypedHandler::new(|ctx: HandlerCtx, msg: DeleteCommand| {
        tracing::info!(cmd_id = ?msg.cmd_id, correlation_id = ?ctx.correlation_id, "DeleteCommand");
        let resp = DeleteCommandResponse {
            success: Some(msg.cmd_id.is_some()),
            result_code: Some(if msg.cmd_id.is_some() {
                ResultCode::Success
            } else {
                ResultCode::InvalidData
            }),
            info: None,
        };
        Ok(Some(resp.to_envelope(ctx.correlation_id, ctx.version)))
    })));

    d.register(Arc::new(TypedHandler::new(|ctx: HandlerCtx, msg: DeleteCommandResponse| {
        tracing::info!(success = ?msg.success, result = ?msg.result_code, correlation_id = ?ctx.correlation_id, "DeleteCommand response");
        Ok(None::<MessageEnvelope>)
    })));

    d.register(Arc::new(TypedHandler::new(|ctx: HandlerCtx, msg: SystemRequest| {
        tracing::info!(
            file_name = ?msg.file_name,
            request_type = ?msg.request_type,
            data_lines = msg.data.as_ref().map_or(0, Vec::len),
            correlation_id = ?ctx.correlation_id,
            "SystemRequest"
        );
        Ok(None)
    })));

    d.register(Arc::new(TypedHandler::new(|_ctx: HandlerCtx, msg: OnButtonPress| {
        tracing::info!(button = ?msg.button_name, mode = ?msg.button_press_mode, custom_id = ?msg.custom_button_id, "OnButtonPress");
        Ok(None)
    })));

    d.register(Arc::new(TypedHandler::new(|_ctx: HandlerCtx, msg: OnVehicleData| {
        for (id, value) in msg.data().resolved() {
            tracing::info!(field = %id, value = %value.to_json(), "OnVehicleData");
        }
        let ignored = msg.data().unregistered_keys();
        if !ignored.is_empty() {
            tracing::debug!(keys = ?ignored, "OnVehicleData carried unregistered keys");
        }
        Ok(None)
    })));

    d
}
