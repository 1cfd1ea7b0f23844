//! RPC catalog: function ids, enums, structs and typed message views.
//!
//! Every type here is a thin view over the generic codec. Field keys are
//! declared once as `Field` constants next to the type that owns them, and
//! version-specific renames live in key tables and enum override lists rather
//! than in the accessors.

pub mod enums;
pub mod messages;
pub mod structs;
pub mod vehicle_data;

use crate::error::{Result, SdlRpcError};
use crate::protocol::{MessageEnvelope, MessageKind, ParameterStruct, ProtocolVersion, WireEnum};
use crate::wire_enum;

pub use enums::*;
pub use messages::{DeleteCommand, DeleteCommandResponse, OnButtonPress, SystemRequest};
pub use structs::{FuelRange, HeadLampStatus, ImageField, ImageResolution};
pub use vehicle_data::{OnVehicleData, VEHICLE_DATA};

wire_enum! {
    /// RPC function names.
    pub enum FunctionId {
        RegisterAppInterface = "RegisterAppInterface",
        UnregisterAppInterface = "UnregisterAppInterface",
        AddCommand = "AddCommand",
        DeleteCommand = "DeleteCommand",
        SubscribeVehicleData = "SubscribeVehicleData",
        GetVehicleData = "GetVehicleData",
        /// Legacy carrier replaced by `SystemRequest`; still accepted.
        EncodedSyncPData = "EncodedSyncPData",
        SystemRequest = "SystemRequest",
        GenericResponse = "GenericResponse",
        OnHmiStatus = "OnHMIStatus",
        OnButtonPress = "OnButtonPress",
        OnVehicleData = "OnVehicleData",
    }
}

/// Typed view over one RPC function's parameters.
pub trait RpcMessage: Sized {
    const FUNCTION: FunctionId;
    const KIND: MessageKind;

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self;
    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct;

    /// Wrap in an envelope. `correlation_id` is ignored for notifications.
    fn to_envelope(&self, correlation_id: Option<u32>, version: ProtocolVersion) -> MessageEnvelope {
        MessageEnvelope::new(
            Self::KIND,
            Self::FUNCTION.to_wire_name(version),
            correlation_id,
            self.to_params(version),
        )
    }

    /// Typed view of `envelope`, if it carries this function and kind.
    fn from_envelope(envelope: &MessageEnvelope, version: ProtocolVersion) -> Option<Self> {
        if envelope.kind() != Self::KIND {
            return None;
        }
        if FunctionId::from_wire_name(envelope.function_name(), version) != Some(Self::FUNCTION) {
            return None;
        }
        Some(Self::from_params(&envelope.parameters, version))
    }
}

/// Function id of a decoded envelope, if the name is known at `version`.
pub fn function_of(envelope: &MessageEnvelope, version: ProtocolVersion) -> Option<FunctionId> {
    FunctionId::from_wire_name(envelope.function_name(), version)
}

/// Validate every built-in table. Call once at startup.
pub fn validate_schema() -> Result<()> {
    VEHICLE_DATA.validate()?;
    for field in structs::ALL_KEY_TABLES.iter().chain(messages::ALL_KEY_TABLES) {
        field.validate()?;
    }
    check_enum::<FunctionId>()?;
    enums::validate()?;
    Ok(())
}

/// Every enumerator must have a distinct wire name at every version.
pub(crate) fn check_enum<E: WireEnum>() -> Result<()> {
    for version in ProtocolVersion::all() {
        for (i, a) in E::ALL.iter().enumerate() {
            let name = a.to_wire_name(version);
            if E::ALL.iter().skip(i + 1).any(|b| b.to_wire_name(version) == name) {
                return Err(SdlRpcError::Schema(format!(
                    "{}: wire name `{name}` is ambiguous at {version}",
                    E::TYPE_NAME
                )));
            }
        }
    }
    Ok(())
}
