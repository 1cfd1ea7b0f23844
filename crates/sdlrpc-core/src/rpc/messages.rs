//! Typed message views with fixed fields.

use crate::protocol::{Field, MessageKind, ParameterStruct, ProtocolVersion, VersionedKeyTable};

use super::enums::{ButtonName, ButtonPressMode, RequestType, ResultCode};
use super::{FunctionId, RpcMessage};

/// Remove a previously added menu command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCommand {
    pub cmd_id: Option<u32>,
}

impl DeleteCommand {
    pub const CMD_ID: Field<u32> = Field::new("delete_command.cmd_id", "cmdID");

    pub fn new(cmd_id: u32) -> Self {
        Self { cmd_id: Some(cmd_id) }
    }
}

impl RpcMessage for DeleteCommand {
    const FUNCTION: FunctionId = FunctionId::DeleteCommand;
    const KIND: MessageKind = MessageKind::Request;

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            cmd_id: Self::CMD_ID.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::CMD_ID.write(&mut params, self.cmd_id.as_ref(), version);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCommandResponse {
    pub success: Option<bool>,
    pub result_code: Option<ResultCode>,
    pub info: Option<String>,
}

impl DeleteCommandResponse {
    pub const SUCCESS: Field<bool> = Field::new("response.success", "success");
    pub const RESULT_CODE: Field<ResultCode> = Field::new("response.result_code", "resultCode");
    pub const INFO: Field<String> = Field::new("response.info", "info");
}

impl RpcMessage for DeleteCommandResponse {
    const FUNCTION: FunctionId = FunctionId::DeleteCommand;
    const KIND: MessageKind = MessageKind::Response;

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            success: Self::SUCCESS.read(params, version),
            result_code: Self::RESULT_CODE.read(params, version),
            info: Self::INFO.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::SUCCESS.write(&mut params, self.success.as_ref(), version);
        Self::RESULT_CODE.write(&mut params, self.result_code.as_ref(), version);
        Self::INFO.write(&mut params, self.info.as_ref(), version);
        params
    }
}

/// Button press reported by the head unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnButtonPress {
    pub button_name: Option<ButtonName>,
    pub button_press_mode: Option<ButtonPressMode>,
    /// Only meaningful for `ButtonName::CustomButton`.
    pub custom_button_id: Option<u32>,
}

impl OnButtonPress {
    pub const BUTTON_NAME: Field<ButtonName> = Field::new("on_button_press.button_name", "buttonName");
    pub const BUTTON_PRESS_MODE: Field<ButtonPressMode> =
        Field::new("on_button_press.button_press_mode", "buttonPressMode");
    pub const CUSTOM_BUTTON_ID: Field<u32> =
        Field::new("on_button_press.custom_button_id", "customButtonID");
}

impl RpcMessage for OnButtonPress {
    const FUNCTION: FunctionId = FunctionId::OnButtonPress;
    const KIND: MessageKind = MessageKind::Notification;

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            button_name: Self::BUTTON_NAME.read(params, version),
            button_press_mode: Self::BUTTON_PRESS_MODE.read(params, version),
            custom_button_id: Self::CUSTOM_BUTTON_ID.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::BUTTON_NAME.write(&mut params, self.button_name.as_ref(), version);
        Self::BUTTON_PRESS_MODE.write(&mut params, self.button_press_mode.as_ref(), version);
        Self::CUSTOM_BUTTON_ID.write(&mut params, self.custom_button_id.as_ref(), version);
        params
    }
}

/// Opaque system payload relayed between app and head unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemRequest {
    pub file_name: Option<String>,
    pub request_type: Option<RequestType>,
    /// Legacy inline payload; non-string elements are skipped on read.
    pub data: Option<Vec<String>>,
}

impl SystemRequest {
    pub const FILE_NAME: Field<String> = Field::new("system_request.file_name", "fileName");
    pub const REQUEST_TYPE: Field<RequestType> = Field::new("system_request.request_type", "requestType");
    pub const DATA: Field<Vec<String>> = Field::new("system_request.data", "data");
}

impl RpcMessage for SystemRequest {
    const FUNCTION: FunctionId = FunctionId::SystemRequest;
    const KIND: MessageKind = MessageKind::Request;

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            file_name: Self::FILE_NAME.read(params, version),
            request_type: Self::REQUEST_TYPE.read(params, version),
            data: Self::DATA.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::FILE_NAME.write(&mut params, self.file_name.as_ref(), version);
        Self::REQUEST_TYPE.write(&mut params, self.request_type.as_ref(), version);
        Self::DATA.write(&mut params, self.data.as_ref(), version);
        params
    }
}

pub(crate) const ALL_KEY_TABLES: &[VersionedKeyTable] = &[
    *DeleteCommand::CMD_ID.keys(),
    *DeleteCommandResponse::SUCCESS.keys(),
    *DeleteCommandResponse::RESULT_CODE.keys(),
    *DeleteCommandResponse::INFO.keys(),
    *OnButtonPress::BUTTON_NAME.keys(),
    *OnButtonPress::BUTTON_PRESS_MODE.keys(),
    *OnButtonPress::CUSTOM_BUTTON_ID.keys(),
    *SystemRequest::FILE_NAME.keys(),
    *SystemRequest::REQUEST_TYPE.keys(),
    *SystemRequest::DATA.keys(),
];
