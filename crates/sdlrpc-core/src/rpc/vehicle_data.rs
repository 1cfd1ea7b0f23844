//! Vehicle telemetry registry and the `OnVehicleData` notification.
//!
//! Telemetry messages carry any subset of many independently typed fields, so
//! they go through a [`TypeRegistry`] instead of a fixed struct. Fields are
//! read and written with the handles declared here:
//!
//! ```
//! use sdlrpc_core::rpc::{vehicle_data, OnVehicleData, Prndl};
//! use sdlrpc_core::ProtocolVersion;
//!
//! let mut msg = OnVehicleData::new(ProtocolVersion::LATEST);
//! msg.set(&vehicle_data::PRNDL, Some(Prndl::Drive)).unwrap();
//! assert_eq!(msg.get(&vehicle_data::PRNDL), Some(Prndl::Drive));
//! ```

use crate::error::Result;
use crate::protocol::{
    Field, FieldEntry, KeyMapping, MessageKind, ParameterStruct, ProtocolVersion, TypeRegistry,
    TypedParams, VersionRange, VersionedKeyTable, WireType,
};

use super::enums::{ComponentVolumeStatus, Prndl, VehicleDataEventStatus, WiperStatus};
use super::structs::{FuelRange, HeadLampStatus};
use super::{FunctionId, RpcMessage};

const FUEL_LEVEL_STATE_KEYS: &[KeyMapping] = &[KeyMapping {
    range: VersionRange::since(5),
    key: "fuelLevelState",
}];

pub const SPEED: Field<f64> = Field::new("speed", "speed");
pub const RPM: Field<u32> = Field::new("rpm", "rpm");
pub const FUEL_LEVEL: Field<f64> = Field::new("fuel_level", "fuelLevel");
pub const FUEL_LEVEL_STATE: Field<ComponentVolumeStatus> = Field::versioned(
    "fuel_level_state",
    VersionedKeyTable::versioned("fuelLevel_State", FUEL_LEVEL_STATE_KEYS),
);
pub const INSTANT_FUEL_CONSUMPTION: Field<f64> =
    Field::new("instant_fuel_consumption", "instantFuelConsumption");
pub const EXTERNAL_TEMPERATURE: Field<f64> = Field::new("external_temperature", "externalTemperature");
pub const VIN: Field<String> = Field::new("vin", "vin");
pub const PRNDL: Field<Prndl> = Field::new("prndl", "prndl");
pub const ODOMETER: Field<u32> = Field::new("odometer", "odometer");
pub const DRIVER_BRAKING: Field<VehicleDataEventStatus> = Field::new("driver_braking", "driverBraking");
pub const WIPER_STATUS: Field<WiperStatus> = Field::new("wiper_status", "wiperStatus");
pub const HEAD_LAMP_STATUS: Field<HeadLampStatus> = Field::new("head_lamp_status", "headLampStatus");
pub const ENGINE_TORQUE: Field<f64> = Field::new("engine_torque", "engineTorque");
pub const ACC_PEDAL_POSITION: Field<f64> = Field::new("acc_pedal_position", "accPedalPosition");
pub const STEERING_WHEEL_ANGLE: Field<f64> = Field::new("steering_wheel_angle", "steeringWheelAngle");
pub const FUEL_RANGE: Field<Vec<FuelRange>> = Field::new("fuel_range", "fuelRange");

const VEHICLE_DATA_FIELDS: &[FieldEntry] = &[
    SPEED.entry(),
    RPM.entry(),
    FUEL_LEVEL.entry(),
    FUEL_LEVEL_STATE.entry(),
    INSTANT_FUEL_CONSUMPTION.entry(),
    EXTERNAL_TEMPERATURE.entry(),
    VIN.entry(),
    PRNDL.entry(),
    ODOMETER.entry(),
    DRIVER_BRAKING.entry(),
    WIPER_STATUS.entry(),
    HEAD_LAMP_STATUS.entry(),
    ENGINE_TORQUE.entry(),
    ACC_PEDAL_POSITION.entry(),
    STEERING_WHEEL_ANGLE.entry(),
    FUEL_RANGE.entry(),
];

/// Every telemetry field a vehicle-data message may carry.
pub static VEHICLE_DATA: TypeRegistry = TypeRegistry::new("VehicleData", VEHICLE_DATA_FIELDS);

/// Telemetry snapshot pushed by the head unit.
#[derive(Debug, Clone, PartialEq)]
pub struct OnVehicleData {
    data: TypedParams,
}

impl OnVehicleData {
    pub fn new(version: ProtocolVersion) -> Self {
        Self {
            data: TypedParams::new(&VEHICLE_DATA, version),
        }
    }

    pub fn version(&self) -> ProtocolVersion {
        self.data.version()
    }

    pub fn get<T: WireType>(&self, field: &Field<T>) -> Option<T> {
        self.data.get(field)
    }

    pub fn set<T: WireType>(&mut self, field: &Field<T>, value: Option<T>) -> Result<()> {
        self.data.set(field, value)
    }

    pub fn data(&self) -> &TypedParams {
        &self.data
    }
}

impl RpcMessage for OnVehicleData {
    const FUNCTION: FunctionId = FunctionId::OnVehicleData;
    const KIND: MessageKind = MessageKind::Notification;

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            data: TypedParams::from_params(&VEHICLE_DATA, params.clone(), version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        self.data.to_version(version).into_params()
    }
}
