//! Telemetry registry and registry-backed container.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use sdlrpc_core::protocol::{Field, ParameterStruct, ProtocolVersion, Value};
use sdlrpc_core::rpc::vehicle_data::{self, VEHICLE_DATA};
use sdlrpc_core::rpc::{
    AmbientLightStatus, ComponentVolumeStatus, FuelRange, FuelType, HeadLampStatus, OnVehicleData, Prndl,
    RpcMessage,
};
use sdlrpc_core::{ErrorCode, MessageEnvelope, MessageKind, TypedParams};

fn v(n: u8) -> ProtocolVersion {
    ProtocolVersion::new(n).unwrap()
}

#[test]
fn speed_and_prndl_scenario() {
    let mut msg = OnVehicleData::new(ProtocolVersion::LATEST);
    msg.set(&vehicle_data::SPEED, Some(55.5)).unwrap();
    assert_eq!(msg.get(&vehicle_data::SPEED), Some(55.5));

    msg.set(&vehicle_data::PRNDL, Some(Prndl::Drive)).unwrap();
    assert_eq!(msg.data().params().get("prndl"), Some(&Value::from("DRIVE")));
    assert_eq!(msg.get(&vehicle_data::PRNDL), Some(Prndl::Drive));
}

#[test]
fn container_fidelity_for_every_shape() {
    let lamp = HeadLampStatus {
        ambient_light_sensor_status: Some(AmbientLightStatus::Twilight2),
        high_beams_on: Some(false),
        low_beams_on: Some(true),
    };
    let ranges = vec![
        FuelRange { fuel_type: Some(FuelType::Gasoline), range: Some(412.0) },
        FuelRange { fuel_type: Some(FuelType::Battery), range: Some(38.5) },
    ];

    for version in ProtocolVersion::all() {
        let mut msg = OnVehicleData::new(version);
        msg.set(&vehicle_data::RPM, Some(2100)).unwrap();
        msg.set(&vehicle_data::VIN, Some("1FTFW1ET5DFC10312".to_string())).unwrap();
        msg.set(&vehicle_data::FUEL_LEVEL_STATE, Some(ComponentVolumeStatus::Low)).unwrap();
        msg.set(&vehicle_data::HEAD_LAMP_STATUS, Some(lamp.clone())).unwrap();
        msg.set(&vehicle_data::FUEL_RANGE, Some(ranges.clone())).unwrap();

        assert_eq!(msg.get(&vehicle_data::RPM), Some(2100), "{version}");
        assert_eq!(msg.get(&vehicle_data::VIN).as_deref(), Some("1FTFW1ET5DFC10312"));
        assert_eq!(msg.get(&vehicle_data::FUEL_LEVEL_STATE), Some(ComponentVolumeStatus::Low));
        assert_eq!(msg.get(&vehicle_data::HEAD_LAMP_STATUS), Some(lamp.clone()));
        assert_eq!(msg.get(&vehicle_data::FUEL_RANGE), Some(ranges.clone()));
    }
}

#[test]
fn non_finite_speed_is_treated_as_absent() {
    let mut msg = OnVehicleData::new(v(5));
    msg.set(&vehicle_data::SPEED, Some(12.0)).unwrap();
    msg.set(&vehicle_data::SPEED, Some(f64::INFINITY)).unwrap();
    msg.set(&vehicle_data::RPM, Some(800)).unwrap();
    assert_eq!(msg.get(&vehicle_data::SPEED), None);

    let env = msg.to_envelope(None, v(5));
    assert_eq!(
        env.encode(),
        json!({ "notification": { "name": "OnVehicleData", "parameters": { "rpm": 800 } } })
    );
    let back = OnVehicleData::from_envelope(&MessageEnvelope::decode(&env.encode()).unwrap(), v(5)).unwrap();
    assert_eq!(back.get(&vehicle_data::SPEED), msg.get(&vehicle_data::SPEED));
}

#[test]
fn set_none_removes_the_field() {
    let mut msg = OnVehicleData::new(ProtocolVersion::LATEST);
    msg.set(&vehicle_data::ODOMETER, Some(12_000)).unwrap();
    msg.set(&vehicle_data::ODOMETER, None).unwrap();
    assert_eq!(msg.get(&vehicle_data::ODOMETER), None);
    assert!(msg.data().params().is_empty());
}

#[test]
fn versioned_key_is_used_for_storage() {
    let mut old = OnVehicleData::new(v(4));
    old.set(&vehicle_data::FUEL_LEVEL_STATE, Some(ComponentVolumeStatus::Alert)).unwrap();
    assert!(old.data().params().contains_key("fuelLevel_State"));

    let mut new = OnVehicleData::new(v(5));
    new.set(&vehicle_data::FUEL_LEVEL_STATE, Some(ComponentVolumeStatus::Alert)).unwrap();
    assert!(new.data().params().contains_key("fuelLevelState"));
}

#[test]
fn to_version_rekeys_registered_fields_and_keeps_unknown_keys() {
    let tree = json!({ "fuelLevel_State": "NORMAL", "speed": 12.5, "vendorExtension": { "a": 1 } });
    let params = ParameterStruct::decode_value(&tree);
    let data = TypedParams::from_params(&VEHICLE_DATA, params, v(3));
    assert_eq!(data.unregistered_keys(), vec!["vendorExtension"]);

    let latest = data.to_version(v(5));
    assert_eq!(
        serde_json::Value::Object(latest.params().encode()),
        json!({ "fuelLevelState": "NORMAL", "speed": 12.5, "vendorExtension": { "a": 1 } })
    );
    assert_eq!(latest.get(&vehicle_data::FUEL_LEVEL_STATE), Some(ComponentVolumeStatus::Normal));
}

#[test]
fn to_version_keeps_registered_field_over_colliding_unknown_key() {
    let tree = json!({ "fuelLevelState": "LOW", "fuelLevel_State": "junk" });
    let data = TypedParams::from_params(&VEHICLE_DATA, ParameterStruct::decode_value(&tree), v(5));
    assert_eq!(data.unregistered_keys(), vec!["fuelLevel_State"]);
    assert_eq!(data.get(&vehicle_data::FUEL_LEVEL_STATE), Some(ComponentVolumeStatus::Low));

    let older = data.to_version(v(4));
    assert_eq!(serde_json::Value::Object(older.params().encode()), json!({ "fuelLevel_State": "LOW" }));
    assert_eq!(older.get(&vehicle_data::FUEL_LEVEL_STATE), Some(ComponentVolumeStatus::Low));
}

#[test]
fn to_version_filters_the_same_way_at_the_current_version() {
    let tree = json!({ "speed": "fast", "rpm": 700, "vendorExtension": true });
    let data = TypedParams::from_params(&VEHICLE_DATA, ParameterStruct::decode_value(&tree), v(5));

    let same = data.to_version(v(5));
    assert_eq!(
        serde_json::Value::Object(same.params().encode()),
        json!({ "rpm": 700, "vendorExtension": true })
    );
    let other = data.to_version(v(4));
    assert_eq!(same.params(), other.params());

    let msg = OnVehicleData::from_params(data.params(), v(5));
    assert_eq!(msg.to_params(v(5)), msg.to_params(v(4)));
}

#[test]
fn reads_use_the_registered_key_like_writes() {
    const FUEL_UNDER_OTHER_KEY: Field<ComponentVolumeStatus> = Field::new("fuel_level_state", "otherFuelKey");

    let mut msg = OnVehicleData::new(v(5));
    msg.set(&FUEL_UNDER_OTHER_KEY, Some(ComponentVolumeStatus::Alert)).unwrap();
    assert!(msg.data().params().contains_key("fuelLevelState"));
    assert!(!msg.data().params().contains_key("otherFuelKey"));
    assert_eq!(msg.get(&FUEL_UNDER_OTHER_KEY), Some(ComponentVolumeStatus::Alert));
    assert_eq!(msg.get(&vehicle_data::FUEL_LEVEL_STATE), Some(ComponentVolumeStatus::Alert));
}

#[test]
fn to_version_drops_fields_that_do_not_resolve() {
    let tree = json!({ "prndl": "WARP", "rpm": 800 });
    let data = TypedParams::from_params(&VEHICLE_DATA, ParameterStruct::decode_value(&tree), v(5));
    let moved = data.to_version(v(2));
    assert_eq!(serde_json::Value::Object(moved.params().encode()), json!({ "rpm": 800 }));
}

#[test]
fn wrong_shape_reads_as_absent_and_resolve_skips_it() {
    let tree = json!({ "speed": "fast", "rpm": 700, "headLampStatus": 1 });
    let data = TypedParams::from_params(&VEHICLE_DATA, ParameterStruct::decode_value(&tree), v(5));
    assert_eq!(data.get(&vehicle_data::SPEED), None);
    assert_eq!(data.get(&vehicle_data::HEAD_LAMP_STATUS), None);
    assert_eq!(data.get_raw(vehicle_data::SPEED.id()), Some(&Value::from("fast")));

    let resolved = data.resolved();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].0, vehicle_data::RPM.id());
    assert_eq!(resolved[0].1, Value::from(700));
}

#[test]
fn unregistered_or_mismatched_handles_are_rejected_on_write() {
    const UNKNOWN: Field<f64> = Field::new("boost_pressure", "boostPressure");
    const SPEED_AS_TEXT: Field<String> = Field::new("speed", "speed");

    let mut msg = OnVehicleData::new(ProtocolVersion::LATEST);
    let err = msg.set(&UNKNOWN, Some(1.0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownField);

    let err = msg.set(&SPEED_AS_TEXT, Some("fast".to_string())).unwrap_err();
    assert_eq!(err.code(), ErrorCode::FieldTypeMismatch);

    assert_eq!(msg.get(&UNKNOWN), None);
    assert_eq!(msg.get(&SPEED_AS_TEXT), None);
    assert!(msg.data().params().is_empty());
}

#[test]
fn registry_lookup() {
    assert_eq!(VEHICLE_DATA.name(), "VehicleData");
    assert_eq!(VEHICLE_DATA.resolve_key(vehicle_data::FUEL_LEVEL_STATE.id(), v(1)), Some("fuelLevel_State"));
    let entry = VEHICLE_DATA.entry_for_key("fuelLevelState", v(5)).unwrap();
    assert_eq!(entry.id(), vehicle_data::FUEL_LEVEL_STATE.id());
    assert!(VEHICLE_DATA.entry_for_key("fuelLevelState", v(4)).is_none());
    VEHICLE_DATA.validate().unwrap();
}

#[test]
fn notification_envelope_round_trip() {
    let mut msg = OnVehicleData::new(v(5));
    msg.set(&vehicle_data::SPEED, Some(80.0)).unwrap();
    msg.set(&vehicle_data::FUEL_LEVEL_STATE, Some(ComponentVolumeStatus::Normal)).unwrap();

    let env = msg.to_envelope(Some(99), v(4));
    assert_eq!(env.kind(), MessageKind::Notification);
    assert_eq!(env.correlation_id(), None);
    assert_eq!(
        env.encode(),
        json!({ "notification": { "name": "OnVehicleData", "parameters": {
            "speed": 80.0, "fuelLevel_State": "NORMAL"
        } } })
    );

    let bytes = env.encode_bytes().unwrap();
    let decoded = MessageEnvelope::decode_bytes(&bytes).unwrap();
    let back = OnVehicleData::from_envelope(&decoded, v(4)).unwrap();
    assert_eq!(back.get(&vehicle_data::SPEED), Some(80.0));
    assert_eq!(back.get(&vehicle_data::FUEL_LEVEL_STATE), Some(ComponentVolumeStatus::Normal));
}
