//! Property tests: total decode and typed round trips.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use proptest::prelude::*;
use serde_json::{json, Value as JsonValue};

use sdlrpc_core::protocol::{ParameterStruct, ProtocolVersion, WireEnum};
use sdlrpc_core::rpc::{
    vehicle_data, ButtonName, ButtonPressMode, OnButtonPress, OnVehicleData, Prndl, RpcMessage, WiperStatus,
};
use sdlrpc_core::MessageEnvelope;

fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(JsonValue::from),
        (-1.0e9..1.0e9f64).prop_map(JsonValue::from),
        "[a-zA-Z_]{0,12}".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::btree_map("[a-zA-Z]{1,10}", inner, 0..6)
                .prop_map(|m| JsonValue::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_version() -> impl Strategy<Value = ProtocolVersion> {
    (1u8..=5).prop_map(|n| ProtocolVersion::new(n).unwrap())
}

fn arb_tag() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("request"), Just("response"), Just("notification")]
}

proptest! {
    #[test]
    fn arbitrary_parameters_never_fail_decode(tag in arb_tag(), params in arb_json(), version in arb_version()) {
        let tree = json!({ tag: { "name": "OnVehicleData", "correlationID": 1, "parameters": params } });
        let env = MessageEnvelope::decode(&tree).unwrap();

        // typed views are total as well
        let _ = OnButtonPress::from_params(&env.parameters, version);
        let data = OnVehicleData::from_params(&env.parameters, version);
        let _ = data.get(&vehicle_data::HEAD_LAMP_STATUS);
        let _ = data.get(&vehicle_data::FUEL_RANGE);
        let _ = data.data().resolved();

        // nulls never survive into the encoded tree
        let encoded = JsonValue::Object(env.parameters.encode());
        prop_assert!(encoded.as_object().unwrap().values().all(|v| !v.is_null()));
    }

    #[test]
    fn single_tagged_objects_always_decode(tag in arb_tag(), body in prop::collection::btree_map("[a-zA-Z]{1,10}", arb_json(), 0..6)) {
        let tree = json!({ tag: JsonValue::Object(body.into_iter().collect()) });
        prop_assert!(MessageEnvelope::decode(&tree).is_ok());
    }

    #[test]
    fn enums_round_trip(version in arb_version(), i in 0usize..64) {
        let prndl = Prndl::ALL[i % Prndl::ALL.len()];
        prop_assert_eq!(Prndl::from_wire_name(prndl.to_wire_name(version), version), Some(prndl));
        let wiper = WiperStatus::ALL[i % WiperStatus::ALL.len()];
        prop_assert_eq!(WiperStatus::from_wire_name(wiper.to_wire_name(version), version), Some(wiper));
    }

    #[test]
    fn button_press_round_trips(
        version in arb_version(),
        name in prop::option::of(0usize..ButtonName::ALL.len()),
        long in prop::option::of(any::<bool>()),
        custom in prop::option::of(any::<u32>()),
    ) {
        let press = OnButtonPress {
            button_name: name.map(|i| ButtonName::ALL[i]),
            button_press_mode: long.map(|l| if l { ButtonPressMode::Long } else { ButtonPressMode::Short }),
            custom_button_id: custom,
        };
        let bytes = press.to_envelope(None, version).encode_bytes().unwrap();
        let env = MessageEnvelope::decode_bytes(&bytes).unwrap();
        prop_assert_eq!(OnButtonPress::from_envelope(&env, version), Some(press));
    }

    #[test]
    fn telemetry_round_trips(version in arb_version(), speed in 0.0..300.0f64, rpm in any::<u32>(), gear in 0usize..16) {
        let mut msg = OnVehicleData::new(version);
        msg.set(&vehicle_data::SPEED, Some(speed)).unwrap();
        msg.set(&vehicle_data::RPM, Some(rpm)).unwrap();
        msg.set(&vehicle_data::PRNDL, Some(Prndl::ALL[gear % Prndl::ALL.len()])).unwrap();

        let tree = msg.to_envelope(None, version).encode();
        let env = MessageEnvelope::decode(&tree).unwrap();
        let back = OnVehicleData::from_envelope(&env, version).unwrap();
        prop_assert_eq!(back.data().params(), msg.data().params());
        prop_assert_eq!(back.get(&vehicle_data::SPEED), Some(speed));
    }
}

#[test]
fn empty_parameters_decode_to_empty_struct() {
    let env = MessageEnvelope::decode(&json!({ "notification": { "name": "OnHMIStatus" } })).unwrap();
    assert_eq!(env.parameters, ParameterStruct::new());
}
