//! Field codec: absence, shape mismatch, lists, nested structs.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use sdlrpc_core::protocol::field::{read_list, read_nested, read_scalar, write_list, write_scalar, write_struct};
use sdlrpc_core::protocol::{Field, Number, ParameterStruct, ProtocolVersion, Value, WireStruct};
use sdlrpc_core::rpc::{FileType, HeadLampStatus, ImageField, ImageFieldName, ImageResolution};

const V: ProtocolVersion = ProtocolVersion::LATEST;

fn params(tree: serde_json::Value) -> ParameterStruct {
    ParameterStruct::decode_value(&tree)
}

#[test]
fn missing_and_wrong_shape_read_as_absent() {
    let p = params(json!({ "speed": "fast", "rpm": 900 }));
    assert_eq!(read_scalar::<f64>(&p, "speed", V), None);
    assert_eq!(read_scalar::<f64>(&p, "missing", V), None);
    assert_eq!(read_scalar::<i64>(&p, "rpm", V), Some(900));
    // integers widen to float, floats never narrow
    assert_eq!(read_scalar::<f64>(&p, "rpm", V), Some(900.0));
    let p = params(json!({ "speed": 1.5 }));
    assert_eq!(read_scalar::<i64>(&p, "speed", V), None);
}

#[test]
fn out_of_range_integer_reads_as_absent() {
    let p = params(json!({ "cmdID": -1, "big": 5_000_000_000_i64 }));
    assert_eq!(read_scalar::<u32>(&p, "cmdID", V), None);
    assert_eq!(read_scalar::<i32>(&p, "big", V), None);
    assert_eq!(read_scalar::<i64>(&p, "big", V), Some(5_000_000_000));
}

#[test]
fn none_and_null_remove_the_key() {
    let mut p = params(json!({ "info": "x", "cmdID": 4 }));
    write_scalar::<String>(&mut p, "info", None, V);
    p.set("cmdID", Value::Null);
    assert!(p.is_empty());
    assert!(p.encode().is_empty());
}

#[test]
fn non_finite_floats_are_never_stored_or_encoded() {
    let mut p = params(json!({ "speed": 10.0, "rpm": 900 }));
    write_scalar::<f64>(&mut p, "speed", Some(&f64::INFINITY), V);
    assert!(!p.contains_key("speed"));
    assert_eq!(read_scalar::<f64>(&p, "speed", V), None);

    p.set("rpm", Value::Number(Number::Float(f64::NAN)));
    p.set("odometer", f64::NEG_INFINITY);
    assert!(p.is_empty());

    let mut inner = ParameterStruct::new();
    inner.set("range", f64::NAN);
    inner.set("fuelType", "GASOLINE");
    p.set("fuelRange", Value::Struct(inner));
    assert_eq!(serde_json::Value::Object(p.encode()), json!({ "fuelRange": { "fuelType": "GASOLINE" } }));
}

#[test]
fn null_in_tree_is_not_stored() {
    let p = params(json!({ "info": null }));
    assert!(!p.contains_key("info"));
    assert_eq!(read_scalar::<String>(&p, "info", V), None);
}

#[test]
fn list_skips_unreadable_elements() {
    let p = params(json!({ "data": ["a", 1, "b", null, {"x": 1}] }));
    let got = read_list(&p, "data", |v| v.as_str().map(str::to_owned));
    assert_eq!(got, Some(vec!["a".to_string(), "b".to_string()]));

    let p = params(json!({ "data": "not a list" }));
    assert_eq!(read_list(&p, "data", |v| v.as_str().map(str::to_owned)), None);
}

#[test]
fn list_write_and_clear() {
    let mut p = ParameterStruct::new();
    write_list(&mut p, "data", Some(&[1_i64, 2, 3][..]), |i| Value::from(*i));
    assert_eq!(p.encode()["data"], json!([1, 2, 3]));
    write_list::<i64>(&mut p, "data", None, |i| Value::from(*i));
    assert!(p.is_empty());
}

#[test]
fn nested_struct_read_and_write() {
    let lamp = HeadLampStatus {
        ambient_light_sensor_status: None,
        high_beams_on: Some(true),
        low_beams_on: Some(false),
    };
    let mut p = ParameterStruct::new();
    write_struct(&mut p, "headLampStatus", Some(lamp.to_params(V)));
    assert_eq!(
        serde_json::Value::Object(p.encode()),
        json!({ "headLampStatus": { "highBeamsOn": true, "lowBeamsOn": false } })
    );

    let back = read_nested(&p, "headLampStatus", |s| Some(HeadLampStatus::from_params(s, V)));
    assert_eq!(back, Some(lamp));

    let p = params(json!({ "headLampStatus": [true] }));
    assert_eq!(read_nested(&p, "headLampStatus", |s| Some(HeadLampStatus::from_params(s, V))), None);
}

#[test]
fn nested_struct_with_bad_member_keeps_the_rest() {
    let p = params(json!({ "highBeamsOn": "yes", "lowBeamsOn": true, "ambientLightSensorStatus": "DAY" }));
    let lamp = HeadLampStatus::from_params(&p, V);
    assert_eq!(lamp.high_beams_on, None);
    assert_eq!(lamp.low_beams_on, Some(true));
    assert_eq!(lamp.ambient_light_sensor_status, Some(sdlrpc_core::rpc::AmbientLightStatus::Day));
}

#[test]
fn image_field_round_trip() {
    let field = ImageField {
        name: Some(ImageFieldName::MenuIcon),
        image_type_supported: Some(vec![FileType::GraphicPng, FileType::GraphicJpeg]),
        image_resolution: Some(ImageResolution::new(64, 48)),
    };
    let wire = field.to_params(V);
    assert_eq!(
        serde_json::Value::Object(wire.encode()),
        json!({
            "name": "menuIcon",
            "imageTypeSupported": ["GRAPHIC_PNG", "GRAPHIC_JPEG"],
            "imageResolution": { "resolutionWidth": 64, "resolutionHeight": 48 }
        })
    );
    assert_eq!(ImageField::from_params(&wire, V), field);
}

#[test]
fn enum_list_drops_unknown_values() {
    let p = params(json!({ "imageTypeSupported": ["GRAPHIC_PNG", "HOLOGRAM", 3] }));
    let got = ImageField::IMAGE_TYPE_SUPPORTED.read(&p, V);
    assert_eq!(got, Some(vec![FileType::GraphicPng]));
}

#[test]
fn typed_field_handles_use_their_key() {
    const INFO: Field<String> = Field::new("info", "info");
    let mut p = ParameterStruct::new();
    INFO.write(&mut p, Some(&"hello".to_string()), V);
    assert_eq!(p.read(&INFO, V).as_deref(), Some("hello"));
    assert_eq!(INFO.key(V), "info");
}
