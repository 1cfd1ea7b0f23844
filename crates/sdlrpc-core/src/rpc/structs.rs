//! Nested structs carried inside message parameters.

use crate::protocol::{Field, ParameterStruct, ProtocolVersion, VersionedKeyTable, WireStruct};
use crate::wire_struct;

use super::enums::{AmbientLightStatus, FileType, FuelType, ImageFieldName};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadLampStatus {
    pub ambient_light_sensor_status: Option<AmbientLightStatus>,
    pub high_beams_on: Option<bool>,
    pub low_beams_on: Option<bool>,
}

impl HeadLampStatus {
    pub const AMBIENT_LIGHT_SENSOR_STATUS: Field<AmbientLightStatus> =
        Field::new("head_lamp_status.ambient_light_sensor_status", "ambientLightSensorStatus");
    pub const HIGH_BEAMS_ON: Field<bool> = Field::new("head_lamp_status.high_beams_on", "highBeamsOn");
    pub const LOW_BEAMS_ON: Field<bool> = Field::new("head_lamp_status.low_beams_on", "lowBeamsOn");
}

impl WireStruct for HeadLampStatus {
    const NAME: &'static str = "HeadLampStatus";

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            ambient_light_sensor_status: Self::AMBIENT_LIGHT_SENSOR_STATUS.read(params, version),
            high_beams_on: Self::HIGH_BEAMS_ON.read(params, version),
            low_beams_on: Self::LOW_BEAMS_ON.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::AMBIENT_LIGHT_SENSOR_STATUS.write(&mut params, self.ambient_light_sensor_status.as_ref(), version);
        Self::HIGH_BEAMS_ON.write(&mut params, self.high_beams_on.as_ref(), version);
        Self::LOW_BEAMS_ON.write(&mut params, self.low_beams_on.as_ref(), version);
        params
    }
}

wire_struct!(HeadLampStatus);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResolution {
    pub resolution_width: Option<u32>,
    pub resolution_height: Option<u32>,
}

impl ImageResolution {
    pub const RESOLUTION_WIDTH: Field<u32> = Field::new("image_resolution.width", "resolutionWidth");
    pub const RESOLUTION_HEIGHT: Field<u32> = Field::new("image_resolution.height", "resolutionHeight");

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution_width: Some(width),
            resolution_height: Some(height),
        }
    }
}

impl WireStruct for ImageResolution {
    const NAME: &'static str = "ImageResolution";

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            resolution_width: Self::RESOLUTION_WIDTH.read(params, version),
            resolution_height: Self::RESOLUTION_HEIGHT.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::RESOLUTION_WIDTH.write(&mut params, self.resolution_width.as_ref(), version);
        Self::RESOLUTION_HEIGHT.write(&mut params, self.resolution_height.as_ref(), version);
        params
    }
}

wire_struct!(ImageResolution);

/// Image slot description: supported file types and native resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageField {
    pub name: Option<ImageFieldName>,
    pub image_type_supported: Option<Vec<FileType>>,
    pub image_resolution: Option<ImageResolution>,
}

impl ImageField {
    pub const NAME_KEY: Field<ImageFieldName> = Field::new("image_field.name", "name");
    pub const IMAGE_TYPE_SUPPORTED: Field<Vec<FileType>> =
        Field::new("image_field.image_type_supported", "imageTypeSupported");
    pub const IMAGE_RESOLUTION: Field<ImageResolution> =
        Field::new("image_field.image_resolution", "imageResolution");
}

impl WireStruct for ImageField {
    const NAME: &'static str = "ImageField";

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            name: Self::NAME_KEY.read(params, version),
            image_type_supported: Self::IMAGE_TYPE_SUPPORTED.read(params, version),
            image_resolution: Self::IMAGE_RESOLUTION.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::NAME_KEY.write(&mut params, self.name.as_ref(), version);
        Self::IMAGE_TYPE_SUPPORTED.write(&mut params, self.image_type_supported.as_ref(), version);
        Self::IMAGE_RESOLUTION.write(&mut params, self.image_resolution.as_ref(), version);
        params
    }
}

wire_struct!(ImageField);

/// Estimated range for one fuel type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuelRange {
    pub fuel_type: Option<FuelType>,
    /// Kilometres.
    pub range: Option<f64>,
}

impl FuelRange {
    pub const TYPE: Field<FuelType> = Field::new("fuel_range.type", "type");
    pub const RANGE: Field<f64> = Field::new("fuel_range.range", "range");
}

impl WireStruct for FuelRange {
    const NAME: &'static str = "FuelRange";

    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self {
        Self {
            fuel_type: Self::TYPE.read(params, version),
            range: Self::RANGE.read(params, version),
        }
    }

    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct {
        let mut params = ParameterStruct::new();
        Self::TYPE.write(&mut params, self.fuel_type.as_ref(), version);
        Self::RANGE.write(&mut params, self.range.as_ref(), version);
        params
    }
}

wire_struct!(FuelRange);

pub(crate) const ALL_KEY_TABLES: &[VersionedKeyTable] = &[
    *HeadLampStatus::AMBIENT_LIGHT_SENSOR_STATUS.keys(),
    *HeadLampStatus::HIGH_BEAMS_ON.keys(),
    *HeadLampStatus::LOW_BEAMS_ON.keys(),
    *ImageResolution::RESOLUTION_WIDTH.keys(),
    *ImageResolution::RESOLUTION_HEIGHT.keys(),
    *ImageField::NAME_KEY.keys(),
    *ImageField::IMAGE_TYPE_SUPPORTED.keys(),
    *ImageField::IMAGE_RESOLUTION.keys(),
    *FuelRange::TYPE.keys(),
    *FuelRange::RANGE.keys(),
];
