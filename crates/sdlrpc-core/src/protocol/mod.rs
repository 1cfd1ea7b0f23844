//! Protocol modules: generic values, field codec, version tables, envelope.
//!
//! Layering, leaf-first:
//! - `value` / `params`: the generic JSON-shaped parameter tree.
//! - `version` / `enums`: versioned wire key tables and enum vocabularies.
//! - `field`: typed, absence-safe reads and writes driven by those tables.
//! - `registry`: static field tables for heterogeneous containers.
//! - `envelope`: the request/response/notification wrapper.
//!
//! All decoders are total below the envelope: malformed fields degrade to
//! absence instead of failing the message.

pub mod envelope;
pub mod enums;
pub mod field;
pub mod params;
pub mod registry;
pub mod value;
pub mod version;

pub use envelope::{MessageEnvelope, MessageKind};
pub use enums::{EnumOverride, WireEnum};
pub use field::{Field, FieldId, PrimitiveKind, ValueKind, WireStruct, WireType};
pub use params::ParameterStruct;
pub use registry::{FieldEntry, TypeRegistry, TypedParams};
pub use value::{Number, Value};
pub use version::{KeyMapping, ProtocolVersion, VersionRange, VersionedKeyTable};
