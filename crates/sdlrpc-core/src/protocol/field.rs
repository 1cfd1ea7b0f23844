//! Field codec: typed, absence-safe reads and writes against a `ParameterStruct`.
//!
//! Rules:
//! - A missing key and a key holding the wrong shape both read as `None`.
//! - Writing `None` removes the key.
//! - Nothing here returns an error; failures are logged at trace/debug level.

use std::fmt;
use std::marker::PhantomData;

use super::params::ParameterStruct;
use super::value::Value;
use super::version::{ProtocolVersion, VersionedKeyTable};

/// Primitive wire shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Integer,
    Float,
    Text,
}

/// Shape contract of a registered field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Primitive(PrimitiveKind),
    /// Enum carried as wire text; holds the enum type name.
    Enum(&'static str),
    /// Nested struct; holds the struct type name.
    Nested(&'static str),
    ListOf(Box<ValueKind>),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Primitive(PrimitiveKind::Bool) => f.write_str("bool"),
            ValueKind::Primitive(PrimitiveKind::Integer) => f.write_str("integer"),
            ValueKind::Primitive(PrimitiveKind::Float) => f.write_str("float"),
            ValueKind::Primitive(PrimitiveKind::Text) => f.write_str("text"),
            ValueKind::Enum(name) => write!(f, "enum {name}"),
            ValueKind::Nested(name) => write!(f, "struct {name}"),
            ValueKind::ListOf(inner) => write!(f, "list of {inner}"),
        }
    }
}

/// A domain type with a fixed wire shape.
///
/// `from_wire` must return `None` for any value of another shape instead of
/// coercing it.
pub trait WireType: Sized {
    fn kind() -> ValueKind;
    fn from_wire(value: &Value, version: ProtocolVersion) -> Option<Self>;
    fn to_wire(&self, version: ProtocolVersion) -> Value;
}

impl WireType for bool {
    fn kind() -> ValueKind {
        ValueKind::Primitive(PrimitiveKind::Bool)
    }
    fn from_wire(value: &Value, _: ProtocolVersion) -> Option<Self> {
        value.as_bool()
    }
    fn to_wire(&self, _: ProtocolVersion) -> Value {
        Value::Bool(*self)
    }
}

impl WireType for i64 {
    fn kind() -> ValueKind {
        ValueKind::Primitive(PrimitiveKind::Integer)
    }
    fn from_wire(value: &Value, _: ProtocolVersion) -> Option<Self> {
        value.as_i64()
    }
    fn to_wire(&self, _: ProtocolVersion) -> Value {
        Value::from(*self)
    }
}

impl WireType for i32 {
    fn kind() -> ValueKind {
        ValueKind::Primitive(PrimitiveKind::Integer)
    }
    fn from_wire(value: &Value, _: ProtocolVersion) -> Option<Self> {
        value.as_i64().and_then(|i| i32::try_from(i).ok())
    }
    fn to_wire(&self, _: ProtocolVersion) -> Value {
        Value::from(*self)
    }
}

impl WireType for u32 {
    fn kind() -> ValueKind {
        ValueKind::Primitive(PrimitiveKind::Integer)
    }
    fn from_wire(value: &Value, _: ProtocolVersion) -> Option<Self> {
        value.as_i64().and_then(|i| u32::try_from(i).ok())
    }
    fn to_wire(&self, _: ProtocolVersion) -> Value {
        Value::from(*self)
    }
}

impl WireType for f64 {
    fn kind() -> ValueKind {
        ValueKind::Primitive(PrimitiveKind::Float)
    }
    fn from_wire(value: &Value, _: ProtocolVersion) -> Option<Self> {
        value.as_f64()
    }
    fn to_wire(&self, _: ProtocolVersion) -> Value {
        Value::from(*self)
    }
}

impl WireType for String {
    fn kind() -> ValueKind {
        ValueKind::Primitive(PrimitiveKind::Text)
    }
    fn from_wire(value: &Value, _: ProtocolVersion) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
    fn to_wire(&self, _: ProtocolVersion) -> Value {
        Value::Text(self.clone())
    }
}

/// Lists skip unreadable elements instead of dropping the whole list.
impl<T: WireType> WireType for Vec<T> {
    fn kind() -> ValueKind {
        ValueKind::ListOf(Box::new(T::kind()))
    }
    fn from_wire(value: &Value, version: ProtocolVersion) -> Option<Self> {
        let items = value.as_list()?;
        Some(decode_elements(items, |item| T::from_wire(item, version)))
    }
    fn to_wire(&self, version: ProtocolVersion) -> Value {
        Value::List(self.iter().map(|item| item.to_wire(version)).collect())
    }
}

/// A struct type encoded as a nested `ParameterStruct`.
pub trait WireStruct: Sized {
    const NAME: &'static str;
    fn from_params(params: &ParameterStruct, version: ProtocolVersion) -> Self;
    fn to_params(&self, version: ProtocolVersion) -> ParameterStruct;
}

/// Implement [`WireType`] for a [`WireStruct`].
#[macro_export]
macro_rules! wire_struct {
    ($ty:ty) => {
        impl $crate::protocol::field::WireType for $ty {
            fn kind() -> $crate::protocol::field::ValueKind {
                $crate::protocol::field::ValueKind::Nested(
                    <$ty as $crate::protocol::field::WireStruct>::NAME,
                )
            }
            fn from_wire(
                value: &$crate::protocol::value::Value,
                version: $crate::protocol::version::ProtocolVersion,
            ) -> Option<Self> {
                value.as_struct().map(|params| {
                    <$ty as $crate::protocol::field::WireStruct>::from_params(params, version)
                })
            }
            fn to_wire(
                &self,
                version: $crate::protocol::version::ProtocolVersion,
            ) -> $crate::protocol::value::Value {
                $crate::protocol::value::Value::Struct(
                    <$ty as $crate::protocol::field::WireStruct>::to_params(self, version),
                )
            }
        }
    };
}

/// Symbolic field identifier, independent of the wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(&'static str);

impl FieldId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Typed handle on one field: id, key table, and (through `T`) its shape.
pub struct Field<T> {
    id: FieldId,
    keys: VersionedKeyTable,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    /// Field whose wire key never changes.
    pub const fn new(id: &'static str, key: &'static str) -> Self {
        Self::versioned(id, VersionedKeyTable::fixed(key))
    }

    pub const fn versioned(id: &'static str, keys: VersionedKeyTable) -> Self {
        Self {
            id: FieldId::new(id),
            keys,
            _marker: PhantomData,
        }
    }

    pub const fn id(&self) -> FieldId {
        self.id
    }

    pub const fn keys(&self) -> &VersionedKeyTable {
        &self.keys
    }

    /// Wire key at `version`.
    pub fn key(&self, version: ProtocolVersion) -> &'static str {
        self.keys.resolve(version)
    }
}

impl<T: WireType> Field<T> {
    pub fn kind(&self) -> ValueKind {
        T::kind()
    }

    pub fn read(&self, params: &ParameterStruct, version: ProtocolVersion) -> Option<T> {
        read_scalar(params, self.key(version), version)
    }

    pub fn write(&self, params: &mut ParameterStruct, value: Option<&T>, version: ProtocolVersion) {
        write_scalar(params, self.key(version), value, version)
    }

    /// Decode an already fetched raw value.
    pub fn decode(&self, raw: &Value, version: ProtocolVersion) -> Option<T> {
        T::from_wire(raw, version)
    }

    pub fn encode(&self, value: &T, version: ProtocolVersion) -> Value {
        value.to_wire(version)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("keys", &self.keys)
            .finish()
    }
}

/// Raw value under `key`, if any.
pub fn read_value<'a>(params: &'a ParameterStruct, key: &str) -> Option<&'a Value> {
    params.get(key)
}

/// Typed read. Absent and wrong-shape values both yield `None`.
pub fn read_scalar<T: WireType>(
    params: &ParameterStruct,
    key: &str,
    version: ProtocolVersion,
) -> Option<T> {
    let raw = params.get(key)?;
    let out = T::from_wire(raw, version);
    if out.is_none() {
        tracing::trace!(key, expected = %T::kind(), found = raw.shape(), "field shape mismatch, treating as absent");
    }
    out
}

/// Typed write. `None` removes the key.
pub fn write_scalar<T: WireType>(
    params: &mut ParameterStruct,
    key: &str,
    value: Option<&T>,
    version: ProtocolVersion,
) {
    match value {
        Some(v) => params.set(key, v.to_wire(version)),
        None => {
            params.remove(key);
        }
    }
}

/// List read with a caller-supplied element reader.
///
/// A non-list value reads as `None`; unreadable elements are skipped.
pub fn read_list<T>(
    params: &ParameterStruct,
    key: &str,
    element_reader: impl Fn(&Value) -> Option<T>,
) -> Option<Vec<T>> {
    let raw = params.get(key)?;
    match raw.as_list() {
        Some(items) => Some(decode_elements(items, element_reader)),
        None => {
            tracing::trace!(key, found = raw.shape(), "expected list, treating as absent");
            None
        }
    }
}

pub fn write_list<T>(
    params: &mut ParameterStruct,
    key: &str,
    items: Option<&[T]>,
    element_writer: impl Fn(&T) -> Value,
) {
    match items {
        Some(items) => params.set(key, Value::List(items.iter().map(element_writer).collect())),
        None => {
            params.remove(key);
        }
    }
}

pub fn read_struct<'a>(params: &'a ParameterStruct, key: &str) -> Option<&'a ParameterStruct> {
    let raw = params.get(key)?;
    let out = raw.as_struct();
    if out.is_none() {
        tracing::trace!(key, found = raw.shape(), "expected struct, treating as absent");
    }
    out
}

/// Nested read: fetch the struct under `key` and hand it to `decode`.
pub fn read_nested<T>(
    params: &ParameterStruct,
    key: &str,
    decode: impl FnOnce(&ParameterStruct) -> Option<T>,
) -> Option<T> {
    read_struct(params, key).and_then(decode)
}

pub fn write_struct(params: &mut ParameterStruct, key: &str, value: Option<ParameterStruct>) {
    match value {
        Some(s) => params.set(key, Value::Struct(s)),
        None => {
            params.remove(key);
        }
    }
}

fn decode_elements<T>(items: &[Value], reader: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match reader(item) {
            Some(v) => out.push(v),
            None => tracing::trace!(index, found = item.shape(), "skipping unreadable list element"),
        }
    }
    out
}
