//! Generic named-parameter container.
//!
//! Rules:
//! - A key is present only while it holds a non-null value. `set(key, Null)`
//!   removes it, so callers never see "present but null".
//! - Non-finite floats count as null; they are neither stored nor encoded.
//! - Keys are kept sorted; encoding is deterministic.
//! - `decode` is total: it never rejects a JSON object.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::field::{Field, WireType};
use super::value::{Number, Value};
use super::version::ProtocolVersion;

/// Key → value mapping carrying a message body or nested struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParameterStruct {
    store: BTreeMap<String, Value>,
}

impl ParameterStruct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    /// Store `value` under `key`; a null value removes the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        match value.into() {
            Value::Null => {
                self.store.remove(&key);
            }
            Value::Number(Number::Float(f)) if !f.is_finite() => {
                self.store.remove(&key);
            }
            v => {
                self.store.insert(key, v);
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.store.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.store.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.store.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Typed read of `field` at `version` (absent or wrong shape → `None`).
    pub fn read<T: WireType>(&self, field: &Field<T>, version: ProtocolVersion) -> Option<T> {
        field.read(self, version)
    }

    /// Typed write of `field` at `version` (`None` removes).
    pub fn write<T: WireType>(&mut self, field: &Field<T>, value: Option<&T>, version: ProtocolVersion) {
        field.write(self, value, version)
    }

    /// Build from a JSON object. Null members are dropped.
    pub fn decode(tree: &JsonMap<String, JsonValue>) -> Self {
        let mut out = Self::new();
        for (key, json) in tree {
            out.set(key.as_str(), Value::from_json(json));
        }
        out
    }

    /// Build from any JSON value; a non-object yields an empty struct.
    pub fn decode_value(tree: &JsonValue) -> Self {
        match tree {
            JsonValue::Object(map) => Self::decode(map),
            other => {
                if !other.is_null() {
                    tracing::debug!(found = %json_shape(other), "parameters is not an object, treating as empty");
                }
                Self::new()
            }
        }
    }

    /// Encode to a JSON object. Unset keys are omitted, never emitted as null.
    pub fn encode(&self) -> JsonMap<String, JsonValue> {
        self.store
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .filter(|(k, json)| {
                if json.is_null() {
                    tracing::debug!(key = %k, "value has no json form, omitting");
                }
                !json.is_null()
            })
            .collect()
    }
}

impl FromIterator<(String, Value)> for ParameterStruct {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.set(k, v);
        }
        out
    }
}

impl Serialize for ParameterStruct {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParameterStruct {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = JsonMap::<String, JsonValue>::deserialize(deserializer)?;
        Ok(Self::decode(&map))
    }
}

pub(crate) fn json_shape(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
