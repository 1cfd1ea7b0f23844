//! Type registry and registry-backed heterogeneous containers.
//!
//! A registry is a static table of [`FieldEntry`] values. Each entry is produced
//! from a typed [`Field<T>`] handle, so the shape contract and the decode
//! function come from `T` at compile time; nothing is looked up by runtime type.
//!
//! [`TypedParams`] stores raw values keyed by wire name at its protocol version
//! and exposes typed `get`/`set` through the registered handles. Reads never
//! fail: a value that cannot be resolved reads as absent.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, SdlRpcError};

use super::field::{Field, FieldId, ValueKind, WireType};
use super::params::ParameterStruct;
use super::value::Value;
use super::version::{ProtocolVersion, VersionedKeyTable};

/// Decode a raw value as `T` at `from` and re-encode it at `to`.
fn transcode_as<T: WireType>(raw: &Value, from: ProtocolVersion, to: ProtocolVersion) -> Option<Value> {
    T::from_wire(raw, from).map(|v| v.to_wire(to))
}

/// Type-erased registration of one field.
#[derive(Clone, Copy)]
pub struct FieldEntry {
    id: FieldId,
    keys: VersionedKeyTable,
    kind: fn() -> ValueKind,
    transcode: fn(&Value, ProtocolVersion, ProtocolVersion) -> Option<Value>,
}

impl FieldEntry {
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn keys(&self) -> &VersionedKeyTable {
        &self.keys
    }

    pub fn kind(&self) -> ValueKind {
        (self.kind)()
    }

    pub fn key(&self, version: ProtocolVersion) -> &'static str {
        self.keys.resolve(version)
    }

    /// Registry-driven decode of a raw value; `None` if it does not conform.
    pub fn resolve(&self, raw: &Value, version: ProtocolVersion) -> Option<Value> {
        (self.transcode)(raw, version, version)
    }

    /// Re-encode a raw value read at `from` for the wire at `to`.
    pub fn transcode(&self, raw: &Value, from: ProtocolVersion, to: ProtocolVersion) -> Option<Value> {
        (self.transcode)(raw, from, to)
    }
}

impl fmt::Debug for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("id", &self.id)
            .field("keys", &self.keys)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<T: WireType> Field<T> {
    /// Registration entry for this field.
    pub const fn entry(&self) -> FieldEntry {
        FieldEntry {
            id: self.id(),
            keys: *self.keys(),
            kind: T::kind,
            transcode: transcode_as::<T>,
        }
    }
}

/// Static field table.
#[derive(Debug)]
pub struct TypeRegistry {
    name: &'static str,
    entries: &'static [FieldEntry],
}

impl TypeRegistry {
    pub const fn new(name: &'static str, entries: &'static [FieldEntry]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: FieldId) -> Option<&FieldEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Wire key of `id` at `version`.
    pub fn resolve_key(&self, id: FieldId, version: ProtocolVersion) -> Option<&'static str> {
        self.entry(id).map(|e| e.key(version))
    }

    /// Entry stored under wire `key` at `version`.
    pub fn entry_for_key(&self, key: &str, version: ProtocolVersion) -> Option<&FieldEntry> {
        self.entries.iter().find(|e| e.key(version) == key)
    }

    /// Reject duplicate ids, bad key tables, and wire-key collisions at any version.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for entry in self.entries {
            if !ids.insert(entry.id) {
                return Err(SdlRpcError::Schema(format!(
                    "{}: field `{}` registered twice",
                    self.name, entry.id
                )));
            }
            entry.keys.validate()?;
        }
        for version in ProtocolVersion::all() {
            let mut keys = HashSet::new();
            for entry in self.entries {
                let key = entry.key(version);
                if !keys.insert(key) {
                    return Err(SdlRpcError::Schema(format!(
                        "{}: wire key `{key}` used by more than one field at {version}",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Registry-backed container of independently typed values.
#[derive(Debug, Clone)]
pub struct TypedParams {
    registry: &'static TypeRegistry,
    version: ProtocolVersion,
    params: ParameterStruct,
}

impl TypedParams {
    pub fn new(registry: &'static TypeRegistry, version: ProtocolVersion) -> Self {
        Self::from_params(registry, ParameterStruct::new(), version)
    }

    /// Wrap decoded parameters. Unregistered keys are kept as-is.
    pub fn from_params(
        registry: &'static TypeRegistry,
        params: ParameterStruct,
        version: ProtocolVersion,
    ) -> Self {
        Self {
            registry,
            version,
            params,
        }
    }

    pub fn registry(&self) -> &'static TypeRegistry {
        self.registry
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn params(&self) -> &ParameterStruct {
        &self.params
    }

    pub fn into_params(self) -> ParameterStruct {
        self.params
    }

    /// Typed read; unresolvable values read as `None`.
    pub fn get<T: WireType>(&self, field: &Field<T>) -> Option<T> {
        let Some(entry) = self.registry.entry(field.id()) else {
            tracing::error!(registry = self.registry.name, field = %field.id(), "read of unregistered field");
            return None;
        };
        if entry.kind() != T::kind() {
            tracing::error!(
                registry = self.registry.name,
                field = %field.id(),
                expected = %entry.kind(),
                found = %T::kind(),
                "read through a handle of another shape"
            );
            return None;
        }
        let raw = self.params.get(entry.key(self.version))?;
        field.decode(raw, self.version)
    }

    /// Typed write. `None` removes the field.
    ///
    /// Writing a field that is not registered, or through a handle whose shape
    /// differs from the registration, is a programming error and is returned
    /// as such.
    pub fn set<T: WireType>(&mut self, field: &Field<T>, value: Option<T>) -> Result<()> {
        let entry = self
            .registry
            .entry(field.id())
            .ok_or_else(|| SdlRpcError::UnknownField(field.id().to_string()))?;
        let expected = entry.kind();
        let found = T::kind();
        if expected != found {
            return Err(SdlRpcError::FieldTypeMismatch {
                field: field.id().to_string(),
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        let key = entry.key(self.version);
        match value {
            Some(v) => self.params.set(key, v.to_wire(self.version)),
            None => {
                self.params.remove(key);
            }
        }
        Ok(())
    }

    /// Raw stored value of a registered field.
    pub fn get_raw(&self, id: FieldId) -> Option<&Value> {
        let key = self.registry.resolve_key(id, self.version)?;
        self.params.get(key)
    }

    /// Registry-driven resolution of one field to its canonical wire form.
    pub fn resolve(&self, id: FieldId) -> Option<Value> {
        let entry = self.registry.entry(id)?;
        let raw = self.params.get(entry.key(self.version))?;
        let out = entry.resolve(raw, self.version);
        if out.is_none() {
            tracing::debug!(registry = self.registry.name, field = %id, found = raw.shape(), "field does not resolve, treating as absent");
        }
        out
    }

    /// Every registered field that is present and resolves.
    pub fn resolved(&self) -> Vec<(FieldId, Value)> {
        self.registry
            .entries()
            .filter_map(|e| self.resolve(e.id()).map(|v| (e.id(), v)))
            .collect()
    }

    /// Same contents re-keyed and re-encoded for another protocol version.
    ///
    /// Registered fields that do not resolve are dropped. Unregistered keys are
    /// carried over unchanged unless a registered field already owns the key
    /// at the target version. Converting to the current version applies the
    /// same rules.
    pub fn to_version(&self, version: ProtocolVersion) -> TypedParams {
        let mut params = ParameterStruct::new();
        let mut unregistered = Vec::new();
        for (key, raw) in self.params.iter() {
            let Some(entry) = self.registry.entry_for_key(key, self.version) else {
                unregistered.push((key, raw));
                continue;
            };
            match entry.transcode(raw, self.version, version) {
                Some(v) => params.set(entry.key(version), v),
                None => {
                    tracing::debug!(registry = self.registry.name, field = %entry.id(), from = %self.version, to = %version, "dropping unresolvable field while transcoding");
                }
            }
        }
        for (key, raw) in unregistered {
            if params.contains_key(key) {
                tracing::debug!(registry = self.registry.name, key, to = %version, "dropping unregistered key shadowed by a registered field");
                continue;
            }
            params.set(key, raw.clone());
        }
        TypedParams::from_params(self.registry, params, version)
    }

    /// Stored keys that no registered field maps to at this version.
    pub fn unregistered_keys(&self) -> Vec<&str> {
        self.params
            .keys()
            .filter(|k| self.registry.entry_for_key(k, self.version).is_none())
            .collect()
    }
}

impl PartialEq for TypedParams {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry)
            && self.version == other.version
            && self.params == other.params
    }
}
