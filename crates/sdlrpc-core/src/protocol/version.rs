//! Protocol versions and per-field wire key tables.
//!
//! A field keeps one default (oldest) wire key plus optional overrides bound
//! to version ranges. Lookup takes the override whose range contains the
//! active version, else falls back to the default. Encode and decode both go
//! through [`VersionedKeyTable::resolve`], so a round trip at one version always
//! uses one key.

use std::fmt;

use crate::error::{Result, SdlRpcError};

/// Negotiated protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion(u8);

impl ProtocolVersion {
    /// Oldest supported version.
    pub const MIN: ProtocolVersion = ProtocolVersion(1);
    /// Newest supported version.
    pub const MAX: ProtocolVersion = ProtocolVersion(5);
    /// Version used when nothing else was negotiated.
    pub const LATEST: ProtocolVersion = Self::MAX;

    /// Validate a raw version number.
    pub fn new(raw: u8) -> Result<Self> {
        if raw < Self::MIN.0 || raw > Self::MAX.0 {
            return Err(SdlRpcError::UnsupportedVersion(raw));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every supported version, oldest first.
    pub fn all() -> impl Iterator<Item = ProtocolVersion> {
        (Self::MIN.0..=Self::MAX.0).map(ProtocolVersion)
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Contiguous span of protocol versions. `until: None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRange {
    pub since: u8,
    pub until: Option<u8>,
}

impl VersionRange {
    /// Every version.
    pub const ALL: VersionRange = VersionRange { since: 1, until: None };

    pub const fn since(since: u8) -> Self {
        Self { since, until: None }
    }

    pub const fn between(since: u8, until: u8) -> Self {
        Self {
            since,
            until: Some(until),
        }
    }

    pub fn contains(&self, version: ProtocolVersion) -> bool {
        let v = version.get();
        v >= self.since && self.until.map_or(true, |u| v <= u)
    }

    fn overlaps(&self, other: &VersionRange) -> bool {
        let a_end = self.until.unwrap_or(u8::MAX);
        let b_end = other.until.unwrap_or(u8::MAX);
        self.since <= b_end && other.since <= a_end
    }

    fn is_inverted(&self) -> bool {
        matches!(self.until, Some(u) if u < self.since)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.until {
            Some(u) => write!(f, "v{}..=v{}", self.since, u),
            None => write!(f, "v{}..", self.since),
        }
    }
}

/// One wire key bound to a version range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    pub range: VersionRange,
    pub key: &'static str,
}

/// Per-field table of wire key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedKeyTable {
    default: &'static str,
    overrides: &'static [KeyMapping],
}

impl VersionedKeyTable {
    /// Same key at every version.
    pub const fn fixed(key: &'static str) -> Self {
        Self {
            default: key,
            overrides: &[],
        }
    }

    /// Default (oldest) key plus version-bound overrides.
    pub const fn versioned(default: &'static str, overrides: &'static [KeyMapping]) -> Self {
        Self { default, overrides }
    }

    /// Key in effect at `version`.
    pub fn resolve(&self, version: ProtocolVersion) -> &'static str {
        match self.overrides.iter().find(|m| m.range.contains(version)) {
            Some(m) => m.key,
            None => {
                if !self.overrides.is_empty() {
                    tracing::trace!(key = self.default, %version, "no key override for version, using default");
                }
                self.default
            }
        }
    }

    pub fn default_key(&self) -> &'static str {
        self.default
    }

    /// Every key this field may appear under, default first.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.default).chain(self.overrides.iter().map(|m| m.key))
    }

    /// Reject inverted or overlapping override ranges.
    pub fn validate(&self) -> Result<()> {
        for (i, m) in self.overrides.iter().enumerate() {
            if m.range.is_inverted() {
                return Err(SdlRpcError::Schema(format!(
                    "key `{}`: inverted range {}",
                    self.default, m.range
                )));
            }
            if let Some(other) = self
                .overrides
                .iter()
                .skip(i + 1)
                .find(|o| o.range.overlaps(&m.range))
            {
                return Err(SdlRpcError::Schema(format!(
                    "key `{}`: overrides `{}` ({}) and `{}` ({}) overlap",
                    self.default, m.key, m.range, other.key, other.range
                )));
            }
        }
        Ok(())
    }
}
