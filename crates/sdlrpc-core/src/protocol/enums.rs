//! Enum codec: version-aware mapping between wire strings and enumerators.
//!
//! Every enumerator declares a default (oldest) wire name, so
//! `to_wire_name` is total. Renames are listed as overrides bound to a
//! version range. Decoding only considers the names in effect at the given
//! version; unknown text resolves to `None`, never an error, so a newer peer
//! vocabulary does not break an older consumer.

use super::value::Value;
use super::version::{ProtocolVersion, VersionRange};

/// Wire name override for one enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumOverride<E: 'static> {
    pub value: E,
    pub range: VersionRange,
    pub wire: &'static str,
}

/// Enum with a versioned wire vocabulary. Implemented by [`wire_enum!`](crate::wire_enum).
pub trait WireEnum: Copy + Eq + 'static {
    const TYPE_NAME: &'static str;
    const ALL: &'static [Self];
    const RENAMES: &'static [EnumOverride<Self>];

    /// Name used when no override matches.
    fn default_wire_name(self) -> &'static str;

    /// Wire name at `version`.
    fn to_wire_name(self, version: ProtocolVersion) -> &'static str {
        Self::RENAMES
            .iter()
            .find(|o| o.value == self && o.range.contains(version))
            .map_or_else(|| self.default_wire_name(), |o| o.wire)
    }

    /// Enumerator whose wire name at `version` is `text`.
    fn from_wire_name(text: &str, version: ProtocolVersion) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.to_wire_name(version) == text)
    }
}

/// Decode a raw value as `E`. Non-text and unknown text both yield `None`.
pub fn decode_enum<E: WireEnum>(value: &Value, version: ProtocolVersion) -> Option<E> {
    let text = value.as_str()?;
    let out = E::from_wire_name(text, version);
    if out.is_none() {
        tracing::debug!(enum_type = E::TYPE_NAME, text, %version, "unknown enum value, treating as absent");
    }
    out
}

/// Declare a wire enum.
///
/// ```
/// sdlrpc_core::wire_enum! {
///     /// Example.
///     pub enum Lamp {
///         Low = "LOW",
///         High = "HIGH",
///     }
///     renamed {
///         High: 3 to 4 => "HIGH_BEAM",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (@until) => { None };
    (@until $until:literal) => { Some($until) };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
        $( renamed {
            $( $rv:ident : $since:literal $( to $until:literal )? => $alt:literal ),* $(,)?
        } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::protocol::enums::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[ $( $name::$variant, )+ ];
            const RENAMES: &'static [$crate::protocol::enums::EnumOverride<Self>] = &[
                $( $(
                    $crate::protocol::enums::EnumOverride {
                        value: $name::$rv,
                        range: $crate::protocol::version::VersionRange {
                            since: $since,
                            until: $crate::wire_enum!(@until $($until)?),
                        },
                        wire: $alt,
                    },
                )* )?
            ];

            fn default_wire_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl $crate::protocol::field::WireType for $name {
            fn kind() -> $crate::protocol::field::ValueKind {
                $crate::protocol::field::ValueKind::Enum(stringify!($name))
            }
            fn from_wire(
                value: &$crate::protocol::value::Value,
                version: $crate::protocol::version::ProtocolVersion,
            ) -> Option<Self> {
                $crate::protocol::enums::decode_enum(value, version)
            }
            fn to_wire(
                &self,
                version: $crate::protocol::version::ProtocolVersion,
            ) -> $crate::protocol::value::Value {
                $crate::protocol::value::Value::Text(
                    <Self as $crate::protocol::enums::WireEnum>::to_wire_name(*self, version)
                        .to_owned(),
                )
            }
        }
    };
}
