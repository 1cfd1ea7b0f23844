use serde::Deserialize;
use sdlrpc_core::error::{Result, SdlRpcError};
use sdlrpc_core::ProtocolVersion;

use crate::policy::allowlist::compile_rules;

/// Smallest accepted frame limit.
pub const MIN_FRAME_BYTES: usize = 256;
/// Largest accepted frame limit (16 MiB).
pub const MAX_FRAME_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub version: u32,

    #[serde(default)]
    pub protocol: ProtocolSection,

    #[serde(default)]
    pub limits: LimitsSection,

    #[serde(default)]
    pub policy: PolicySection,
}

impl HostConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SdlRpcError::BadRequest(format!(
                "unsupported config version {} (expected 1)",
                self.version
            )));
        }

        self.protocol.validate()?;
        self.limits.validate()?;
        self.policy.validate()?;

        Ok(())
    }

    /// Negotiated protocol version. Only meaningful after `validate`.
    pub fn protocol_version(&self) -> Result<ProtocolVersion> {
        ProtocolVersion::new(self.protocol.version)
    }

    pub fn min_protocol_version(&self) -> Result<ProtocolVersion> {
        ProtocolVersion::new(self.protocol.min_version)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolSection {
    #[serde(default = "default_protocol_version")]
    pub version: u8,

    #[serde(default = "default_min_version")]
    pub min_version: u8,
}

impl Default for ProtocolSection {
    fn default() -> Self {
        Self {
            version: default_protocol_version(),
            min_version: default_min_version(),
        }
    }
}

impl ProtocolSection {
    pub fn validate(&self) -> Result<()> {
        let version = ProtocolVersion::new(self.version)?;
        let min = ProtocolVersion::new(self.min_version)?;
        if min > version {
            return Err(SdlRpcError::BadRequest(
                "protocol.min_version must not exceed protocol.version".into(),
            ));
        }
        Ok(())
    }
}

fn default_protocol_version() -> u8 {
    ProtocolVersion::LATEST.get()
}
fn default_min_version() -> u8 {
    ProtocolVersion::MIN.get()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_frame_bytes: default_max_frame_bytes(),
        }
    }
}

impl LimitsSection {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FRAME_BYTES..=MAX_FRAME_BYTES).contains(&self.max_frame_bytes) {
            return Err(SdlRpcError::BadRequest(format!(
                "limits.max_frame_bytes must be between {MIN_FRAME_BYTES} and {MAX_FRAME_BYTES}"
            )));
        }
        Ok(())
    }
}

fn default_max_frame_bytes() -> usize {
    128 * 1024
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    /// `kind:function` rules, e.g. `request:DeleteCommand` or `notification:*`.
    /// Empty means deny everything.
    #[serde(default)]
    pub allow: Vec<String>,
}

impl PolicySection {
    pub fn validate(&self) -> Result<()> {
        compile_rules(&self.allow).map(|_| ())
    }
}
