//! Configuration schema definitions.
//!
//! [`ConfigFile`] maps one YAML file, where every field is optional.
//! [`SwarmGateConfig`] is the resolved result after all layers are merged.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, SwarmGateError};

/// Default request timeout. Usage analysis can run server-side for minutes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10 * 60 * 60;

/// Output verbosity as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

/// One configuration file layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the management API gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Bearer token for the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Restrict usage analysis to the node the operator is connected to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_usage_to_local_agent: Option<bool>,

    /// Default output mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

impl ConfigFile {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            endpoint: other.endpoint.or(self.endpoint),
            token: other.token.or(self.token),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
            scope_usage_to_local_agent: other
                .scope_usage_to_local_agent
                .or(self.scope_usage_to_local_agent),
            output: other.output.or(self.output),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwarmGateConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub scope_usage_to_local_agent: bool,
    pub output: Option<OutputMode>,
}

impl Default for SwarmGateConfig {
    fn default() -> Self {
        Self::from(ConfigFile::default())
    }
}

impl From<ConfigFile> for SwarmGateConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            endpoint: file.endpoint.filter(|e| !e.trim().is_empty()),
            token: file.token.filter(|t| !t.is_empty()),
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            scope_usage_to_local_agent: file.scope_usage_to_local_agent.unwrap_or(true),
            output: file.output,
        }
    }
}

impl SwarmGateConfig {
    /// The gateway endpoint, or an error telling the operator how to set it.
    pub fn require_endpoint(&self) -> Result<&str> {
        self.endpoint
            .as_deref()
            .ok_or_else(|| SwarmGateError::ConfigValidationError {
                message: "No management API endpoint configured. Use --endpoint, \
                          SWARMGATE_ENDPOINT, or 'endpoint:' in .swarmgate/config.yml"
                    .to_string(),
            })
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(SwarmGateError::ConfigValidationError {
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
