//! Graph capacity limits with TOML loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{
    NetError, NetResult, DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_DEVICES, DEFAULT_MAX_NAME_LEN,
};

/// Environment variable naming a limits file when none is passed explicitly.
pub const CONFIG_ENV_VAR: &str = "NETGRAPH_CONFIG";

/// Upper bounds enforced by a [`NetworkGraph`](crate::NetworkGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLimits {
    /// Maximum number of devices.
    #[serde(default = "default_max_devices")]
    pub max_devices: usize,
    /// Maximum number of connections per device.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// Maximum device name length in bytes.
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
}

fn default_max_devices() -> usize {
    DEFAULT_MAX_DEVICES
}

fn default_max_connections() -> usize {
    DEFAULT_MAX_CONNECTIONS
}

fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_devices: default_max_devices(),
            max_connections: default_max_connections(),
            max_name_len: default_max_name_len(),
        }
    }
}

impl GraphLimits {
    /// Parse limits from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> NetResult<Self> {
        let limits: Self = toml::from_str(content)
            .map_err(|e| NetError::Config(format!("Failed to parse limits: {e}")))?;
        limits.validate()?;
        Ok(limits)
    }

    /// Load limits from a TOML file.
    pub fn load(path: &Path) -> NetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NetError::Io(std::io::Error::other(format!(
                "Failed to read config file {}: {e}",
                path.display()
            )))
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject limits that would make the graph unusable.
    pub fn validate(&self) -> NetResult<()> {
        if self.max_devices == 0 {
            return Err(NetError::Config("max_devices must be at least 1".into()));
        }
        if self.max_devices > u32::MAX as usize {
            return Err(NetError::Config(format!(
                "max_devices must be at most {}",
                u32::MAX
            )));
        }
        if self.max_connections == 0 {
            return Err(NetError::Config(
                "max_connections must be at least 1".into(),
            ));
        }
        if self.max_name_len == 0 {
            return Err(NetError::Config("max_name_len must be at least 1".into()));
        }
        Ok(())
    }
}

/// Resolve the limits file path:
/// 1. Explicit path (CLI arg)
/// 2. `NETGRAPH_CONFIG` environment variable
///
/// Returns `None` when neither is set, meaning built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)
}

/// Load limits from the resolved path, or fall back to defaults.
pub fn load_limits(explicit: Option<&Path>) -> NetResult<GraphLimits> {
    match resolve_config_path(explicit) {
        Some(path) => GraphLimits::load(&path),
        None => Ok(GraphLimits::default()),
    }
}
