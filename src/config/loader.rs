//! Configuration file discovery and loading.
//!
//! Layers are merged in this order, later ones winning:
//! 1. User global config (`~/.swarmgate/config.yml`)
//! 2. Project config (`.swarmgate/config.yml`)
//! 3. Explicit `--config` file
//! 4. Command-line / environment overrides

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{ConfigFile, SwarmGateConfig};
use crate::error::{Result, SwarmGateError};

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.swarmgate/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .swarmgate/config.yml
    pub project: Option<PathBuf>,

    /// File given with --config
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given working directory.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Self {
        Self {
            user_global: dirs::home_dir()
                .map(|home| home.join(".swarmgate").join("config.yml"))
                .filter(|p| p.exists()),
            project: Some(project_root.join(".swarmgate").join("config.yml"))
                .filter(|p| p.exists()),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Returns all config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub token: Option<String>,
}

impl ConfigOverrides {
    fn into_layer(self) -> ConfigFile {
        ConfigFile {
            endpoint: self.endpoint,
            token: self.token,
            ..Default::default()
        }
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(SwarmGateError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content, path)
}

/// Parse config content; `path` is only used in error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| SwarmGateError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load every layer and resolve the final configuration.
pub fn load_config(paths: &ConfigPaths, overrides: ConfigOverrides) -> Result<SwarmGateConfig> {
    let mut merged = ConfigFile::default();

    for path in paths.all() {
        tracing::debug!("Loading config from {}", path.display());
        merged = merged.merge(load_config_file(path)?);
    }

    let config = SwarmGateConfig::from(merged.merge(overrides.into_layer()));
    config.validate()?;
    Ok(config)
}
