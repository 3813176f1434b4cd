//! Configuration loading for swarmgate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and layering in [`loader`]
//!
//! # Example
//!
//! ```
//! use swarmgate::config::{load_config, ConfigOverrides, ConfigPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".swarmgate");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "endpoint: https://dma.local/api").unwrap();
//!
//! let paths = ConfigPaths {
//!     project: Some(dir.join("config.yml")),
//!     ..Default::default()
//! };
//! let config = load_config(&paths, ConfigOverrides::default()).unwrap();
//! assert_eq!(config.endpoint.as_deref(), Some("https://dma.local/api"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, ConfigOverrides, ConfigPaths};
pub use schema::{ConfigFile, OutputMode, SwarmGateConfig, DEFAULT_TIMEOUT_SECS};
