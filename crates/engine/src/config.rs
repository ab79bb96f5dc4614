//! Engine configuration
//!
//! Plugin directories and the default stream chunk size. Configuration is
//! read from TOML or the environment and applied process-wide once through
//! [`crate::configure`], or used directly with [`crate::Catalog::load`].

use std::fs;
use std::path::{Path, PathBuf};

use mcrypt_api::error::validation;
use mcrypt_api::{Error, Result};
use mcrypt_params::DEFAULT_BUFFER_BLOCKS;
use serde::Deserialize;

/// Environment variable naming the algorithm manifest directory
pub const ALGORITHM_DIR_VAR: &str = "MCRYPT_ALGORITHM_DIR";
/// Environment variable naming the mode manifest directory
pub const MODE_DIR_VAR: &str = "MCRYPT_MODE_DIR";
/// Environment variable overriding the default stream chunk size in blocks
pub const BUFFER_BLOCKS_VAR: &str = "MCRYPT_BUFFER_BLOCKS";

/// Engine configuration
///
/// ```toml
/// algorithm_dir = "/usr/lib/mcrypt/algorithms"
/// mode_dir = "/usr/lib/mcrypt/modes"
/// buffer_blocks = 4096
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Directory of algorithm descriptor manifests
    pub algorithm_dir: Option<PathBuf>,
    /// Directory of mode descriptor manifests
    pub mode_dir: Option<PathBuf>,
    /// Default number of algorithm blocks per stream chunk
    pub buffer_blocks: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm_dir: None,
            mode_dir: None,
            buffer_blocks: DEFAULT_BUFFER_BLOCKS,
        }
    }
}

impl EngineConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| Error::param("engine config", e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Read configuration from the process environment
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(ALGORITHM_DIR_VAR) {
            config.algorithm_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup(MODE_DIR_VAR) {
            config.mode_dir = Some(PathBuf::from(dir));
        }
        if let Some(blocks) = lookup(BUFFER_BLOCKS_VAR) {
            config.buffer_blocks = blocks.trim().parse().map_err(|_| {
                Error::param(BUFFER_BLOCKS_VAR, format!("not a block count: {blocks:?}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the algorithm manifest directory
    pub fn with_algorithm_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.algorithm_dir = Some(dir.into());
        self
    }

    /// Set the mode manifest directory
    pub fn with_mode_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mode_dir = Some(dir.into());
        self
    }

    /// Set the default stream chunk size in blocks
    pub fn with_buffer_blocks(mut self, buffer_blocks: usize) -> Self {
        self.buffer_blocks = buffer_blocks;
        self
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        validation::parameter(self.buffer_blocks > 0, "buffer_blocks", "must be at least 1")
    }
}
