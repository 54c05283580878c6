//! Construction settings for [`GrowableIntArray`](crate::array::GrowableIntArray).
//!
//! Settings are plain TOML:
//!
//! ```toml
//! initial_capacity = 8
//! capacity_limit = 1048576
//! ```
//!
//! Both keys are optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Capacity used by [`GrowableIntArray::new`](crate::array::GrowableIntArray::new).
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    pub initial_capacity: usize,
    /// Upper bound on the backing buffer. `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_limit: Option<usize>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            capacity_limit: None,
        }
    }
}

impl ArrayConfig {
    /// Parse and validate settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load settings from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.capacity_limit {
            Some(limit) if limit < self.initial_capacity => Err(ConfigError::LimitBelowInitial {
                initial: self.initial_capacity,
                limit,
            }),
            _ => Ok(()),
        }
    }
}
