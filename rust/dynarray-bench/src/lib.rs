//! dynarray benchmark support
//!
//! Settings and input generation shared by the criterion benches. Settings
//! come from `bench/dynarray-bench.toml` when it can be found, otherwise the
//! built-in defaults are used.

use std::path::{Path, PathBuf};

use dynarray_core::workload::{self, DEFAULT_FILTER_THRESHOLD};
use dynarray_core::{ArrayConfig, ArrayError, ConfigError, GrowableIntArray};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const CONFIG_FILE: &str = "dynarray-bench.toml";

/// Failure to build a benchmark input.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Array(#[from] ArrayError),
}

/// Seed used when the settings file does not name one.
pub const DEFAULT_SEED: u64 = 123_456_789;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Element counts to benchmark at.
    pub sizes: Vec<usize>,
    /// Seed for the random inputs.
    pub seed: u64,
    /// Filters keep values `<= filter_threshold`.
    pub filter_threshold: i32,
    /// Settings for arrays built by the benches.
    pub array: ArrayConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 100, 1000, 10_000],
            seed: DEFAULT_SEED,
            filter_threshold: DEFAULT_FILTER_THRESHOLD,
            array: ArrayConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Load settings from the first settings file found, or the defaults.
    pub fn load() -> Self {
        let Some(path) = find_config() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(cfg) => {
                info!(path = %path.display(), "loaded bench settings");
                cfg
            }
            Err(e) => {
                warn!(error = %e, "ignoring bench settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(content)?;
        cfg.array.validate()?;
        Ok(cfg)
    }

    /// Reproducible random values for a benchmark of `size` elements.
    pub fn values(&self, size: usize) -> Vec<i32> {
        workload::random_values(size, self.seed)
    }

    /// A configured array holding `values`.
    pub fn array_of(&self, values: &[i32]) -> Result<GrowableIntArray, BenchError> {
        let mut array = GrowableIntArray::with_config(&self.array)?;
        for &v in values {
            array.add(v)?;
        }
        Ok(array)
    }
}

/// Locate the settings file relative to likely working directories.
fn find_config() -> Option<PathBuf> {
    // cargo runs benches from the crate directory
    let candidates = [
        PathBuf::from("bench").join(CONFIG_FILE),
        PathBuf::from("../../bench").join(CONFIG_FILE),
        PathBuf::from("../bench").join(CONFIG_FILE),
    ];
    candidates.into_iter().find(|c| c.is_file())
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // try_init errors once a global subscriber exists; repeat calls expect that.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
