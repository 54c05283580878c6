use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`GrowableIntArray`](crate::array::GrowableIntArray) operations.
///
/// A failed operation never modifies the array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Index is outside the valid range for the operation.
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// Growing would pass the configured capacity limit.
    #[error("capacity {requested} exceeds the configured limit of {limit}")]
    CapacityExceeded { requested: usize, limit: usize },
    /// The allocator refused to provide the grown buffer.
    #[error("failed to allocate storage for {requested} elements")]
    AllocationFailure { requested: usize },
}

/// Errors raised while loading an [`ArrayConfig`](crate::config::ArrayConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("capacity_limit {limit} is smaller than initial_capacity {initial}")]
    LimitBelowInitial { initial: usize, limit: usize },
}
