//! dynarray core
//!
//! A bounds-checked growable integer array and the in-place quicksort that
//! runs over its backing storage.

pub mod array;
pub mod config;
pub mod error;
pub mod sort;
pub mod workload;

pub use array::GrowableIntArray;
pub use config::ArrayConfig;
pub use error::{ArrayError, ConfigError};
pub use sort::{quicksort, quicksort_with_stats, SortStats};
