use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ArrayConfig, DEFAULT_INITIAL_CAPACITY};
use crate::error::{ArrayError, ConfigError};
use crate::sort;

const GROW_FACTOR: usize = 2;

/// A bounds-checked, growable array of `i32`.
///
/// The backing buffer is always fully allocated: its length is the capacity,
/// and only the first `size` slots hold elements. When an insertion needs more
/// room the capacity becomes `capacity * 2 + 1` (or the requested size, if
/// that is larger), so appends are amortized O(1).
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "Vec<i32>", into = "Vec<i32>")]
pub struct GrowableIntArray {
    /// Backing buffer; `storage.len()` is the capacity.
    storage: Vec<i32>,
    /// Number of valid elements at the front of `storage`.
    size: usize,
    /// Growth beyond this many slots fails with `CapacityExceeded`.
    capacity_limit: Option<usize>,
}

impl GrowableIntArray {
    // ── Constructors ────────────────────────────────────────────────────

    /// Create an empty array with the default capacity of 8.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        GrowableIntArray {
            storage: vec![0; capacity],
            size: 0,
            capacity_limit: None,
        }
    }

    /// Create an empty array from settings, rejecting a limit below the
    /// initial capacity.
    pub fn with_config(config: &ArrayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GrowableIntArray {
            storage: vec![0; config.initial_capacity],
            size: 0,
            capacity_limit: config.capacity_limit,
        })
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Number of valid elements.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32, ArrayError> {
        self.check_index(index)?;
        Ok(self.storage[index])
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.storage[index] = value;
        Ok(())
    }

    /// The valid elements as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.size]
    }

    /// Direct mutable view of the valid elements, for in-place algorithms.
    ///
    /// The view borrows the array, so nothing can resize it while the view
    /// is alive.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.storage[..self.size]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Append `value`; same as `insert_at(size(), value)`.
    pub fn add(&mut self, value: i32) -> Result<(), ArrayError> {
        self.insert_at(self.size, value)
    }

    /// Insert `value` so that it ends up at `index`, shifting the tail right.
    ///
    /// `index` may equal `size()`, which appends.
    pub fn insert_at(&mut self, index: usize, value: i32) -> Result<(), ArrayError> {
        if index > self.size {
            return Err(ArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        self.ensure_capacity(self.size + 1)?;
        self.storage.copy_within(index..self.size, index + 1);
        self.storage[index] = value;
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Result<i32, ArrayError> {
        self.check_index(index)?;
        let removed = self.storage[index];
        self.storage.copy_within(index + 1..self.size, index);
        self.size -= 1;
        Ok(removed)
    }

    /// Drop every element past `len`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        self.size = self.size.min(len);
    }

    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Sort the valid elements ascending with [`sort::quicksort`].
    pub fn sort(&mut self) {
        sort::quicksort(self.as_mut_slice());
    }

    /// Element-wise comparison against any ordered sequence of integers.
    pub fn eq_sequence<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<i32>,
    {
        let mut theirs = other.into_iter();
        for &mine in self.as_slice() {
            match theirs.next() {
                Some(v) if *v.borrow() == mine => {}
                _ => return false,
            }
        }
        theirs.next().is_none()
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.size {
            return Err(ArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    fn ensure_capacity(&mut self, size_wanted: usize) -> Result<(), ArrayError> {
        let capacity = self.storage.len();
        if size_wanted <= capacity {
            return Ok(());
        }

        let mut new_capacity = capacity
            .saturating_mul(GROW_FACTOR)
            .saturating_add(1)
            .max(size_wanted);
        if let Some(limit) = self.capacity_limit {
            if size_wanted > limit {
                warn!(
                    requested = size_wanted,
                    limit, "capacity limit rejected growth"
                );
                return Err(ArrayError::CapacityExceeded {
                    requested: size_wanted,
                    limit,
                });
            }
            new_capacity = new_capacity.min(limit);
        }

        self.storage
            .try_reserve_exact(new_capacity - capacity)
            .map_err(|_| ArrayError::AllocationFailure {
                requested: new_capacity,
            })?;
        self.storage.resize(new_capacity, 0);
        debug!(
            old_capacity = capacity,
            new_capacity,
            size = self.size,
            "grew backing storage"
        );
        Ok(())
    }
}

impl Default for GrowableIntArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GrowableIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableIntArray")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders as `  [0]=5  [1]=3  [2]=9`.
impl fmt::Display for GrowableIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.iter().enumerate() {
            write!(f, "  [{}]={}", idx, value)?;
        }
        Ok(())
    }
}

// ── Equality ────────────────────────────────────────────────────────────

impl PartialEq for GrowableIntArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for GrowableIntArray {}

impl PartialEq<[i32]> for GrowableIntArray {
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[i32]> for GrowableIntArray {
    fn eq(&self, other: &&[i32]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize> PartialEq<[i32; N]> for GrowableIntArray {
    fn eq(&self, other: &[i32; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<i32>> for GrowableIntArray {
    fn eq(&self, other: &Vec<i32>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<GrowableIntArray> for Vec<i32> {
    fn eq(&self, other: &GrowableIntArray) -> bool {
        self.as_slice() == other.as_slice()
    }
}

// ── Conversions ─────────────────────────────────────────────────────────

impl From<Vec<i32>> for GrowableIntArray {
    fn from(storage: Vec<i32>) -> Self {
        let size = storage.len();
        GrowableIntArray {
            storage,
            size,
            capacity_limit: None,
        }
    }
}

impl From<&[i32]> for GrowableIntArray {
    fn from(values: &[i32]) -> Self {
        Self::from(values.to_vec())
    }
}

impl From<GrowableIntArray> for Vec<i32> {
    fn from(mut array: GrowableIntArray) -> Self {
        array.storage.truncate(array.size);
        array.storage
    }
}

impl FromIterator<i32> for GrowableIntArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a GrowableIntArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
