//! Operation mixes that exercise [`GrowableIntArray`] the way list-vs-array
//! comparisons do: sorted insertion by linear scan, erasing at random
//! positions, and filtering values out by threshold.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::array::GrowableIntArray;
use crate::error::ArrayError;

/// Values above this are dropped by the filters unless told otherwise.
pub const DEFAULT_FILTER_THRESHOLD: i32 = i32::MAX / 2;

/// `count` reproducible values in `[0, i32::MAX)`.
pub fn random_values(count: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..i32::MAX)).collect()
}

/// Direction of the ordering maintained by [`linear_insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

/// Insert every value at its ordered position, found by scanning from the
/// front. Values go before the first element they do not come after, or at
/// the end if there is none, so an already ordered `array` stays ordered.
pub fn linear_insert(
    values: &[i32],
    array: &mut GrowableIntArray,
    order: Order,
) -> Result<(), ArrayError> {
    for &value in values {
        let position = array
            .iter()
            .position(|&current| match order {
                Order::Ascending => current >= value,
                Order::Descending => value >= current,
            })
            .unwrap_or(array.size());
        array.insert_at(position, value)?;
    }
    Ok(())
}

/// Remove elements at random positions until `array` is empty.
///
/// Returns the removed values in removal order.
pub fn linear_erase(array: &mut GrowableIntArray, seed: u64) -> Result<Vec<i32>, ArrayError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut removed = Vec::with_capacity(array.size());
    while !array.is_empty() {
        let position = rng.gen_range(0..array.size());
        removed.push(array.remove_at(position)?);
    }
    Ok(removed)
}

/// Ways of dropping every element greater than a threshold.
///
/// All strategies keep the surviving elements in their original order and
/// produce identical contents; they differ only in how much shifting they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterStrategy {
    /// Scan forward and `remove_at` each rejected element.
    Naive,
    /// Scan backward and `remove_at` each rejected element.
    Reverse,
    /// Move survivors to the front with `set`, then trim the tail.
    Compact,
    /// Copy survivors into a new array sized for the input.
    WorkCopy,
}

impl FilterStrategy {
    pub const ALL: [FilterStrategy; 4] = [
        FilterStrategy::Naive,
        FilterStrategy::Reverse,
        FilterStrategy::Compact,
        FilterStrategy::WorkCopy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FilterStrategy::Naive => "naive",
            FilterStrategy::Reverse => "reverse",
            FilterStrategy::Compact => "compact",
            FilterStrategy::WorkCopy => "work-copy",
        }
    }

    /// Keep only the elements `<= threshold`.
    pub fn apply(&self, array: &mut GrowableIntArray, threshold: i32) -> Result<(), ArrayError> {
        let before = array.size();
        match self {
            FilterStrategy::Naive => filter_naive(array, threshold)?,
            FilterStrategy::Reverse => filter_reverse(array, threshold)?,
            FilterStrategy::Compact => filter_compact(array, threshold)?,
            FilterStrategy::WorkCopy => *array = filter_into(array, threshold)?,
        }
        debug!(
            strategy = self.name(),
            before,
            after = array.size(),
            "filtered"
        );
        Ok(())
    }
}

pub fn filter_naive(array: &mut GrowableIntArray, threshold: i32) -> Result<(), ArrayError> {
    let mut idx = 0;
    while idx < array.size() {
        if array.get(idx)? > threshold {
            array.remove_at(idx)?;
        } else {
            idx += 1;
        }
    }
    Ok(())
}

pub fn filter_reverse(array: &mut GrowableIntArray, threshold: i32) -> Result<(), ArrayError> {
    for idx in (0..array.size()).rev() {
        if array.get(idx)? > threshold {
            array.remove_at(idx)?;
        }
    }
    Ok(())
}

pub fn filter_compact(array: &mut GrowableIntArray, threshold: i32) -> Result<(), ArrayError> {
    let mut insert = 0;
    for idx in 0..array.size() {
        let value = array.get(idx)?;
        if value <= threshold {
            array.set(insert, value)?;
            insert += 1;
        }
    }
    while array.size() > insert {
        array.remove_at(array.size() - 1)?;
    }
    Ok(())
}

pub fn filter_into(
    array: &GrowableIntArray,
    threshold: i32,
) -> Result<GrowableIntArray, ArrayError> {
    let mut work = GrowableIntArray::with_capacity(array.size());
    for &value in array {
        if value <= threshold {
            work.add(value)?;
        }
    }
    Ok(work)
}
