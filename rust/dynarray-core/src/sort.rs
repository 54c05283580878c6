//! In-place quicksort with a middle-index pivot.
//!
//! The partition is the two-cursor scheme: `i` walks right past elements
//! smaller than the pivot, `j` walks left past elements larger than it, and
//! out-of-place pairs are swapped until the cursors cross. Already sorted or
//! adversarial inputs can still degrade to O(n²) comparisons; that is a known
//! property of this pivot rule and is kept as is.
//!
//! Stack depth is bounded to O(log n): after each partition the smaller side
//! is sorted recursively and the larger side is handled by looping.

use serde::Serialize;
use tracing::{debug, trace};

/// Counters collected by [`quicksort_with_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Element-vs-pivot comparisons performed.
    pub comparisons: u64,
    /// Element exchanges performed.
    pub swaps: u64,
    /// Partition passes performed.
    pub partitions: u64,
    /// Deepest recursion level reached (1 for a single partition pass).
    pub max_depth: usize,
}

trait Probe {
    fn compared(&mut self) {}
    fn swapped(&mut self) {}
    fn partitioned(&mut self, _depth: usize) {}
}

impl Probe for () {}

impl Probe for SortStats {
    fn compared(&mut self) {
        self.comparisons += 1;
    }

    fn swapped(&mut self) {
        self.swaps += 1;
    }

    fn partitioned(&mut self, depth: usize) {
        self.partitions += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Sort `values` ascending in place. An empty slice is left untouched.
pub fn quicksort<T: Ord + Copy>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }
    let high = values.len() as isize - 1;
    sort_range(values, 0, high, 1, &mut ());
}

/// Same as [`quicksort`], but also reports what the sort did.
pub fn quicksort_with_stats<T: Ord + Copy>(values: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    if values.is_empty() {
        return stats;
    }
    let high = values.len() as isize - 1;
    sort_range(values, 0, high, 1, &mut stats);
    debug!(
        len = values.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        max_depth = stats.max_depth,
        "quicksort finished"
    );
    stats
}

/// Sort the inclusive range `[low, high]`.
fn sort_range<T: Ord + Copy, P: Probe>(
    values: &mut [T],
    mut low: isize,
    mut high: isize,
    depth: usize,
    probe: &mut P,
) {
    trace!(low, high, depth, "sorting range");
    loop {
        probe.partitioned(depth);
        let (i, j) = partition(values, low, high, probe);

        let left = (low < j).then_some((low, j));
        let right = (i < high).then_some((i, high));
        match (left, right) {
            (Some(left), Some(right)) => {
                let (smaller, larger) = if left.1 - left.0 <= right.1 - right.0 {
                    (left, right)
                } else {
                    (right, left)
                };
                sort_range(values, smaller.0, smaller.1, depth + 1, probe);
                (low, high) = larger;
            }
            (Some(only), None) | (None, Some(only)) => (low, high) = only,
            (None, None) => return,
        }
    }
}

/// One partition pass over `[low, high]`. Returns the crossed cursors `(i, j)`.
///
/// `j` may end one below `low`, so cursors are signed.
fn partition<T: Ord + Copy, P: Probe>(
    values: &mut [T],
    low: isize,
    high: isize,
    probe: &mut P,
) -> (isize, isize) {
    let pivot = values[(low + (high - low) / 2) as usize];
    let mut i = low;
    let mut j = high;

    while i <= j {
        while less(values[i as usize], pivot, probe) {
            i += 1;
        }
        while less(pivot, values[j as usize], probe) {
            j -= 1;
        }
        if i <= j {
            values.swap(i as usize, j as usize);
            probe.swapped();
            i += 1;
            j -= 1;
        }
    }
    (i, j)
}

#[inline]
fn less<T: Ord, P: Probe>(a: T, b: T, probe: &mut P) -> bool {
    probe.compared();
    a < b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(values: &[i32]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn empty_is_noop() {
        let mut values: [i32; 0] = [];
        quicksort(&mut values);
        assert_eq!(quicksort_with_stats(&mut values), SortStats::default());
    }

    #[test]
    fn single_element() {
        let mut values = [42];
        quicksort(&mut values);
        assert_eq!(values, [42]);
    }

    #[test]
    fn small_mixed() {
        let mut values = [5, 3, 9];
        quicksort(&mut values);
        assert_eq!(values, [3, 5, 9]);
    }

    #[test]
    fn negatives_and_duplicates() {
        let mut values = vec![0, -7, 3, 3, i32::MIN, 12, -7, i32::MAX, 0];
        let mut expected = values.clone();
        expected.sort();
        quicksort(&mut values);
        assert_eq!(values, expected);
    }

    #[test]
    fn sorted_reverse_and_equal_inputs() {
        let mut sorted: Vec<i32> = (0..500).collect();
        let mut reverse: Vec<i32> = (0..500).rev().collect();
        let mut equal = vec![7; 500];
        quicksort(&mut sorted);
        quicksort(&mut reverse);
        quicksort(&mut equal);
        assert!(is_sorted(&sorted));
        assert_eq!(reverse, (0..500).collect::<Vec<_>>());
        assert!(equal.iter().all(|&v| v == 7));
    }

    #[test]
    fn two_elements_swap() {
        let mut values = [2, 1];
        let stats = quicksort_with_stats(&mut values);
        assert_eq!(values, [1, 2]);
        assert_eq!(stats.partitions, 1);
        assert_eq!(stats.swaps, 1);
    }

    #[test]
    fn three_elements_counts() {
        // pivot = values[1] = 3; i stops at 0 (5 >= 3), j stops at 1 (3 <= 3).
        // After the swap i = 1, j = 0 and only [1, 2] is left, which is
        // handled by looping rather than recursing.
        let mut values = [5, 3, 9];
        let stats = quicksort_with_stats(&mut values);
        assert_eq!(values, [3, 5, 9]);
        assert_eq!(stats.partitions, 2);
        assert_eq!(stats.swaps, 2);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn depth_stays_logarithmic_on_sorted_input() {
        let n = 1usize << 14;
        let mut values: Vec<i32> = (0..n as i32).collect();
        let stats = quicksort_with_stats(&mut values);
        assert!(is_sorted(&values));
        assert!(stats.max_depth <= 15, "depth {}", stats.max_depth);
    }

    #[test]
    fn works_for_other_ord_types() {
        let mut words = ["pear", "apple", "fig", "banana"];
        quicksort(&mut words);
        assert_eq!(words, ["apple", "banana", "fig", "pear"]);
    }
}
