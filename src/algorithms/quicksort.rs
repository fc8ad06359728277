//! The quicksort implementations

use std::ops::Range;

use crate::error::SortError;

/// The default `MAX_LEVELS` for [`IterativeQuickSort`]
pub const DEFAULT_MAX_LEVELS: usize = 48;

/// The recursive quicksort [`super::Sort`]
///
/// Uses the middle element as pivot. There is no bound on the recursion depth, which is linear
/// in the worst case. Use [`IterativeQuickSort`] where that matters.
pub struct QuickSort;

impl super::Sort for QuickSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "quick sort".to_string()
    }

    fn sort<T: Ord + Clone>(slice: &mut [T]) -> Result<(), SortError> {
        quicksort(slice);
        Ok(())
    }
}

/// Quicksort the given slice
fn quicksort<T: Ord + Clone>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    let pivot = slice[slice.len() / 2].clone();

    // Hoare partition, the pivot value itself stops both scans so neither runs out of bounds
    let mut i = 0;
    let mut j = slice.len() - 1;
    loop {
        while slice[i] < pivot {
            i += 1;
        }
        while slice[j] > pivot {
            j -= 1;
        }
        if i >= j {
            break;
        }
        slice.swap(i, j);
        i += 1;
        j -= 1;
    }

    // 0 < i < slice.len(), so both partitions shrink
    let (left, right) = slice.split_at_mut(i);
    quicksort(left);
    quicksort(right);
}

/// The non-recursive quicksort [`super::Sort`], using a work stack of at most `MAX_LEVELS` ranges
///
/// Fails with [`SortError::StackDepthExceeded`] if the stack is exhausted, see
/// [`iterative_quicksort`].
pub struct IterativeQuickSort<const MAX_LEVELS: usize = DEFAULT_MAX_LEVELS>;

impl<const MAX_LEVELS: usize> super::Sort for IterativeQuickSort<MAX_LEVELS> {
    const IS_STABLE: bool = false;

    fn display() -> String {
        format!("iterative quick sort (MAX_LEVELS = {MAX_LEVELS})")
    }

    fn sort<T: Ord + Clone>(slice: &mut [T]) -> Result<(), SortError> {
        iterative_quicksort(slice, MAX_LEVELS)
    }
}

/// Quicksort `slice` without recursion, keeping pending ranges on a stack of `max_levels` entries
///
/// The smaller partition is always processed first, so `log2(slice.len()) + 1` levels suffice.
///
/// # Errors
///
/// - [`SortError::InvalidInput`] if `max_levels` is zero
/// - [`SortError::AllocationFailure`] if the stack could not be allocated
/// - [`SortError::StackDepthExceeded`] if a partition would need more than `max_levels` entries.
///   The sort is aborted and `slice` is left as a permutation of its input.
pub fn iterative_quicksort<T: Ord>(slice: &mut [T], max_levels: usize) -> Result<(), SortError> {
    let mut stack = WorkStack::try_new(max_levels)?;
    quicksort_with_stack(slice, &mut stack)
}

fn quicksort_with_stack<T: Ord>(slice: &mut [T], stack: &mut WorkStack) -> Result<(), SortError> {
    stack.push(0..slice.len())?;

    while let Some(range) = stack.pop() {
        if range.len() < 2 {
            continue;
        }

        let start = range.start;
        let part = &mut slice[range.clone()];
        let pivot = partition(part);

        // Skip the run of elements equal to the pivot on both sides
        let mut low = pivot;
        while low > 0 && part[low - 1] == part[pivot] {
            low -= 1;
        }
        let mut high = pivot + 1;
        while high < part.len() && part[high] == part[pivot] {
            high += 1;
        }

        let left = start..start + low;
        let right = start + high..range.end;

        // Keep the smaller range on top to bound the depth logarithmically
        let result = if left.len() > right.len() {
            stack.push_pair(left, right)
        } else {
            stack.push_pair(right, left)
        };

        if let Err(error) = result {
            log::debug!(
                "Aborting iterative quicksort of {} elements: {error}",
                slice.len()
            );
            return Err(error);
        }
    }

    Ok(())
}

/// Partition `slice` around its middle element and return the final index of that element
///
/// Afterwards every element left of the returned index is `<=` and every element right of it
/// is `>=` the pivot.
fn partition<T: Ord>(slice: &mut [T]) -> usize {
    debug_assert!(!slice.is_empty());

    slice.swap(0, slice.len() / 2);

    // The pivot sits at `left` while scanning from the right and at `right` while scanning
    // from the left
    let mut left = 0;
    let mut right = slice.len() - 1;
    while left < right {
        while left < right && slice[right] >= slice[left] {
            right -= 1;
        }
        if left < right {
            slice.swap(left, right);
            left += 1;
        }

        while left < right && slice[left] <= slice[right] {
            left += 1;
        }
        if left < right {
            slice.swap(left, right);
            right -= 1;
        }
    }

    left
}

/// A stack of index ranges holding at most `max_levels` entries
#[derive(Debug)]
struct WorkStack {
    ranges: Vec<Range<usize>>,
    max_levels: usize,
    /// The highest number of entries held at once
    peak: usize,
}

impl WorkStack {
    fn try_new(max_levels: usize) -> Result<Self, SortError> {
        if max_levels == 0 {
            return Err(SortError::invalid_input(
                "the work stack needs at least one level",
            ));
        }

        let mut ranges = Vec::new();
        ranges
            .try_reserve_exact(max_levels)
            .map_err(|_| SortError::AllocationFailure {
                requested: max_levels,
            })?;

        Ok(Self {
            ranges,
            max_levels,
            peak: 0,
        })
    }

    fn push(&mut self, range: Range<usize>) -> Result<(), SortError> {
        self.ensure_room(1)?;
        self.ranges.push(range);
        self.peak = self.peak.max(self.ranges.len());
        Ok(())
    }

    /// Push both ranges, `top` last, or neither if they don't fit
    fn push_pair(&mut self, bottom: Range<usize>, top: Range<usize>) -> Result<(), SortError> {
        self.ensure_room(2)?;
        self.push(bottom)?;
        self.push(top)
    }

    fn pop(&mut self) -> Option<Range<usize>> {
        self.ranges.pop()
    }

    fn ensure_room(&self, count: usize) -> Result<(), SortError> {
        if self.ranges.len() + count > self.max_levels {
            Err(SortError::StackDepthExceeded {
                max_levels: self.max_levels,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Sort;

    const RUNS: usize = 100;
    const TEST_SIZE: usize = 10_000;

    mod recursive {
        use super::super::*;
        use super::*;

        #[test]
        fn empty() {
            crate::test::test_empty::<QuickSort>();
        }

        #[test]
        fn edge_cases() {
            crate::test::test_edge_cases::<QuickSort>();
        }

        #[test]
        fn random() {
            crate::test::test_random_sorted::<RUNS, TEST_SIZE, QuickSort>();
        }

        #[test]
        fn descending() {
            let mut values: Vec<i32> = (0..TEST_SIZE as i32).rev().collect();
            QuickSort::sort(&mut values).unwrap();
            assert_eq!(values, (0..TEST_SIZE as i32).collect::<Vec<_>>());
        }

        #[test]
        fn many_duplicates() {
            let mut values: Vec<i32> = (0..TEST_SIZE).map(|i| (i % 3) as i32).collect();
            QuickSort::sort(&mut values).unwrap();
            assert!(values.is_sorted());
        }
    }

    mod iterative {
        use super::super::*;
        use super::*;

        #[test]
        fn empty() {
            crate::test::test_empty::<IterativeQuickSort>();
        }

        #[test]
        fn edge_cases() {
            crate::test::test_edge_cases::<IterativeQuickSort>();
        }

        #[test]
        fn random() {
            crate::test::test_random_sorted::<RUNS, TEST_SIZE, IterativeQuickSort>();
        }

        #[test]
        fn all_equal_within_small_bound() {
            let mut values = [1; 8];
            iterative_quicksort(&mut values, 3).unwrap();
            assert_eq!(values, [1; 8]);

            let mut values = [1; 8];
            IterativeQuickSort::<3>::sort(&mut values).unwrap();
            assert_eq!(values, [1; 8]);
        }

        #[test]
        fn bound_exceeded() {
            let mut rng = crate::test::test_rng();
            let mut values: Vec<u32> = (0..1000).collect();
            rand::seq::SliceRandom::shuffle(values.as_mut_slice(), &mut rng);
            let original = values.clone();

            let result = iterative_quicksort(&mut values, 2);
            assert!(matches!(
                result,
                Err(SortError::StackDepthExceeded { max_levels: 2 })
            ));
            crate::test::assert_permutation(&original, &values);
        }

        #[test]
        fn single_level() {
            let mut values = [2, 1];
            assert!(matches!(
                iterative_quicksort(&mut values, 1),
                Err(SortError::StackDepthExceeded { max_levels: 1 })
            ));
            crate::test::assert_permutation(&[2, 1], &values);

            // Nothing needs splitting, a single level is enough
            let mut values = [7];
            iterative_quicksort(&mut values, 1).unwrap();
        }

        #[test]
        fn zero_levels() {
            let mut values = [3, 1, 2];
            assert!(matches!(
                iterative_quicksort(&mut values, 0),
                Err(SortError::InvalidInput { .. })
            ));
            assert_eq!(values, [3, 1, 2]);
        }

        #[test]
        fn depth_is_logarithmic() {
            let mut rng = crate::test::test_rng();

            for values in [
                (0..TEST_SIZE).collect::<Vec<_>>(),
                (0..TEST_SIZE).rev().collect(),
                std::iter::repeat_n(0..TEST_SIZE / 100, 100).flatten().collect(),
            ] {
                let mut values = values;
                rand::seq::SliceRandom::shuffle(values.as_mut_slice(), &mut rng);

                let mut stack = WorkStack::try_new(DEFAULT_MAX_LEVELS).unwrap();
                quicksort_with_stack(&mut values, &mut stack).unwrap();

                assert!(values.is_sorted());
                assert!(
                    stack.peak <= TEST_SIZE.ilog2() as usize + 2,
                    "Peak depth {} too high",
                    stack.peak
                );
            }
        }

        #[test]
        fn partition_splits_around_pivot() {
            let mut values = [5, 3, 8, 3, 1, 9, 2];
            let pivot_value = values[values.len() / 2];
            let pivot = partition(&mut values);

            assert_eq!(values[pivot], pivot_value);
            assert!(values[..pivot].iter().all(|&value| value <= pivot_value));
            assert!(values[pivot + 1..].iter().all(|&value| value >= pivot_value));
        }

        #[test]
        fn push_pair_is_all_or_nothing() {
            let mut stack = WorkStack::try_new(2).unwrap();
            stack.push(0..4).unwrap();
            assert!(stack.push_pair(0..1, 2..4).is_err());
            assert_eq!(stack.pop(), Some(0..4));
            assert_eq!(stack.pop(), None);
        }
    }
}
