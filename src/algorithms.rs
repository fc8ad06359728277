//! The sorting algorithms and the trait they share

use crate::error::SortError;

pub mod heapsort;
pub mod insertionsort;
pub mod merging;
pub mod mergesort;
pub mod quicksort;

/// A sorting algorithm, sorting slices in place into non-decreasing order
pub trait Sort {
    /// Whether equal elements keep their relative order
    const IS_STABLE: bool;

    /// String representation of this sort
    fn display() -> String;

    /// Sort `slice`
    ///
    /// # Errors
    ///
    /// Returns an error if an auxiliary structure could not be acquired or is exhausted.
    /// `slice` is a permutation of its initial content in that case.
    fn sort<T: Ord + Clone>(slice: &mut [T]) -> Result<(), SortError>;

    /// Sort the first `length` elements of `slice`
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidInput`] without touching `slice` if `length` is out of bounds,
    /// otherwise the same errors as [`Self::sort`].
    fn sort_prefix<T: Ord + Clone>(slice: &mut [T], length: usize) -> Result<(), SortError> {
        Self::sort(crate::error::checked_prefix_mut(slice, length)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! property_tests {
        ($($name:ident: $sort:ty),* $(,)?) => {
            $(
                mod $name {
                    use proptest::prelude::*;

                    proptest! {
                        #[test]
                        fn sorted_permutation(values in prop::collection::vec(any::<i32>(), 0..300)) {
                            crate::test::check_sorted_permutation::<$sort>(&values);
                        }

                        #[test]
                        fn few_distinct_values(values in prop::collection::vec(0..4i32, 0..300)) {
                            crate::test::check_sorted_permutation::<$sort>(&values);
                        }

                        #[test]
                        fn idempotent(values in prop::collection::vec(any::<i32>(), 0..300)) {
                            crate::test::check_idempotent::<$sort>(&values);
                        }
                    }
                }
            )*
        };
    }

    property_tests! {
        insertion: crate::algorithms::insertionsort::InsertionSort,
        top_down_merge: crate::algorithms::mergesort::TopDownMergeSort,
        bottom_up_merge: crate::algorithms::mergesort::BottomUpMergeSort,
        heap: crate::algorithms::heapsort::HeapSort,
        quick: crate::algorithms::quicksort::QuickSort,
        iterative_quick: crate::algorithms::quicksort::IterativeQuickSort,
    }

    #[test]
    fn prefix_is_validated_before_mutation() {
        let mut values = [3, 2, 1];
        assert!(matches!(
            heapsort::HeapSort::sort_prefix(&mut values, 4),
            Err(SortError::InvalidInput { .. })
        ));
        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    fn prefix_only_sorts_prefix() {
        let mut values = [4, 3, 2, 1];
        insertionsort::InsertionSort::sort_prefix(&mut values, 3).unwrap();
        assert_eq!(values, [2, 3, 4, 1]);

        let mut values = [4, 3, 2, 1];
        mergesort::BottomUpMergeSort::sort_prefix(&mut values, 0).unwrap();
        assert_eq!(values, [4, 3, 2, 1]);
    }

    #[test]
    fn stability_flags() {
        assert!(insertionsort::InsertionSort::IS_STABLE);
        assert!(mergesort::TopDownMergeSort::IS_STABLE);
        assert!(mergesort::BottomUpMergeSort::IS_STABLE);
        assert!(!heapsort::HeapSort::IS_STABLE);
        assert!(!quicksort::QuickSort::IS_STABLE);
        assert!(!quicksort::IterativeQuickSort::<48>::IS_STABLE);
    }
}
