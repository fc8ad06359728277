//! The mergesort implementations

use super::merging::MergeBuffer;
use crate::error::SortError;

/// The Top-Down Mergesort [`super::Sort`]
///
/// Splits at the midpoint, sorts both halves recursively and merges them.
pub struct TopDownMergeSort;

impl super::Sort for TopDownMergeSort {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "top-down merge sort".to_string()
    }

    fn sort<T: Ord + Clone>(slice: &mut [T]) -> Result<(), SortError> {
        if slice.len() < 2 {
            return Ok(());
        }

        // A buffer big enough to merge the complete slice serves every recursion level
        let mut buffer = MergeBuffer::try_with_capacity(slice.len())?;

        Self::top_down_mergesort(slice, &mut buffer);
        Ok(())
    }
}

impl TopDownMergeSort {
    /// The actual top-down mergesort implementation, sorts `slice`
    fn top_down_mergesort<T: Ord + Clone>(slice: &mut [T], buffer: &mut MergeBuffer<T>) {
        if slice.len() < 2 {
            return;
        }

        let middle = slice.len() / 2;

        let (left, right) = slice.split_at_mut(middle);
        Self::top_down_mergesort(left, buffer);
        Self::top_down_mergesort(right, buffer);

        buffer.merge(slice, middle);
    }
}

/// The Bottom-Up Mergesort [`super::Sort`]
///
/// Merges adjacent blocks of width `1, 2, 4, ...` over the whole slice, reusing one buffer.
pub struct BottomUpMergeSort;

impl super::Sort for BottomUpMergeSort {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "bottom-up merge sort".to_string()
    }

    fn sort<T: Ord + Clone>(slice: &mut [T]) -> Result<(), SortError> {
        if slice.len() < 2 {
            return Ok(());
        }

        let mut buffer = MergeBuffer::try_with_capacity(slice.len())?;

        Self::bottom_up_mergesort(slice, &mut buffer);
        Ok(())
    }
}

impl BottomUpMergeSort {
    /// The actual bottom-up mergesort implementation, sorts `slice`
    fn bottom_up_mergesort<T: Ord + Clone>(slice: &mut [T], buffer: &mut MergeBuffer<T>) {
        let mut merge_size = 1;
        while merge_size < slice.len() {
            let mut start = 0;

            // A trailing block without a partner is already sorted and stays in place
            while start < slice.len() - merge_size {
                let end = std::cmp::min(start + 2 * merge_size, slice.len());
                buffer.merge(&mut slice[start..end], merge_size);

                start += 2 * merge_size;
            }

            merge_size *= 2;
        }
    }
}
