//! The insertion sort implementation

use crate::error::SortError;

/// The insertion [`super::Sort`]
///
/// In place, stable, `O(n^2)` comparisons and `O(n)` on already sorted input.
pub struct InsertionSort;

impl super::Sort for InsertionSort {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "insertion sort".to_string()
    }

    fn sort<T: Ord + Clone>(slice: &mut [T]) -> Result<(), SortError> {
        if slice.len() < 2 {
            return Ok(());
        }

        insertion_sort_with_partition(slice, 1);
        Ok(())
    }
}

/// Sort slice using insertion sort, assuming that `slice[0..partition_point]` is already in order
fn insertion_sort_with_partition<T: Ord>(slice: &mut [T], partition_point: usize) {
    assert!(
        (0..slice.len()).contains(&partition_point),
        "Partition point needs to be in bounds"
    );

    for i in partition_point..slice.len() {
        // Move slice[i] left past all strictly greater predecessors
        for j in (0..i).rev() {
            if slice[j + 1] < slice[j] {
                slice.swap(j + 1, j);
            } else {
                break;
            }
        }
    }
}
