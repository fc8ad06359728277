//! The heapsort implementation

use crate::error::SortError;

/// The heapsort [`super::Sort`]
///
/// In place and `O(n log n)`, but not stable.
pub struct HeapSort;

impl super::Sort for HeapSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "heap sort".to_string()
    }

    fn sort<T: Ord + Clone>(slice: &mut [T]) -> Result<(), SortError> {
        if slice.len() < 2 {
            return Ok(());
        }

        // Build a max-heap bottom up
        for root in (0..slice.len() / 2).rev() {
            sift_down(slice, root);
        }

        // Repeatedly move the maximum to the shrinking tail
        for end in (1..slice.len()).rev() {
            slice.swap(0, end);
            sift_down(&mut slice[..end], 0);
        }

        Ok(())
    }
}

/// Restore the max-heap property of `heap` below `root`, assuming both subtrees are heaps
fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= heap.len() {
            break;
        }

        // Pick the larger child, preferring the left one on ties
        if child + 1 < heap.len() && heap[child] < heap[child + 1] {
            child += 1;
        }

        if heap[child] > heap[root] {
            heap.swap(child, root);
            root = child;
        } else {
            break;
        }
    }
}
