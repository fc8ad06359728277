//! Merging two adjacent sorted runs of a slice through an auxiliary buffer

use crate::error::SortError;

/// An auxiliary buffer for merging, owned by a single sort call
///
/// The buffer is reserved up front and never grows afterwards, it is released when dropped.
#[derive(Debug)]
pub struct MergeBuffer<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T: Ord + Clone> MergeBuffer<T> {
    /// Reserve a buffer able to merge slices of up to `capacity` elements
    ///
    /// # Errors
    ///
    /// Returns [`SortError::AllocationFailure`] if the memory could not be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, SortError> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(capacity)
            .map_err(|_| SortError::AllocationFailure {
                requested: capacity,
            })?;

        Ok(Self { elements, capacity })
    }

    /// Merge the two sorted runs `slice[..run_length]` and `slice[run_length..]`
    ///
    /// Ties are taken from the left run, so the merge is stable.
    pub fn merge(&mut self, slice: &mut [T], run_length: usize) {
        assert!(
            slice.len() <= self.capacity,
            "Buffer needs to have at least the size of slice"
        );
        assert!(
            run_length <= slice.len(),
            "Split point needs to be in bounds"
        );

        let (left, right) = slice.split_at(run_length);
        let (mut i, mut j) = (0, 0);

        self.elements.clear();
        while i < left.len() && j < right.len() {
            if left[i] <= right[j] {
                self.elements.push(left[i].clone());
                i += 1;
            } else {
                self.elements.push(right[j].clone());
                j += 1;
            }
        }
        self.elements.extend_from_slice(&left[i..]);
        self.elements.extend_from_slice(&right[j..]);

        slice.clone_from_slice(&self.elements);
        self.elements.clear();
    }
}
