//! The error type shared by all sorts, the generator and the printer

/// Everything that can go wrong while generating, sorting or printing a sequence
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// Arguments were inconsistent, nothing has been mutated
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// The bounded work stack of the iterative quicksort is full
    #[error("work stack exceeded its bound of {max_levels} levels")]
    StackDepthExceeded { max_levels: usize },
    /// An auxiliary buffer could not be reserved
    #[error("failed to allocate an auxiliary buffer of {requested} elements")]
    AllocationFailure { requested: usize },
    /// Writing to the output sink failed
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl SortError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SortError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Returns `slice[..length]`, or [`SortError::InvalidInput`] if `length` is out of bounds
pub fn checked_prefix<T>(slice: &[T], length: usize) -> Result<&[T], SortError> {
    slice.get(..length).ok_or_else(|| {
        SortError::invalid_input(format!(
            "length {length} exceeds sequence length {}",
            slice.len()
        ))
    })
}

/// Mutable version of [`checked_prefix`]
pub fn checked_prefix_mut<T>(slice: &mut [T], length: usize) -> Result<&mut [T], SortError> {
    let available = slice.len();
    slice.get_mut(..length).ok_or_else(|| {
        SortError::invalid_input(format!(
            "length {length} exceeds sequence length {available}"
        ))
    })
}
