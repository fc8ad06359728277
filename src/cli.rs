//! Command line input handling

use crate::algorithms::{Sort, heapsort, insertionsort, mergesort, quicksort};
use crate::error::SortError;

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The sorting algorithm to run
    #[arg()]
    pub algorithm: Algorithm,
    /// The number of elements to sort
    #[arg(short, long, default_value_t = 100_000)]
    pub size: usize,
    /// Elements are drawn from `0..modulus`
    #[arg(short, long, default_value_t = 10_000)]
    pub modulus: i32,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// Work stack bound of the iterative quicksort
    #[arg(long, default_value_t = quicksort::DEFAULT_MAX_LEVELS)]
    pub max_levels: usize,
    /// Don't show a spinner while sorting
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Insertion sort
    Insertion,
    /// Recursive mergesort
    Merge,
    /// Non-recursive mergesort
    MergeBottomUp,
    /// Heapsort
    Heap,
    /// Recursive quicksort
    Quick,
    /// Non-recursive quicksort with a bounded work stack
    QuickIterative,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

impl Algorithm {
    /// Sort the first `length` elements of `slice` with this algorithm, `max_levels` bounds the
    /// iterative quicksort
    pub fn sort<T: Ord + Clone>(
        self,
        slice: &mut [T],
        length: usize,
        max_levels: usize,
    ) -> Result<(), SortError> {
        match self {
            Algorithm::Insertion => insertionsort::InsertionSort::sort_prefix(slice, length),
            Algorithm::Merge => mergesort::TopDownMergeSort::sort_prefix(slice, length),
            Algorithm::MergeBottomUp => mergesort::BottomUpMergeSort::sort_prefix(slice, length),
            Algorithm::Heap => heapsort::HeapSort::sort_prefix(slice, length),
            Algorithm::Quick => quicksort::QuickSort::sort_prefix(slice, length),
            Algorithm::QuickIterative => quicksort::iterative_quicksort(
                crate::error::checked_prefix_mut(slice, length)?,
                max_levels,
            ),
        }
    }

    /// Return whether the sort is stable
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Insertion => insertionsort::InsertionSort::IS_STABLE,
            Algorithm::Merge => mergesort::TopDownMergeSort::IS_STABLE,
            Algorithm::MergeBottomUp => mergesort::BottomUpMergeSort::IS_STABLE,
            Algorithm::Heap => heapsort::HeapSort::IS_STABLE,
            Algorithm::Quick => quicksort::QuickSort::IS_STABLE,
            Algorithm::QuickIterative => {
                quicksort::IterativeQuickSort::<{ quicksort::DEFAULT_MAX_LEVELS }>::IS_STABLE
            }
        }
    }

    /// Human readable name of the sort
    pub fn description(self) -> String {
        match self {
            Algorithm::Insertion => insertionsort::InsertionSort::display(),
            Algorithm::Merge => mergesort::TopDownMergeSort::display(),
            Algorithm::MergeBottomUp => mergesort::BottomUpMergeSort::display(),
            Algorithm::Heap => heapsort::HeapSort::display(),
            Algorithm::Quick => quicksort::QuickSort::display(),
            Algorithm::QuickIterative => "iterative quick sort".to_string(),
        }
    }
}
