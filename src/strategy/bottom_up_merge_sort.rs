use crate::comparator::Comparator;

use super::{SortStrategy, merge};

/// Iterative merge sort: starts from single-element runs and merges adjacent
/// pairs until one run is left. Uses no recursion, so input size is bounded
/// by memory only.
#[derive(Debug, Default, Clone, Copy)]
pub struct BottomUpMergeSort;

impl<T> SortStrategy<T> for BottomUpMergeSort
where
    T: Clone,
{
    fn name(&self) -> &'static str {
        "bottom_up_merge_sort"
    }

    fn sort(&self, data: &[T], c: &dyn Comparator<Item = T>) -> Vec<T> {
        let mut runs: Vec<Vec<T>> = data.iter().cloned().map(|item| vec![item]).collect();

        while runs.len() > 1 {
            let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
            let mut pending = runs.into_iter();
            while let Some(left) = pending.next() {
                match pending.next() {
                    Some(right) => merged.push(merge(left, right, c)),
                    None => merged.push(left),
                }
            }
            runs = merged;
        }

        runs.pop().unwrap_or_default()
    }
}
