use crate::comparator::Comparator;

use super::{SortStrategy, merge};

/// Top-down recursive merge sort.
///
/// The left half takes `len / 2` elements, the right half the rest. Recursion
/// depth is `log2(len)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSort;

impl<T> SortStrategy<T> for MergeSort
where
    T: Clone,
{
    fn name(&self) -> &'static str {
        "merge_sort"
    }

    fn sort(&self, data: &[T], c: &dyn Comparator<Item = T>) -> Vec<T> {
        if data.len() < 2 {
            return data.to_vec();
        }

        let middle = data.len() / 2;
        let left = self.sort(&data[..middle], c);
        let right = self.sort(&data[middle..], c);
        merge(left, right, c)
    }
}
