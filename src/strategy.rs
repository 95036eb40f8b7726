use std::sync::Arc;

use crate::comparator::Comparator;

mod bottom_up_merge_sort;
mod merge_sort;

pub mod prelude {
    #![allow(unused)]

    pub use super::{
        SharedStrategy, SortStrategy, bottom_up_merge_sort::BottomUpMergeSort,
        merge_sort::MergeSort,
    };
}

/// A sorting algorithm that can be plugged into a `Container`.
///
/// Implementations never touch `data`; the sorted elements are returned as a
/// new vector holding clones of the input.
pub trait SortStrategy<T>: Send + Sync {
    fn name(&self) -> &'static str;

    fn sort(&self, data: &[T], c: &dyn Comparator<Item = T>) -> Vec<T>;
}

pub type SharedStrategy<T> = Arc<dyn SortStrategy<T>>;

/// Merges two runs. The left head is emitted only when it compares strictly
/// greater than the right head, so ties drain the right run first.
pub(crate) fn merge<T>(left: Vec<T>, right: Vec<T>, c: &dyn Comparator<Item = T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => c.compare(l, r).is_gt(),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }

    result.extend(left);
    result.extend(right);
    result
}
