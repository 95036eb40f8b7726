use std::cmp;

mod default_comparator;
mod fn_comparator;
mod key_comparator;
mod reverse_comparator;

pub mod prelude {
    #![allow(unused)]

    pub use super::{
        Comparator, default_comparator::DefaultComparator, fn_comparator::FnComparator,
        key_comparator::KeyComparator, reverse_comparator::ReverseComparator,
    };
}

/// Decides which of two elements goes first.
///
/// `Greater` keeps `a` ahead of `b`, `Less` puts `b` first and `Equal` marks a
/// tie. A comparison on a natural ascending quantity therefore yields a
/// descending sort; wrap it in `ReverseComparator` for ascending output.
pub trait Comparator: Send + Sync {
    type Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering;
}

impl<C> Comparator for &C
where
    C: Comparator + ?Sized,
{
    type Item = C::Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        (**self).compare(a, b)
    }
}
