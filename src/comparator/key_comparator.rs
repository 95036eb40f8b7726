use std::{cmp, fmt, marker::PhantomData};

use super::Comparator;

/// Compares elements by a quantity derived from each of them.
///
/// Elements whose keys are equal compare as `Equal`.
pub struct KeyComparator<T, K, F> {
    key: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K, F> KeyComparator<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    pub fn new(key: F) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<T, K, F> Comparator for KeyComparator<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K + Send + Sync,
{
    type Item = T;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

impl<T, K, F> Clone for KeyComparator<T, K, F>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, K, F> fmt::Debug for KeyComparator<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyComparator").finish_non_exhaustive()
    }
}
