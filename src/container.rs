use std::{fmt, sync::Arc};

use crate::{
    comparator::Comparator,
    error::{Error, Result},
    strategy::{SharedStrategy, SortStrategy},
};

/// An ordered sequence sorted in place by a pluggable strategy.
pub struct Container<T> {
    items: Vec<T>,
    strategy: Option<SharedStrategy<T>>,
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            strategy: None,
        }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: SortStrategy<T> + 'static,
    {
        self.set_shared_strategy(Arc::new(strategy));
    }

    pub fn set_shared_strategy(&mut self, strategy: SharedStrategy<T>) {
        tracing::debug!("Sort strategy set to {}", strategy.name());
        self.strategy = Some(strategy);
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    /// Sorts the contents with the current strategy.
    ///
    /// The contents are replaced only once the strategy has returned, so a
    /// comparator that panics leaves them as they were.
    pub fn execute_sort<C>(&mut self, c: &C) -> Result<()>
    where
        C: Comparator<Item = T>,
    {
        let Some(strategy) = self.strategy.as_ref() else {
            tracing::warn!("Sort requested on {} items without a strategy", self.items.len());
            return Err(Error::NoStrategy);
        };

        tracing::debug!("Sorting {} items with {}", self.items.len(), strategy.name());
        let sorted = strategy.sort(&self.items, c);
        debug_assert_eq!(sorted.len(), self.items.len());
        self.items = sorted;
        tracing::debug!("Sort with {} finished", strategy.name());

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Container<T>
where
    T: Clone,
{
    /// Returns a container with its own copy of the elements. The strategy is
    /// shared between both.
    pub fn duplicate(&self) -> Self {
        Self {
            items: self.items.clone(),
            strategy: self.strategy.clone(),
        }
    }
}

impl<T> Clone for Container<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            strategy: None,
        }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Container<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("items", &self.items)
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl<T> fmt::Display for Container<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}]", item)?;
        }
        Ok(())
    }
}
