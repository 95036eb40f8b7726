use std::cmp;

use super::Comparator;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseComparator<C>
where
    C: Comparator,
{
    c: C,
}

impl<C> ReverseComparator<C>
where
    C: Comparator,
{
    pub fn new(c: C) -> Self {
        Self { c }
    }

    pub fn into_inner(self) -> C {
        self.c
    }
}

impl<C> Comparator for ReverseComparator<C>
where
    C: Comparator,
{
    type Item = C::Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        self.c.compare(a, b).reverse()
    }
}
