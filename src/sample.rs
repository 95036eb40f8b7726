use std::{cmp, fmt};

use crate::comparator::Comparator;

const DOLLAR_RATE: u64 = 70;
const EURO_RATE: u64 = 80;

/// A balance held in three currencies. Used as sample payload for the demo
/// and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BankAccount {
    pub dollar: u32,
    pub euro: u32,
    pub rub: u32,
}

impl BankAccount {
    pub fn new(dollar: u32, euro: u32, rub: u32) -> Self {
        Self { dollar, euro, rub }
    }

    /// Balance converted to roubles.
    pub fn total(&self) -> u64 {
        self.dollar as u64 * DOLLAR_RATE + self.euro as u64 * EURO_RATE + self.rub as u64
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}$, {}€, {}₽ : {}₽",
            self.dollar,
            self.euro,
            self.rub,
            self.total()
        )
    }
}

/// Puts the account with the larger total first.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankAccountComparator;

impl Comparator for BankAccountComparator {
    type Item = BankAccount;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        a.total().cmp(&b.total())
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering::*;

    use itertools::Itertools;

    use crate::{Container, comparator::Comparator, strategy::prelude::*};

    use super::{BankAccount, BankAccountComparator};

    #[test]
    fn test_total() {
        assert_eq!(BankAccount::new(0, 0, 0).total(), 0);
        assert_eq!(BankAccount::new(1, 1, 1).total(), 151);
        assert_eq!(BankAccount::new(99, 199, 999).total(), 6930 + 15920 + 999);
    }

    #[test]
    fn test_display() {
        assert_eq!(BankAccount::new(2, 3, 40).to_string(), "2$, 3€, 40₽ : 420₽");
    }

    #[test]
    fn test_compare() {
        let c = BankAccountComparator;
        // 8 dollars and 7 euros are both 560 roubles
        assert_eq!(
            c.compare(&BankAccount::new(8, 0, 0), &BankAccount::new(0, 7, 0)),
            Equal
        );
        assert_eq!(
            c.compare(&BankAccount::new(1, 0, 0), &BankAccount::new(0, 0, 69)),
            Greater
        );
        assert_eq!(
            c.compare(&BankAccount::new(0, 0, 79), &BankAccount::new(0, 1, 0)),
            Less
        );
    }

    #[test]
    fn test_sort_accounts() -> anyhow::Result<()> {
        let mut container = Container::new();
        container.add(BankAccount::new(0, 0, 100));
        container.add(BankAccount::new(1, 0, 0));
        container.add(BankAccount::new(0, 1, 0));
        container.add(BankAccount::new(0, 0, 5));

        container.set_strategy(MergeSort);
        container.execute_sort(&BankAccountComparator)?;

        let totals = container.iter().map(BankAccount::total).collect_vec();
        assert_eq!(totals, vec![100, 80, 70, 5]);
        Ok(())
    }
}
