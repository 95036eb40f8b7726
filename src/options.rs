use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::{Error, Result},
    sample::BankAccount,
};

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub(crate) count: usize,

    pub(crate) max_dollar: u32,

    pub(crate) max_euro: u32,

    pub(crate) max_rub: u32,

    pub(crate) seed: Option<u64>,
}

#[derive(Debug)]
pub struct SampleOptions {
    count: usize,

    max_dollar: u32,

    max_euro: u32,

    max_rub: u32,

    seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            count: 13,
            max_dollar: 100,
            max_euro: 200,
            max_rub: 1000,
            seed: None,
        }
    }
}

impl SampleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts to generate
    pub fn count(&mut self, count: usize) -> &mut Self {
        self.count = count;
        self
    }

    /// Exclusive upper bound of the dollar balance
    pub fn max_dollar(&mut self, bound: u32) -> &mut Self {
        self.max_dollar = bound;
        self
    }

    /// Exclusive upper bound of the euro balance
    pub fn max_euro(&mut self, bound: u32) -> &mut Self {
        self.max_euro = bound;
        self
    }

    /// Exclusive upper bound of the rouble balance
    pub fn max_rub(&mut self, bound: u32) -> &mut Self {
        self.max_rub = bound;
        self
    }

    /// Fixed seed, for reproducible samples
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<SampleConfig> {
        for (name, bound) in [
            ("max_dollar", self.max_dollar),
            ("max_euro", self.max_euro),
            ("max_rub", self.max_rub),
        ] {
            if bound == 0 {
                return Err(Error::Config(format!("{name} must be greater than 0")));
            }
        }

        Ok(SampleConfig {
            count: self.count,
            max_dollar: self.max_dollar,
            max_euro: self.max_euro,
            max_rub: self.max_rub,
            seed: self.seed,
        })
    }
}

impl SampleConfig {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn generate(&self) -> Vec<BankAccount> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        tracing::debug!("Generating {} sample accounts", self.count);
        (0..self.count)
            .map(|_| {
                BankAccount::new(
                    rng.random_range(0..self.max_dollar),
                    rng.random_range(0..self.max_euro),
                    rng.random_range(0..self.max_rub),
                )
            })
            .collect()
    }
}
