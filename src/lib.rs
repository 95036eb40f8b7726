mod container;

pub mod comparator;
pub mod error;
pub mod options;
pub mod sample;
pub mod strategy;

#[cfg(test)]
mod test_utils;

pub use container::Container;
