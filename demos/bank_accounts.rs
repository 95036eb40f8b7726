use sortkit::{
    Container, options::SampleOptions, sample::BankAccountComparator, strategy::prelude::*,
};
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "==============";

fn env_var<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => Ok(Some(v.parse()?)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut options = SampleOptions::new();
    if let Some(count) = env_var("SORTKIT_COUNT")? {
        options.count(count);
    }
    if let Some(seed) = env_var("SORTKIT_SEED")? {
        options.seed(seed);
    }
    let config = options.build()?;

    let mut container = Container::new();
    for account in config.generate() {
        container.add(account);
    }

    println!("{SEPARATOR}");
    println!("{container}");
    println!("{SEPARATOR}");

    container.set_strategy(MergeSort);
    container.execute_sort(&BankAccountComparator)?;

    println!("{container}");
    println!("{SEPARATOR}");

    Ok(())
}
