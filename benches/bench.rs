use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sortkit::{
    Container,
    comparator::prelude::*,
    options::SampleOptions,
    sample::{BankAccount, BankAccountComparator},
    strategy::prelude::*,
};

fn strategies() -> Vec<SharedStrategy<u64>> {
    vec![
        std::sync::Arc::new(MergeSort),
        std::sync::Arc::new(BottomUpMergeSort),
    ]
}

fn sort_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random");
    for size in [1_000, 10_000, 100_000] {
        let data: Vec<u64> = (0..size).map(|_| rand::random()).collect();
        let cmp = DefaultComparator::<u64>::new();

        for strategy in strategies() {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &data,
                |b, data| {
                    b.iter(|| strategy.sort(black_box(data), &cmp));
                },
            );
        }
    }
    group.finish();
}

fn sort_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_presorted");
    let data: Vec<u64> = (0..100_000).collect();
    let cmp = ReverseComparator::new(DefaultComparator::<u64>::new());

    for strategy in strategies() {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.sort(black_box(&data), &cmp));
        });
    }
    group.finish();
}

fn container_accounts(c: &mut Criterion) {
    let accounts = SampleOptions::new()
        .count(10_000)
        .seed(0)
        .build()
        .expect("valid sample options")
        .generate();

    c.bench_function("container_bank_accounts", |b| {
        b.iter(|| {
            let mut container: Container<BankAccount> = accounts.iter().copied().collect();
            container.set_strategy(MergeSort);
            container
                .execute_sort(&BankAccountComparator)
                .expect("strategy is set");
            black_box(container.len())
        });
    });
}

criterion_group!(benches, sort_random, sort_presorted, container_accounts);
criterion_main!(benches);
