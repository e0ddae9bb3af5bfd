use guide::GuideTable;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn main() {
    divan::main();
}

fn random_cumulative(n: usize) -> Vec<(usize, f64)> {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut acum = 0.0;
    (0..n)
        .map(|i| {
            acum += rng.random_range(0.0..1.0);
            (i, acum)
        })
        .collect()
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn creation(bencher: divan::Bencher, n: usize) {
    bencher
        .with_inputs(|| random_cumulative(n))
        .bench_refs(|v| GuideTable::build(v.iter().copied(), 2 * v.len()));
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn locate(bencher: divan::Bencher, n: usize) {
    let entries = random_cumulative(n);
    let table = GuideTable::build(entries.iter().copied(), 2 * n).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    bencher.bench_local(|| {
        let u: f64 = rng.random();
        table.locate(
            u,
            |i| entries[i].1,
            |i| (i + 1 < entries.len()).then_some(i + 1),
        )
    });
}
