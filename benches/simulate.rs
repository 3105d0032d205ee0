use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{simulate, simulate_all, PageId, Policy};

/// Deterministic skewed stream: a linear congruential walk folded onto
/// `pages` ids, with every fourth reference drawn from a small hot set.
fn reference_stream(len: usize, pages: i64) -> Vec<PageId> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..len)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let id = if i % 4 == 0 {
                (state >> 33) as i64 % 4
            } else {
                (state >> 33) as i64 % pages
            };
            PageId::new(id)
        })
        .collect()
}

/// Each policy over streams of growing length.
fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulate");
    let capacity = 8;

    for &len in &[100usize, 1_000, 5_000] {
        let refs = reference_stream(len, 32);
        for policy in Policy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), format!("len{}_cap{}", len, capacity)),
                &refs,
                |b, refs| b.iter(|| simulate(policy, black_box(refs), capacity).map(|s| s.faults())),
            );
        }
    }

    group.finish();
}

/// All three policies over the same stream, as the CLI runs them.
fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulate All");

    for &capacity in &[3usize, 16, 64] {
        let refs = reference_stream(2_000, 128);
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &refs, |b, refs| {
            b.iter(|| simulate_all(black_box(refs), capacity).map(|c| c.runs().len()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_policies, bench_comparison);
criterion_main!(benches);
