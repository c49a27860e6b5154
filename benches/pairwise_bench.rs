use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use matcher::{compare_all, DocumentProfile, MatchConfig};
use normalize::TokenSet;

fn synthetic_profiles(count: usize) -> Vec<DocumentProfile> {
    let vocabulary = [
        "water", "commerce", "maps", "healthcare", "energy", "education", "transit", "library",
        "radio", "museum", "justice", "census",
    ];
    (0..count)
        .map(|i| {
            let pick = |offset: usize| vocabulary[(i + offset) % vocabulary.len()].to_string();
            let name: TokenSet = [pick(0), pick(1)].into_iter().collect();
            let title: TokenSet = [pick(0), pick(2), format!("doc{i}")].into_iter().collect();
            let heading: TokenSet = [pick(0), pick(3)].into_iter().collect();
            let description: TokenSet =
                [pick(1), pick(4), format!("body{i}")].into_iter().collect();
            DocumentProfile {
                id: format!("doc-{i:04}"),
                name,
                title,
                heading,
                description,
            }
        })
        .collect()
}

fn bench_compare_all(c: &mut Criterion) {
    let cfg = MatchConfig::default();
    let sequential = MatchConfig {
        use_parallel: false,
        ..MatchConfig::default()
    };
    let mut group = c.benchmark_group("compare_all");

    for count in [50, 200, 800].iter() {
        let profiles = synthetic_profiles(*count);
        group.throughput(Throughput::Elements((count * (count - 1) / 2) as u64));
        group.bench_function(format!("parallel_docs_{count}"), |b| {
            b.iter(|| compare_all(black_box(&profiles), black_box(&cfg)).expect("compare"))
        });
        group.bench_function(format!("sequential_docs_{count}"), |b| {
            b.iter(|| compare_all(black_box(&profiles), black_box(&sequential)).expect("compare"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare_all);
criterion_main!(benches);
