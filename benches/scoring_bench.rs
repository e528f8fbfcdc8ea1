use criterion::{criterion_group, criterion_main, Criterion};
use digitforge::categorizer::{Categorizer, Tier};
use digitforge::config::ScoringConfig;
use digitforge::generator::{Generator, SearchRequest};
use digitforge::number::DigitString;
use digitforge::presets::CulturalPreset;
use digitforge::scorer::score;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let cfg = ScoringConfig::default().apply_preset(CulturalPreset::Global);
    let numbers: Vec<DigitString> = ["1212", "90210", "867530", "1357913", "73915284"]
        .iter()
        .map(|s| DigitString::parse(s).expect("valid number"))
        .collect();

    c.bench_function("score (5 numbers, global preset)", |b| {
        b.iter(|| {
            for n in &numbers {
                black_box(score(black_box(n), &cfg));
            }
        })
    });

    let categorizer = Categorizer::new(cfg.clone());
    let batch: Vec<String> = (0..10_000u32).map(|i| format!("{:08}", i * 9973)).collect();
    c.bench_function("categorize_batch (10k)", |b| {
        b.iter(|| categorizer.categorize_batch(black_box(&batch)))
    });

    let generator = Generator::new(cfg);
    let req = SearchRequest::new(6, Tier::Gold, 50).with_seed(1);
    c.bench_function("generate (6-digit gold, 50)", |b| {
        b.iter(|| generator.collect(black_box(&req)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
