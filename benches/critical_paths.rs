//! Criterion benchmarks for WishCraft critical paths
//!
//! Composition runs on every selection change, so it is the path that matters:
//! - Composer: every occasion template against the built-in catalog
//! - Composer: festival lookup in a catalog with many user festivals
//! - Registry: slug derivation for festival labels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wishcraft::catalog::{CatalogOption, Occasion};
use wishcraft::composer::{compose, compose_lenient};
use wishcraft::models::{FestivalDraft, SelectionState};
use wishcraft::registry::{slugify, FestivalCatalog};

fn make_catalog(user_count: usize) -> FestivalCatalog {
    let user = (0..user_count).map(|i| {
        FestivalDraft::new(format!("Festival {}", i))
            .with_palette(["#FFB300", "#6D4C41", "#2E7D32"])
            .with_motifs(["lamps", "flowers"])
            .into_festival(format!("festival-{}", i))
    });
    FestivalCatalog::with_user(user)
}

fn bench_compose_occasions(c: &mut Criterion) {
    let catalog = FestivalCatalog::builtin();
    let mut group = c.benchmark_group("compose");

    for occasion in Occasion::ALL {
        let mut state = SelectionState::for_occasion(*occasion);
        state.name = "Aarav".to_string();
        state.partner_name = "Anaya".to_string();
        state.brand = "Acme".to_string();
        group.bench_with_input(BenchmarkId::from_parameter(occasion.id()), &state, |b, state| {
            b.iter(|| compose(black_box(state), black_box(&catalog)))
        });
    }

    group.finish();
}

fn bench_compose_large_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_user_festivals");

    for count in [10, 100, 1000] {
        let catalog = make_catalog(count);
        let mut state = SelectionState::for_occasion(Occasion::Festival);
        state.festival_id = format!("festival-{}", count - 1);
        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, state| {
            b.iter(|| compose_lenient(black_box(state), black_box(&catalog)))
        });
    }

    group.finish();
}

fn bench_slugify(c: &mut Criterion) {
    c.bench_function("slugify", |b| {
        b.iter(|| slugify(black_box("  Makar Sankranti / Pongal -- Harvest Festival!! ")))
    });
}

criterion_group!(benches, bench_compose_occasions, bench_compose_large_catalog, bench_slugify);
criterion_main!(benches);
