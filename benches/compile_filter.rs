//! Benchmarks for filter compilation and MongoDB rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use stash_search::filter::{Bounds, ModifierFilter};
use stash_search::mongodb::to_query;
use stash_search::{FilterCompiler, FilterInput};

/// A form with most fixed fields set.
fn full_input() -> FilterInput {
    FilterInput {
        currency_name: Some("Chaos Orb".into()),
        price: Bounds::between(1.0, 20.0),
        name: Some("Tabula".into()),
        item_type: Some("Body Armour".into()),
        type_line: Some("Simple Robe".into()),
        league: Some("Standard".into()),
        corrupted: Some(true),
        identified: Some(true),
        item_level: Bounds::between(60, 86),
        socket_count: Bounds::at_least(6),
        armour: Bounds::at_least(100.0),
        quality: Bounds::at_most(20.0),
        physical_damage: Bounds::between(100.0, 200.0),
        str_sockets: Some(1),
        link_count: Bounds::at_least(5),
        ..Default::default()
    }
}

/// A form carrying only `count` modifier constraints.
fn modifier_input(count: usize) -> FilterInput {
    FilterInput {
        modifiers: (0..count)
            .map(|i| ModifierFilter::present(format!("+# to Modifier {}", i)).lower(i as f64))
            .collect(),
        ..Default::default()
    }
}

fn bench_compile(c: &mut Criterion) {
    let compiler = FilterCompiler::default();
    let mut group = c.benchmark_group("compile");

    let empty = FilterInput::default();
    group.bench_function("empty", |b| b.iter(|| compiler.compile(black_box(&empty))));

    let full = full_input();
    group.bench_function("all_fixed_fields", |b| {
        b.iter(|| compiler.compile(black_box(&full)))
    });

    for count in [1, 10, 50] {
        let input = modifier_input(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("modifiers", count), &input, |b, input| {
            b.iter(|| compiler.compile(black_box(input)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let compiler = FilterCompiler::default();
    let mut group = c.benchmark_group("render_mongo");

    let predicates = compiler.compile(&full_input()).unwrap_or_default();
    group.bench_function("all_fixed_fields", |b| {
        b.iter(|| to_query(black_box(&predicates)))
    });

    let json = r#"{"league": "Standard", "ilvl": {"min": 80}, "mods": [{"name": "+# to maximum Life", "lower": 70}]}"#;
    group.bench_function("json_to_query", |b| {
        b.iter(|| {
            let input = FilterInput::from_json(black_box(json)).unwrap_or_default();
            compiler.compile(&input).map(|p| to_query(&p))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compile, bench_render);
criterion_main!(benches);
