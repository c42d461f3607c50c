use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use isainfo::render::{OnikiriRenderer, Renderer, RustRenderer};
use isainfo::{build, load, DecodeTable};

const STRAIGHT_V2: &str = include_str!("../tests/data/straight_v2.csv");

fn bench_load_and_build(c: &mut Criterion) {
    c.bench_function("load_straight_v2", |b| b.iter(|| load(black_box(STRAIGHT_V2))));

    c.bench_function("load_and_build_straight_v2", |b| {
        b.iter(|| build(load(black_box(STRAIGHT_V2)).unwrap()))
    });
}

fn bench_lookups(c: &mut Criterion) {
    let table = DecodeTable::from_source(STRAIGHT_V2).unwrap();
    let names: Vec<String> = table.all_names().map(str::to_string).collect();

    c.bench_function("lookup_by_name", |b| {
        b.iter(|| {
            for name in &names {
                black_box(table.lookup(black_box(name)));
            }
        })
    });

    c.bench_function("lookup_by_opcode_value", |b| {
        b.iter(|| {
            for raw in 0..table.len() as u64 {
                black_box(table.lookup_by_opcode_value(black_box(raw)));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let table = DecodeTable::from_source(STRAIGHT_V2).unwrap();

    c.bench_function("render_rust", |b| {
        b.iter(|| RustRenderer::default().render_to_string(black_box(&table)).unwrap())
    });
    c.bench_function("render_onikiri", |b| {
        b.iter(|| OnikiriRenderer::default().render_to_string(black_box(&table)).unwrap())
    });
}

criterion_group!(benches, bench_load_and_build, bench_lookups, bench_render);
criterion_main!(benches);
