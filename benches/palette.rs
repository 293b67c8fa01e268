//! Benchmarks for the bitmix palette engine and XOR compositor.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bitmix::{xor_scroll, xor_static, Axis, BitPalette, Colour, ColourSpace, IndexPlane};

// -- Palette benchmarks --

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    let hsv = BitPalette::with_defaults(ColourSpace::Hsv).unwrap();
    let luv = BitPalette::with_defaults(ColourSpace::Luv).unwrap();

    group.bench_function("select_full_table_hsv", |b| {
        b.iter(|| {
            for value in 0..=255u8 {
                black_box(hsv.select(black_box(value)));
            }
        })
    });

    // Nearest is the per-pixel quantization cost: one O(256) scan.
    group.bench_function("nearest_hsv", |b| {
        b.iter(|| hsv.nearest(black_box(Colour::new(180, 64, 200))))
    });

    group.bench_function("nearest_luv", |b| {
        b.iter(|| luv.nearest(black_box(Colour::new(180, 64, 200))))
    });

    group.finish();
}

// -- Compositing benchmarks --

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    let a = IndexPlane::new(256, 256, (0..256 * 256).map(|i| i as u8).collect());
    let b = IndexPlane::new(256, 256, (0..256 * 256).map(|i| (i * 7) as u8).collect());

    group.bench_function("xor_static_256x256", |bench| {
        bench.iter(|| xor_static(black_box(&[a.clone(), b.clone()])).unwrap())
    });

    group.bench_function("xor_scroll_vertical_256x256", |bench| {
        bench.iter(|| xor_scroll(black_box(&[a.clone(), b.clone()]), Axis::Vertical).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_palette, bench_compose);
criterion_main!(benches);
