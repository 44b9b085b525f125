#[macro_use]
extern crate criterion;
extern crate zoombrot;

use criterion::Criterion;
use zoombrot::{render_frame, render_range, FrameRange};

fn bench_render_frame(c: &mut Criterion) {
    c.bench_function("render_frame 64x64", |b| {
        let mut out = vec![0u8; 64 * 64];
        b.iter(|| render_frame(0, 64, &mut out))
    });
}

fn bench_render_range(c: &mut Criterion) {
    c.bench_function("render_range 8 frames of 32x32", |b| {
        let range = FrameRange::assign(8, 1, 0).unwrap();
        b.iter(|| render_range(&range, 32))
    });
}

criterion_group!(benches, bench_render_frame, bench_render_range);
criterion_main!(benches);
