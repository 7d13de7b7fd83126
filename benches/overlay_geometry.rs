// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for crop-frame geometry and preview rendering.
//!
//! Geometry is recomputed on every size change with no caching; these
//! benchmarks keep that decision honest.

use criterion::{criterion_group, criterion_main, Criterion};
use penumbra::media::render;
use penumbra::ui::overlay::geometry;
use std::hint::black_box;

fn bench_handle_rects(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_geometry");

    group.bench_function("handle_rects", |b| {
        b.iter(|| {
            let rects = geometry::handle_rects(black_box(iced::Size::new(1280.0, 720.0)));
            black_box(rects);
        });
    });

    group.bench_function("third_guides", |b| {
        b.iter(|| {
            let guides = geometry::third_guides(black_box(iced::Size::new(1280.0, 720.0)));
            black_box(guides);
        });
    });

    group.finish();
}

fn bench_vignette_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_render");
    group.sample_size(20);

    let image = image_rs::DynamicImage::ImageRgba8(image_rs::RgbaImage::from_pixel(
        640,
        480,
        image_rs::Rgba([180, 180, 180, 255]),
    ));

    group.bench_function("apply_vignette_640x480", |b| {
        b.iter(|| {
            let out = render::apply_vignette(black_box(&image), black_box(1.0));
            black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_handle_rects, bench_vignette_render);
criterion_main!(benches);
