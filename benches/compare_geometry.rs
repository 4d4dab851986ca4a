// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_compare::domain::compare::{
    CompareSlider, ContainerRect, ImageSlot, KeyCommand, KeyboardSteps, PointerId, RevealFraction,
};
use std::hint::black_box;

fn laid_out_slider() -> CompareSlider {
    let mut slider = CompareSlider::default();
    slider.image_loaded(ImageSlot::Before);
    slider.image_loaded(ImageSlot::After);
    slider.on_container_resize(ContainerRect::new(20.0, 40.0, 1280.0, 720.0));
    slider
}

fn geometry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_geometry");
    let rect = ContainerRect::new(20.0, 40.0, 1280.0, 720.0);

    group.bench_function("fraction_at", |b| {
        b.iter(|| black_box(rect).fraction_at(black_box(517.5)));
    });

    group.bench_function("divider_offset", |b| {
        let fraction = RevealFraction::new(0.37);
        b.iter(|| black_box(rect).divider_offset(black_box(fraction)));
    });

    group.bench_function("keyboard_apply", |b| {
        let steps = KeyboardSteps::default();
        b.iter(|| {
            steps.apply(
                black_box(RevealFraction::new(0.5)),
                black_box(KeyCommand::Increase { large: true }),
            )
        });
    });

    group.finish();
}

fn drag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_drag");

    group.bench_function("drag_100_moves", |b| {
        b.iter(|| {
            let mut slider = laid_out_slider();
            slider.begin_drag(PointerId::Mouse, 20.0);
            for step in 0..100 {
                slider.on_pointer_move(PointerId::Mouse, black_box(20.0 + step as f32 * 12.8));
            }
            black_box(slider.end_drag())
        });
    });

    group.bench_function("resize_relock", |b| {
        let mut slider = laid_out_slider();
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let width = if wide { 1920.0 } else { 1280.0 };
            black_box(slider.on_container_resize(ContainerRect::new(20.0, 40.0, width, 720.0)))
        });
    });

    group.finish();
}

criterion_group!(benches, geometry_benchmark, drag_benchmark);
criterion_main!(benches);
