use cadence_animation::{concatenate, Easing, KeyframeBuilder};
use cadence_core::{Color, Mat4};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_build(c: &mut Criterion) {
    let builder = KeyframeBuilder::new("transform")
        .easing(Easing::EaseOutElastic)
        .steps(240);

    c.bench_function("transform_240_steps", |b| {
        b.iter(|| {
            builder
                .transform(black_box(Mat4::IDENTITY), black_box(Mat4::scale(2.0, 2.0, 1.0)))
                .unwrap()
        })
    });

    let color = KeyframeBuilder::new("backgroundColor")
        .easing(Easing::CubicBezier(0.4, 0.0, 0.2, 1.0))
        .steps(60);

    c.bench_function("color_bezier_60_steps", |b| {
        b.iter(|| color.color(black_box(Color::RED), black_box(Color::BLUE)).unwrap())
    });
}

fn bench_concatenate(c: &mut Criterion) {
    let builder = KeyframeBuilder::new("opacity").steps(100);
    let tracks: Vec<_> = (0..8)
        .map(|i| builder.scalar(i as f64, (i + 1) as f64).unwrap())
        .collect();

    c.bench_function("concatenate_8x101", |b| {
        b.iter(|| concatenate(black_box(&tracks)).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_concatenate);
criterion_main!(benches);
