use criterion::{black_box, criterion_group, criterion_main, Criterion};
use coolerdash::{DeviceInfo, LcdConfig, LcdRenderer, SensorReading};
use coolerdash_types::{DisplayMode, ShapeOverride};

fn bench_dual(c: &mut Criterion) {
    let config = LcdConfig::default();
    let reading = SensorReading::new(54.0, 61.0, 29.4);
    let mut renderer = LcdRenderer::new();

    c.bench_function("dual_frame_240", |b| {
        b.iter(|| {
            let surface = renderer
                .render(black_box(&config), black_box(&reading))
                .unwrap();
            black_box(surface);
        })
    });
}

fn bench_circle(c: &mut Criterion) {
    let mut config = LcdConfig::default();
    config.display.width = 640;
    config.display.height = 640;
    config.display.mode = DisplayMode::Circle;
    config.display.shape = ShapeOverride::Auto;
    let reading = SensorReading::new(54.0, 61.0, 29.4);
    let mut renderer = LcdRenderer::with_device(DeviceInfo::new("NZXT Kraken Elite", 640, 640));

    c.bench_function("circle_frame_640", |b| {
        b.iter(|| {
            let surface = renderer
                .render(black_box(&config), black_box(&reading))
                .unwrap();
            black_box(surface);
        })
    });
}

criterion_group!(benches, bench_dual, bench_circle);
criterion_main!(benches);
