use astrochart::layout::CollisionResolver;
use astrochart::{AstroChart, ChartData, Planet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_chart() -> ChartData {
    let longitudes = [
        ("sun", 280.4),
        ("moon", 282.1),
        ("mercury", 279.0),
        ("venus", 301.7),
        ("mars", 45.2),
        ("jupiter", 47.9),
        ("saturn", 355.0),
        ("uranus", 2.3),
        ("neptune", 356.8),
        ("pluto", 250.1),
    ];
    ChartData::new(
        longitudes
            .iter()
            .map(|(name, lon)| Planet::new(*name, *lon))
            .collect(),
        (0..12).map(|i| (95.0 + i as f64 * 30.0) % 360.0).collect(),
    )
}

fn bench_render(c: &mut Criterion) {
    let chart = AstroChart::default();
    let data = sample_chart();

    c.bench_function("render", |b| b.iter(|| chart.render(black_box(&data))));
}

fn bench_resolve_collisions(c: &mut Criterion) {
    let resolver = CollisionResolver::new(5.0, 30.0);
    let angles: Vec<f64> = (0..20).map(|i| (i as f64) * 1.7).collect();

    c.bench_function("resolve_collisions", |b| {
        b.iter(|| resolver.resolve(black_box(&angles)))
    });
}

criterion_group!(benches, bench_render, bench_resolve_collisions);
criterion_main!(benches);
