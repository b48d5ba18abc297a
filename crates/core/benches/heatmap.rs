use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ternary::{
    sample_function, HeatmapOptions, RecordingCanvas, RenderConfig,
    TernaryRenderer,
};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap");
    group.sample_size(10);

    let renderer = TernaryRenderer::new(RenderConfig::default()).unwrap();
    let options = HeatmapOptions::default();
    let f = |point: ternary::Barycentric| point.a * point.b * point.c;
    let data = sample_function(f, 100, true);

    group.bench_function("sample", |b| {
        b.iter(|| sample_function(f, black_box(100), true))
    });
    group.bench_function("draw", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            renderer
                .heatmap(&mut canvas, black_box(&data), 100, &options)
                .unwrap();
            canvas
        })
    });
    #[cfg(feature = "svg")]
    group.bench_function("svg", |b| {
        b.iter(|| renderer.render_heatmap_svg(black_box(&data), 100, &options))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
