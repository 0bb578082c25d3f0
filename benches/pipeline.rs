//! Benchmarks for the asciify pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::Rgba;

use asciify::batch::{BatchPipeline, ConversionJob};
use asciify::parser::parse_colour;
use asciify::render::{sample_block, AsciiRenderer, PixelGrid, RenderOptions};

/// Diagonal gradient so every ramp bucket gets exercised.
fn gradient(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let v = (((x + y) * 65535) / (width + height).max(1)) as u16;
        Rgba([v, v / 2, u16::MAX - v, u16::MAX])
    })
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for input in ["#FFCF75", "#fc7", "rgb(255, 207, 117)", "rgba(12, 34, 56, 128)"] {
        group.bench_with_input(BenchmarkId::new("parse_colour", input), input, |b, s| {
            b.iter(|| parse_colour(black_box(s)).unwrap())
        });
    }

    group.bench_function("parse_colour_error", |b| {
        b.iter(|| parse_colour(black_box("rgb(0, 12, 400)")).unwrap_err())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let renderer = AsciiRenderer::new(RenderOptions::default()).unwrap();

    let block = gradient(10, 10);
    group.bench_function("sample_block", |b| {
        b.iter(|| sample_block(black_box(&block), 0, 0, 10))
    });

    for (w, h) in [(64, 64), (640, 480), (1920, 1080)] {
        let grid = gradient(w, h);
        let label = format!("{w}x{h}");

        group.bench_with_input(BenchmarkId::new("glyphs", &label), &grid, |b, grid| {
            b.iter(|| renderer.glyphs(black_box(grid)))
        });

        group.bench_with_input(BenchmarkId::new("render", &label), &grid, |b, grid| {
            b.iter(|| renderer.render(black_box(grid)))
        });
    }

    group.finish();
}

// -- Batch benchmarks --

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let renderer = AsciiRenderer::new(RenderOptions::default()).unwrap();
    let grid = gradient(200, 200);

    let jobs: Vec<ConversionJob> = (0..20)
        .map(|i| ConversionJob::new(format!("in/{i}.png"), format!("out/{i}.png")))
        .collect();

    // In-memory work only, so this measures fan-out overhead plus rendering
    for workers in [1, 5] {
        group.bench_with_input(BenchmarkId::new("render_20", workers), &workers, |b, &n| {
            let pipeline = BatchPipeline::new(n);
            b.iter(|| {
                pipeline.run(jobs.clone(), |job| {
                    black_box(renderer.render(&grid));
                    Ok(job.output.clone())
                })
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_rendering, bench_batch);
criterion_main!(benches);
