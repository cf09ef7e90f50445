use std::hint::black_box;

use autognuplot::stats::{self, HistogramOptions};
use autognuplot::{AutoGnuplotFigure, Column, PlotOptions};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::TempDir;

/// Synthetic x/y columns of the given length
fn generate_columns(num_points: usize) -> Vec<Column> {
    let x: Vec<f64> = (0..num_points).map(|i| i as f64 * 0.01).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin() * (-v * 0.1).exp()).collect();
    vec![x.into(), y.into()]
}

fn build_figure(dir: &TempDir, num_plots: usize, columns: &[Column]) -> AutoGnuplotFigure {
    let folder = dir.path().join("bench_fig");
    let mut figure =
        AutoGnuplotFigure::new(folder.to_str().unwrap(), "bench_fig").unwrap();
    for i in 0..num_plots {
        figure
            .plot_with("u 1:2 w l", columns, PlotOptions::label(format!("series {}", i)))
            .unwrap();
    }
    figure
}

fn bench_script_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("script_assembly");

    for num_plots in [1, 10, 100].iter() {
        let dir = TempDir::new().unwrap();
        let columns = generate_columns(100);
        let figure = build_figure(&dir, *num_plots, &columns);

        group.throughput(Throughput::Elements(*num_plots as u64));
        group.bench_with_input(BenchmarkId::new("assemble", num_plots), num_plots, |b, _| {
            b.iter(|| black_box(&figure).script_content());
        });
    }

    group.finish();
}

fn bench_dataset_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_writing");

    for num_points in [1_000, 10_000, 100_000].iter() {
        let columns = generate_columns(*num_points);

        group.throughput(Throughput::Elements(*num_points as u64));
        group.bench_with_input(BenchmarkId::new("plot", num_points), num_points, |b, _| {
            b.iter_with_setup(
                || TempDir::new().unwrap(),
                |dir| {
                    let folder = dir.path().join("fig");
                    let mut figure =
                        AutoGnuplotFigure::new(folder.to_str().unwrap(), "fig").unwrap();
                    figure.plot("u 1:2 w l t \"d\"", black_box(&columns)).unwrap();
                },
            );
        });
    }

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for num_points in [1_000, 10_000, 100_000].iter() {
        let data: Vec<f64> = (0..*num_points).map(|i| ((i * 31) % 997) as f64).collect();
        let options = HistogramOptions { bins: 50, ..Default::default() };

        group.throughput(Throughput::Elements(*num_points as u64));
        group.bench_with_input(BenchmarkId::new("bin", num_points), num_points, |b, _| {
            b.iter(|| stats::histogram(black_box(&data), black_box(&options)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_script_assembly, bench_dataset_writing, bench_histogram);
criterion_main!(benches);
