use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmeans_testkit::{
    parse_report, write_points_to, AxisRange, ClusterGenerator, DistributionType, GeneratorConfig,
};
use std::fmt::Write;
use std::time::Duration;

fn bench_config(n_points: usize, distribution: DistributionType) -> GeneratorConfig {
    GeneratorConfig::new(8, n_points)
        .with_distribution(distribution)
        .with_spread(2.0)
        .with_x_range(AxisRange::new(-1_000, 1_000))
        .with_y_range(AxisRange::new(-1_000, 1_000))
        .with_seed(Some(42))
}

fn benchmark_generate_varying_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_points");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for n_points in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*n_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_points),
            n_points,
            |b, &n_points| {
                let generator =
                    ClusterGenerator::new(bench_config(n_points, DistributionType::Gaussian));
                b.iter(|| black_box(generator.generate().unwrap()));
            },
        );
    }
    group.finish();
}

fn benchmark_generate_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_distribution");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_points = 50_000;
    for dist in DistributionType::ALL {
        group.throughput(Throughput::Elements(n_points as u64));
        group.bench_function(dist.name(), |b| {
            let generator = ClusterGenerator::new(bench_config(n_points, dist));
            b.iter(|| black_box(generator.generate().unwrap()));
        });
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    group.sample_size(10);

    let dataset = ClusterGenerator::new(bench_config(100_000, DistributionType::Uniform))
        .generate()
        .unwrap();
    group.throughput(Throughput::Elements(dataset.len() as u64));
    group.bench_function("write_100k", |b| {
        let mut buf = Vec::with_capacity(dataset.len() * 12);
        b.iter(|| {
            buf.clear();
            write_points_to(&mut buf, &black_box(dataset.points()).view()).unwrap();
        });
    });
    group.finish();
}

fn benchmark_parse_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_report");
    group.sample_size(10);

    let mut report = String::from("K-means report\n\n");
    for cluster in 0..16 {
        writeln!(report, "**Cluster {} Center : ({}.5, {}.0)", cluster, cluster * 10, cluster).unwrap();
        for row in 0..100 {
            let line: Vec<String> = (0..10)
                .map(|i| format!("({},{})", cluster * 10 + i, row))
                .collect();
            writeln!(report, "{}", line.join(" ")).unwrap();
        }
    }

    group.throughput(Throughput::Bytes(report.len() as u64));
    group.bench_function("16_clusters_16k_points", |b| {
        b.iter(|| black_box(parse_report(black_box(&report)).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_generate_varying_points,
    benchmark_generate_distributions,
    benchmark_serialize,
    benchmark_parse_report,
);

criterion_main!(benches);
