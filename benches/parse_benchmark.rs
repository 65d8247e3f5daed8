use bagit::{parse_key_value, parse_manifest, read_bag};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write as _;
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

/// Manifest text with `count` lines
fn manifest_text(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        writeln!(text, "{:064x}  data/dir{}/file{}.bin", i, i % 16, i).unwrap();
    }
    text
}

fn bench_manifest_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_parse");

    for count in [100, 10_000, 100_000].iter() {
        let text = manifest_text(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| {
                let manifest = parse_manifest(
                    Path::new("manifest-sha256.txt"),
                    text.lines(),
                    Path::new("/bag"),
                )
                .unwrap();
                black_box(manifest);
            });
        });
    }

    group.finish();
}

fn bench_key_value_parsing(c: &mut Criterion) {
    let mut text = String::new();
    for i in 0..200 {
        writeln!(text, "Field-{}: value {}", i, i).unwrap();
        writeln!(text, "  folded continuation {}", i).unwrap();
    }

    c.bench_function("bag_info_parse", |b| {
        b.iter(|| {
            let map = parse_key_value(Path::new("bag-info.txt"), text.lines(), ":").unwrap();
            black_box(map);
        });
    });
}

fn bench_read_bag(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(
        root.join("bagit.txt"),
        "BagIt-Version: 1.0\nTag-File-Character-Encoding: UTF-8\n",
    )
    .unwrap();
    fs::write(root.join("manifest-sha256.txt"), manifest_text(10_000)).unwrap();
    fs::write(root.join("bag-info.txt"), "Source-Organization: Bench\n").unwrap();

    c.bench_function("read_bag_10k", |b| {
        b.iter(|| black_box(read_bag(root).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_manifest_parsing,
    bench_key_value_parsing,
    bench_read_bag
);
criterion_main!(benches);
