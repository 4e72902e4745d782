//! Performance benchmarks for docindex

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use docindex::output::{Schema, Sheet};
use docindex::test_utils::{TestTree, wide_tree};
use docindex::tree::{WalkerConfig, collect, compare_names, sort_entries};
use docindex::{IndexOptions, LocalSource, MemorySource, NodeSource, generate, render};

const SEPARATOR: &str = " > ";

fn create_local_tree(breadth: usize, files: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..breadth {
        for j in 0..files {
            tree.add_file(&format!("folder {}/file {}.txt", i, j), "content");
        }
    }
    tree
}

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");
    let config = WalkerConfig::default();

    for (name, depth, breadth, files) in [
        ("small_3x3", 3, 3, 3),
        ("medium_4x5", 4, 5, 5),
        ("wide_2x30", 2, 30, 10),
    ] {
        let source = MemorySource::new(wide_tree(depth, breadth, files));
        group.bench_function(name, |b| {
            b.iter(|| collect(&source, source.root(), black_box(&config), SEPARATOR).unwrap())
        });
    }
    group.finish();
}

fn bench_local_collect(c: &mut Criterion) {
    let tree = create_local_tree(20, 20);
    let source = LocalSource::new();
    let root = source.resolve(&tree.path().to_string_lossy()).unwrap();
    let config = WalkerConfig::default();

    c.bench_function("local_collect_400_files", |b| {
        b.iter(|| collect(&source, black_box(&root), &config, SEPARATOR).unwrap())
    });
}

fn bench_sort(c: &mut Criterion) {
    let source = MemorySource::new(wide_tree(4, 5, 5));
    let mut entries =
        collect(&source, source.root(), &WalkerConfig::default(), SEPARATOR).unwrap();
    entries.reverse();

    c.bench_function("sort_entries", |b| {
        b.iter(|| sort_entries(black_box(entries.clone()), SEPARATOR))
    });
}

fn bench_compare_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_names");
    group.bench_function("ascii", |b| {
        b.iter(|| {
            compare_names(
                black_box("Reports > 2024 > budget.xlsx"),
                black_box("Reports > 2024 > Budget.xlsx"),
            )
        })
    });
    group.bench_function("accented", |b| {
        b.iter(|| {
            compare_names(
                black_box("Données > résumé.pdf"),
                black_box("Donnees > resume.pdf"),
            )
        })
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let source = MemorySource::new(wide_tree(4, 5, 5));
    let entries = collect(&source, source.root(), &WalkerConfig::default(), SEPARATOR).unwrap();

    let mut group = c.benchmark_group("render");
    group.bench_function("delimited", |b| {
        b.iter(|| render(black_box(&entries), SEPARATOR, Schema::Delimited))
    });
    group.bench_function("per_level", |b| {
        b.iter(|| render(black_box(&entries), SEPARATOR, Schema::PerLevel))
    });
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let source = MemorySource::new(wide_tree(4, 5, 5));
    let options = IndexOptions::default();

    c.bench_function("generate_to_sheet", |b| {
        b.iter(|| {
            let mut sheet = Sheet::new("Document Index");
            generate(&source, &mut sheet, source.root(), black_box(&options)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_collect,
    bench_local_collect,
    bench_sort,
    bench_compare_names,
    bench_render,
    bench_generate,
);
criterion_main!(benches);
