use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathtree::tree::{path_tree, ListOrder, PathTree};
use pathtree::{human_friendly_phrase, PathwayOptions, PathwaysPreparer};

/// Generates `width^depth` leaf paths such as `m0/m1/m2`.
fn generate_paths(width: usize, depth: usize) -> Vec<String> {
    let mut paths = vec![String::new()];
    for level in 0..depth {
        paths = paths
            .iter()
            .flat_map(|prefix| {
                (0..width).map(move |i| {
                    if prefix.is_empty() {
                        format!("n{level}_{i}")
                    } else {
                        format!("{prefix}/n{level}_{i}")
                    }
                })
            })
            .collect();
    }
    paths
}

fn build(paths: &[String]) -> PathTree<String, String> {
    path_tree(
        paths.to_vec(),
        |path: &String| path.split('/').map(String::from).collect(),
        |node, _| human_friendly_phrase(node.qualified_path()),
    )
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (width, depth) in [(10, 2), (10, 3), (4, 6)] {
        let paths = generate_paths(width, depth);
        group.bench_with_input(
            BenchmarkId::new("path_tree", format!("{width}x{depth}")),
            &paths,
            |b, paths| {
                b.iter(|| build(black_box(paths)));
            },
        );
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let paths = generate_paths(10, 3);
    let tree = build(&paths);
    let start = tree.select_path("n0_5/n1_5/n2_5").unwrap_or_else(|| tree.roots()[0]);

    group.bench_function("absolute", |b| {
        b.iter(|| tree.select_path(black_box("n0_9/n1_9/n2_9")));
    });

    group.bench_function("relative", |b| {
        b.iter(|| tree.select_node(start, black_box("../../n1_2/n2_7")));
    });

    group.bench_function("miss", |b| {
        b.iter(|| tree.select_path(black_box("n0_9/missing/n2_9")));
    });

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");
    let paths = generate_paths(10, 3);
    let tree = build(&paths);

    group.bench_function("pre_order", |b| {
        b.iter(|| tree.all_nodes().len());
    });

    group.bench_function("siblings_first", |b| {
        b.iter(|| {
            tree.list_nodes_ordered(ListOrder::SiblingsFirst, |_| true, None)
                .len()
        });
    });

    group.bench_function("index_by_path", |b| {
        b.iter(|| tree.index_by_path().len());
    });

    group.finish();
}

fn bench_pathways(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathways");
    let paths = generate_paths(10, 3);
    let tree = build(&paths);

    group.bench_function("cold", |b| {
        b.iter(|| {
            let pathways = PathwaysPreparer::breadcrumbs(&tree, PathwayOptions::new());
            pathways.by_node_key(black_box("n0_3/n1_4/n2_5")).map(|p| p.len())
        });
    });

    let pathways = PathwaysPreparer::breadcrumbs(&tree, PathwayOptions::new());
    group.bench_function("cached", |b| {
        b.iter(|| pathways.by_node_key(black_box("n0_3/n1_4/n2_5")).map(|p| p.len()));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_select, bench_list, bench_pathways);
criterion_main!(benches);
