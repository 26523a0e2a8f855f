// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_xytree::{BoundRect, SpatialIndex, SplitAxis};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<BoundRect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(BoundRect::new(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

fn to_rstar_rects(v: &[BoundRect]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min_x(), r.min_y()], [r.max_x(), r.max_y()]))
        .collect()
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("xytree_external_compare_f64");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = BoundRect::new(100.0, 100.0, 500.0, 500.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("xytree_build_query_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| {
                    let mut index: SpatialIndex<u32> = SpatialIndex::new();
                    index.create_tree(f64::MIN, SplitAxis::X);
                    for (i, r) in rects.iter().enumerate() {
                        let _ = index.add_component(
                            r.min_x(),
                            r.min_y(),
                            r.max_x(),
                            r.max_y(),
                            1,
                            i as u32,
                        );
                    }
                    index.rebalance();
                    let hits = index.query(&query).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [query.min_x(), query.min_y()],
                        [query.max_x(), query.max_y()],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
