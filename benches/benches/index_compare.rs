// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Aabb2D, Quadtree};
use understory_xytree::{BoundRect, SpatialIndex, SplitAxis};

type Item = (u32, Aabb2D<f64>);

fn item_bounds(item: &Item) -> Aabb2D<f64> {
    item.1
}

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            // Leave a gap so grid cells do not touch.
            out.push(Aabb2D::<f64>::from_xywh(x0, y0, cell * 0.8, cell * 0.8));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, extent: f64, rect: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (extent - rect);
        let y0 = rng.next_f64() * (extent - rect);
        out.push(Aabb2D::<f64>::from_xywh(x0, y0, rect, rect));
    }
    out
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            100.0 + rng.next_f64() * 1800.0,
            100.0 + rng.next_f64() * 1800.0,
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Aabb2D::<f64>::from_xywh(cx + dx, cy + dy, 12.0, 12.0));
        }
    }
    out
}

fn root_box(rects: &[Aabb2D<f64>]) -> Aabb2D<f64> {
    let mut it = rects.iter();
    let mut acc = it.next().copied().unwrap_or(Aabb2D::new(0.0, 0.0, 0.0, 0.0));
    for r in it {
        acc.expand(r);
    }
    acc
}

fn build_quadtree(rects: &[Aabb2D<f64>]) -> Quadtree<Item, f64, fn(&Item) -> Aabb2D<f64>> {
    let mut tree = Quadtree::new(
        root_box(rects),
        item_bounds as fn(&Item) -> Aabb2D<f64>,
    );
    for (i, r) in rects.iter().copied().enumerate() {
        let _ = tree.insert((i as u32, r));
    }
    tree
}

fn build_xytree(rects: &[Aabb2D<f64>], rebalance: bool) -> SpatialIndex<u32> {
    let mut index = SpatialIndex::new();
    index.create_tree(f64::MIN, SplitAxis::X);
    for (i, r) in rects.iter().enumerate() {
        let _ = index.add_component(r.min_x, r.min_y, r.max_x, r.max_y, 1, i as u32);
    }
    if rebalance {
        index.rebalance();
    }
    index
}

fn to_bound(r: &Aabb2D<f64>) -> BoundRect {
    BoundRect::new(r.min_x, r.min_y, r.max_x, r.max_y)
}

fn bench_inputs(c: &mut Criterion, name: &str, rects: &[Aabb2D<f64>], query: Aabb2D<f64>) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Elements(rects.len() as u64));

    group.bench_function("quadtree_build", |b| {
        b.iter(|| black_box(build_quadtree(rects).len()));
    });
    group.bench_function("xytree_build", |b| {
        b.iter(|| black_box(build_xytree(rects, false).len()));
    });
    group.bench_function("xytree_build_rebalance", |b| {
        b.iter(|| black_box(build_xytree(rects, true).len()));
    });

    let quadtree = build_quadtree(rects);
    let flat = build_xytree(rects, false);
    let balanced = build_xytree(rects, true);
    let range = to_bound(&query);

    group.bench_function("quadtree_query", |b| {
        b.iter(|| black_box(quadtree.query(&query).len()));
    });
    group.bench_function("xytree_query_unbalanced", |b| {
        b.iter(|| black_box(flat.query(&range).len()));
    });
    group.bench_function("xytree_query_rebalanced", |b| {
        b.iter(|| black_box(balanced.query(&range).len()));
    });

    group.bench_function("xytree_delete_all", |b| {
        b.iter_batched(
            || {
                let index = build_xytree(rects, true);
                let all: Vec<_> = index.iter().cloned().collect();
                (index, all)
            },
            |(mut index, all)| {
                for r in &all {
                    black_box(index.delete_area(r));
                }
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = Aabb2D::<f64>::from_xywh(100.0, 100.0, 200.0, 200.0);
        bench_inputs(c, &format!("grid_n{n}"), &rects, query);
    }
}

fn bench_random(c: &mut Criterion) {
    for &count in &[1_000usize, 10_000] {
        let rects = gen_random_rects(count, 2000.0, 16.0);
        let query = Aabb2D::<f64>::from_xywh(800.0, 800.0, 300.0, 300.0);
        bench_inputs(c, &format!("random_{count}"), &rects, query);
    }
}

fn bench_clustered(c: &mut Criterion) {
    let rects = gen_clustered_rects(20, 500, 200.0);
    let query = Aabb2D::<f64>::from_xywh(900.0, 900.0, 250.0, 250.0);
    bench_inputs(c, "clustered_20x500", &rects, query);
}

criterion_group!(benches, bench_grid, bench_random, bench_clustered);
criterion_main!(benches);
