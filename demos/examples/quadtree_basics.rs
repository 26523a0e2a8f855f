// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert nine boxes into a 200x200 region, query a few ranges, and show how
//! out-of-bounds inserts are handed back.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_basics`
//! - `RUST_LOG=trace cargo run -p understory_demos --example quadtree_basics` to see subdivisions

use understory_quadtree::{Aabb2D, Quadtree};

#[derive(Debug)]
struct Shape {
    id: u32,
    bounds: Aabb2D<f64>,
}

// Identity is the id, so `update` finds the entry filed under the old bounds.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

fn shape(id: u32, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Shape {
    Shape {
        id,
        bounds: Aabb2D::new(min_x, min_y, max_x, max_y),
    }
}

fn ids(hits: &[&Shape]) -> Vec<u32> {
    let mut v: Vec<u32> = hits.iter().map(|s| s.id).collect();
    v.sort_unstable();
    v
}

fn main() {
    env_logger::init();

    let mut tree = Quadtree::new(
        Aabb2D::new(-100.0, -100.0, 100.0, 100.0),
        |s: &Shape| s.bounds,
    );
    let shapes = [
        shape(1, -80.0, 40.0, -40.0, 60.0),
        shape(2, -80.0, -80.0, -40.0, -20.0),
        shape(3, 40.0, -60.0, 60.0, -40.0),
        shape(4, 40.0, 30.0, 70.0, 60.0),
        shape(5, -20.0, -20.0, 20.0, 20.0),
        shape(6, 10.0, 80.0, 20.0, 90.0),
        shape(7, 10.0, 55.0, 15.0, 65.0),
        shape(8, 35.0, 70.0, 40.0, 80.0),
        shape(9, 20.0, 70.0, 30.0, 80.0),
    ];
    for s in shapes {
        if let Err(e) = tree.insert(s) {
            println!("rejected {}", e);
        }
    }
    println!("{:?}", tree);

    let all = tree.query(&Aabb2D::new(-80.0, -80.0, 80.0, 80.0));
    println!("inner square: {} hits {:?}", all.len(), ids(&all));

    let top_right = tree.query(&Aabb2D::new(0.0, 0.0, 100.0, 100.0));
    println!("top-right quadrant: {} hits {:?}", top_right.len(), ids(&top_right));

    let origin = tree.query(&Aabb2D::new(0.0, 0.0, 0.0, 0.0));
    println!("origin: {:?}", ids(&origin));

    // Move shape 7 down by editing its bounds, then update.
    let moved = shape(7, 10.0, -65.0, 15.0, -55.0);
    if let Err(e) = tree.update(moved) {
        println!("shape {} left the tree: {}", e.element.id, e);
    }
    let bottom = tree.query(&Aabb2D::new(0.0, -100.0, 100.0, 0.0));
    println!("bottom-right after move: {:?}", ids(&bottom));

    let outside = shape(10, 90.0, 90.0, 120.0, 95.0);
    match tree.insert(outside) {
        Ok(()) => println!("inserted 10"),
        Err(e) => println!("handed back shape {}: {}", e.element.id, e),
    }
    println!("len = {}, depth = {}", tree.len(), tree.depth());
}
