// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-testing `kurbo` shapes with the quadtree.
//!
//! Each widget stores a `kurbo::Rect`; the accessor converts it to `Aabb2D<f64>`.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_kurbo`

use kurbo::{Point, Rect};
use understory_quadtree::{Aabb2D, Quadtree};

#[derive(Debug, PartialEq)]
struct Widget {
    name: &'static str,
    rect: Rect,
}

fn main() {
    env_logger::init();

    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let mut tree = Quadtree::new(Aabb2D::from(viewport), |w: &Widget| Aabb2D::from(w.rect));

    let widgets = [
        ("toolbar", Rect::new(0.0, 0.0, 800.0, 40.0)),
        ("sidebar", Rect::new(0.0, 40.0, 200.0, 600.0)),
        ("canvas", Rect::new(200.0, 40.0, 800.0, 600.0)),
        ("button", Rect::new(10.0, 5.0, 90.0, 35.0)),
        ("tooltip", Rect::new(150.0, 30.0, 260.0, 60.0)),
        ("offscreen", Rect::new(780.0, 580.0, 900.0, 700.0)),
    ];
    for (name, rect) in widgets {
        if let Err(e) = tree.insert(Widget { name, rect }) {
            println!("{} does not fit the viewport: {}", e.element.name, e);
        }
    }

    for p in [Point::new(50.0, 20.0), Point::new(199.0, 45.0), Point::new(500.0, 300.0)] {
        let probe = Aabb2D::new(p.x, p.y, p.x, p.y);
        let mut names: Vec<_> = tree.query(&probe).iter().map(|w| w.name).collect();
        names.sort_unstable();
        println!("hit at {:?}: {:?}", p, names);
    }

    let area: Rect = tree.bbox().into();
    println!("indexed {} widgets over {:?}", tree.len(), area);
}
