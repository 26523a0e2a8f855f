// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! XY-tree basics.
//!
//! Load a grid of pads, query before and after a rebalance, then delete a few.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example xytree_basics`

use understory_xytree::{SpatialIndex, SplitAxis};

#[derive(Clone, Debug, PartialEq)]
struct Pad {
    net: &'static str,
    row: u32,
    col: u32,
}

fn main() {
    env_logger::init();

    let mut index: SpatialIndex<Pad> = SpatialIndex::new();
    index.create_tree(f64::MIN, SplitAxis::X);
    for row in 0..20_u32 {
        for col in 0..20_u32 {
            let x = f64::from(col) * 5.0;
            let y = f64::from(row) * 5.0;
            let net = if (row + col) % 2 == 0 { "VDD" } else { "GND" };
            if let Err(e) = index.add_component(x, y, x + 2.0, y + 2.0, 1, Pad { net, row, col }) {
                log::warn!("skipping pad ({row}, {col}): {e}");
            }
        }
    }
    // A long trace crossing most of the board.
    index
        .add_component(-1.0, 49.0, 101.0, 50.5, 2, Pad { net: "CLK", row: 0, col: 0 })
        .ok();
    println!("{:?}", index);

    let hits = index.query_range(20.0, 45.0, 30.0, 55.0);
    println!("before rebalance: {} hits", hits.len());

    let split = index.rebalance();
    println!(
        "rebalance split = {split}, nodes = {}, depth = {}",
        index.node_count(),
        index.depth()
    );
    let hits = index.query_range(20.0, 45.0, 30.0, 55.0);
    println!("after rebalance: {} hits", hits.len());
    for r in &hits {
        let pad = r.addr();
        println!("  type {} net {} at ({}, {})", r.type_id(), pad.net, pad.row, pad.col);
    }

    let clk: Vec<_> = index
        .query_range(0.0, 50.0, 0.0, 50.0)
        .into_iter()
        .filter(|r| r.type_id() == 2)
        .cloned()
        .collect();
    for r in &clk {
        println!("delete CLK trace: {}", index.delete_area(r));
    }
    println!("bound now {:?}", index.bound());
    println!("len = {}", index.len());
}
