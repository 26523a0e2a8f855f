// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_xytree --heading-base-level=0

//! Understory XY-tree: a ternary split tree for rectangle range queries.
//!
//! A [`SpatialIndex`] stores [`ComponentRecord`]s, each a [`BoundRect`] with a
//! caller-defined type tag and an opaque handle. Every internal node splits on
//! one axis and keeps three children:
//!
//! - left: records strictly below the split line,
//! - middle: records touching or crossing it,
//! - right: records strictly above it.
//!
//! Nodes carry the aggregate bound of everything below them, so a query skips
//! whole subtrees it cannot touch, and only visits the side children its own
//! classification allows.
//!
//! The tree does not restructure itself while records are added. Call
//! [`SpatialIndex::rebalance`] after bulk loading to rebuild it with splits at
//! the center of each group, choosing per group the axis with the lower
//! [`figure_of_merit`]. Groups below [`XY_THRESHOLD`] records stay in one leaf.
//!
//! All comparisons are exact. Touching rectangles intersect.
//!
//! # Example
//!
//! ```rust
//! use understory_xytree::{SpatialIndex, SplitAxis};
//!
//! let mut index: SpatialIndex<&str> = SpatialIndex::new();
//! index.create_tree(f64::MIN, SplitAxis::X);
//! index.add_component(0.0, 0.0, 10.0, 10.0, 1, "pad").unwrap();
//! index.add_component(20.0, 20.0, 30.0, 30.0, 1, "via").unwrap();
//!
//! assert_eq!(index.query_range(5.0, 5.0, 25.0, 25.0).len(), 2);
//! assert!(index.query_range(100.0, 100.0, 200.0, 200.0).is_empty());
//!
//! // Two records are too few to split; the tree is rebuilt flat.
//! assert!(!index.rebalance());
//!
//! let pad = index.query_range(1.0, 1.0, 1.0, 1.0)[0].clone();
//! assert!(index.delete_area(&pad));
//! assert_eq!(index.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. It does not synchronize internally.

#![no_std]

extern crate alloc;

pub mod bound;
pub mod config;
pub mod error;
mod index;
mod leaf;
mod node;
pub mod rebalance;
pub mod record;

pub use bound::BoundRect;
pub use config::{XY_THRESHOLD, XyTreeConfig};
pub use error::Error;
pub use index::SpatialIndex;
pub use node::SplitAxis;
pub use rebalance::{figure_of_merit, log_time};
pub use record::{ComponentRecord, create_component};
