// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a generic 2D region quadtree for overlap queries.
//!
//! - Stores any element type; bounds come from a caller-supplied [`BoundsAccessor`]
//!   (any `Fn(&E) -> Aabb2D<T>` closure works).
//! - Leaves hold up to [`CAPACITY`] elements and subdivide lazily into four quadrants.
//! - Elements overlapping several quadrants are pinned in a straddling bucket at the
//!   node where they were found and never pushed down.
//! - Range queries return every element whose bounds intersect the range; touching counts.
//!
//! The tree covers a fixed root box and never grows. Inserting an element that does not
//! fit is an ordinary [`OutOfBounds`] error that hands the element back.
//!
//! Bounds comparisons are tolerant by [`Scalar::epsilon`] (`1e-6` for floats, zero for
//! `i64`) so that elements lying on a split line are still found.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Aabb2D, Quadtree};
//!
//! #[derive(Debug, PartialEq)]
//! struct Part {
//!     id: u32,
//!     bounds: Aabb2D<f64>,
//! }
//!
//! let mut tree = Quadtree::new(
//!     Aabb2D::new(-100.0, -100.0, 100.0, 100.0),
//!     |p: &Part| p.bounds,
//! );
//! tree.insert(Part { id: 1, bounds: Aabb2D::new(-80.0, 40.0, -40.0, 60.0) }).unwrap();
//! tree.insert(Part { id: 2, bounds: Aabb2D::new(-20.0, -20.0, 20.0, 20.0) }).unwrap();
//!
//! // A degenerate point box finds the part covering the origin.
//! let hits = tree.query(&Aabb2D::new(0.0, 0.0, 0.0, 0.0));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 2);
//!
//! // Parts outside the root box are rejected and handed back.
//! let err = tree
//!     .insert(Part { id: 3, bounds: Aabb2D::new(90.0, 90.0, 120.0, 95.0) })
//!     .unwrap_err();
//! assert_eq!(err.element.id, 3);
//! ```
//!
//! With the `kurbo` feature, `kurbo::Rect` converts to and from `Aabb2D<f64>`.
//!
//! This crate is `no_std` and uses `alloc`. It does not synchronize internally.

#![no_std]

extern crate alloc;

pub mod accessor;
pub mod error;
pub mod quadrant;
pub mod tree;
pub mod types;

pub use accessor::BoundsAccessor;
pub use error::OutOfBounds;
pub use quadrant::Quadrants;
pub use tree::{CAPACITY, MAX_DEPTH, Quadtree, QuadtreeConfig};
pub use types::{Aabb2D, EPSILON, Scalar};
