// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant bookkeeping for node subdivision.

use crate::types::{Aabb2D, Scalar};

bitflags::bitflags! {
    /// A set of quadrants of a node's bounding box.
    ///
    /// Bit order matches the child order used by the tree:
    /// top-left, top-right, bottom-left, bottom-right.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Quadrants: u8 {
        /// `min_x..mid_x`, `mid_y..max_y`.
        const TOP_LEFT     = 0b0000_0001;
        /// `mid_x..max_x`, `mid_y..max_y`.
        const TOP_RIGHT    = 0b0000_0010;
        /// `min_x..mid_x`, `min_y..mid_y`.
        const BOTTOM_LEFT  = 0b0000_0100;
        /// `mid_x..max_x`, `min_y..mid_y`.
        const BOTTOM_RIGHT = 0b0000_1000;
    }
}

impl Quadrants {
    /// Single-quadrant flags in child order.
    pub const ORDER: [Self; 4] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    /// The quadrants of `bbox` that `bounds` intersects (epsilon-tolerant).
    pub fn touched_by<T: Scalar>(bbox: &Aabb2D<T>, bounds: &Aabb2D<T>) -> Self {
        let mut touched = Self::empty();
        for (quad, flag) in bbox.quadrants().iter().zip(Self::ORDER) {
            if quad.intersects(bounds) {
                touched |= flag;
            }
        }
        touched
    }

    /// True when more than one quadrant is set.
    pub fn straddles(self) -> bool {
        self.bits().count_ones() > 1
    }
}
