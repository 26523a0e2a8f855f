// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-precision bounding rectangle with exact comparisons.

use crate::error::Error;

/// Axis-aligned rectangle in `f64` with `min <= max` on both axes.
///
/// All predicates compare exactly. Rectangles that share only an edge or a
/// corner are not disjoint.
///
/// [`BoundRect::EMPTY`] is the inverted accumulator used for aggregate
/// bounds: it is the identity for [`BoundRect::expand`] and is disjoint
/// from everything.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundRect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Default for BoundRect {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundRect {
    /// Inverted rectangle enclosing nothing.
    pub const EMPTY: Self = Self {
        min_x: f64::MAX,
        min_y: f64::MAX,
        max_x: f64::MIN,
        max_y: f64::MIN,
    };

    /// Create a rectangle from its corners.
    ///
    /// # Panics
    ///
    /// Panics if `min_x > max_x`, `min_y > max_y`, or a coordinate is NaN.
    /// Use [`BoundRect::try_new`] for untrusted input.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        match Self::try_new(min_x, min_y, max_x, max_y) {
            Ok(b) => b,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a rectangle from its corners, rejecting inverted input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBound`] if `min_x > max_x`, `min_y > max_y`,
    /// or a coordinate is NaN.
    pub fn try_new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, Error> {
        let b = Self {
            min_x,
            min_y,
            max_x,
            max_y,
        };
        if b.is_valid() {
            Ok(b)
        } else {
            Err(Error::InvalidBound {
                min_x,
                min_y,
                max_x,
                max_y,
            })
        }
    }

    /// Minimum x.
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Minimum y.
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum x.
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Maximum y.
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// True unless inverted (or NaN). [`BoundRect::EMPTY`] is not valid.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// True if the two rectangles have no point in common.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y
    }

    /// True if the two rectangles overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_disjoint(other)
    }

    /// True if `other` lies inside this rectangle (edges inclusive).
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Grow in place to enclose `other`.
    pub fn expand(&mut self, other: &Self) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Smallest rectangle enclosing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut u = *self;
        u.expand(other);
        u
    }

    /// Midpoint on each axis.
    ///
    /// Halves before adding, so it stays finite for any finite rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            self.min_x / 2.0 + self.max_x / 2.0,
            self.min_y / 2.0 + self.max_y / 2.0,
        )
    }
}
