// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.
//!
//! Comparisons on [`Aabb2D`] are tolerant: every edge test allows
//! [`Scalar::epsilon`] of slack so that boxes produced by repeated halving
//! still contain elements that sit exactly on a split line.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Axis-aligned bounding box in 2D.
///
/// The y axis points up: the "top" quadrants of a box are the ones with the
/// larger `y` values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (bottom)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (top)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Whether `other` lies inside this box, up to `T::epsilon()` on each edge.
    pub fn contains(&self, other: &Self) -> bool {
        let ep = T::epsilon();
        le(self.min_x, T::add(other.min_x, ep))
            && le(T::sub(other.max_x, ep), self.max_x)
            && le(self.min_y, T::add(other.min_y, ep))
            && le(T::sub(other.max_y, ep), self.max_y)
    }

    /// Whether the two boxes overlap or touch, up to `T::epsilon()` on each edge.
    ///
    /// Boxes that only share an edge or a corner intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        let ep = T::epsilon();
        le(T::sub(other.min_x, ep), self.max_x)
            && le(self.min_x, T::add(other.max_x, ep))
            && le(T::sub(other.min_y, ep), self.max_y)
            && le(self.min_y, T::add(other.max_y, ep))
    }

    /// Negation of [`Aabb2D::intersects`].
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.intersects(other)
    }

    /// Whether this AABB contains the point (edges inclusive, no tolerance).
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && le(x, self.max_x) && le(y, self.max_y)
    }

    /// Return true if the AABB is inverted on either axis. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }

    /// Smallest box enclosing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: min_t(self.min_x, other.min_x),
            min_y: min_t(self.min_y, other.min_y),
            max_x: max_t(self.max_x, other.max_x),
            max_y: max_t(self.max_y, other.max_y),
        }
    }

    /// Grow this box in place so that it encloses `other`.
    pub fn expand(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Grow every edge outwards by `by`.
    #[must_use]
    pub fn inflate(&self, by: T) -> Self {
        Self {
            min_x: T::sub(self.min_x, by),
            min_y: T::sub(self.min_y, by),
            max_x: T::add(self.max_x, by),
            max_y: T::add(self.max_y, by),
        }
    }

    /// Width of the box.
    pub fn width(&self) -> T {
        T::sub(self.max_x, self.min_x)
    }

    /// Height of the box.
    pub fn height(&self) -> T {
        T::sub(self.max_y, self.min_y)
    }

    /// The center point.
    pub fn center(&self) -> (T, T) {
        (
            T::mid(self.min_x, self.max_x),
            T::mid(self.min_y, self.max_y),
        )
    }

    /// The four quadrant boxes split at the center, ordered
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Self; 4] {
        let (mid_x, mid_y) = self.center();
        [
            Self::new(self.min_x, mid_y, mid_x, self.max_y),
            Self::new(mid_x, mid_y, self.max_x, self.max_y),
            Self::new(self.min_x, self.min_y, mid_x, mid_y),
            Self::new(mid_x, self.min_y, self.max_x, mid_y),
        ]
    }
}

impl Aabb2D<f32> {
    /// Create an AABB from origin and size in f32.
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl Aabb2D<f64> {
    /// Create an AABB from origin and size in f64.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl Aabb2D<i64> {
    /// Create an AABB from origin and size in i64.
    pub const fn from_xywh(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Aabb2D<f64> {
    fn from(r: kurbo::Rect) -> Self {
        Self {
            min_x: min_t(r.x0, r.x1),
            min_y: min_t(r.y0, r.y1),
            max_x: max_t(r.x0, r.x1),
            max_y: max_t(r.y0, r.y1),
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<Aabb2D<f64>> for kurbo::Rect {
    fn from(a: Aabb2D<f64>) -> Self {
        Self::new(a.min_x, a.min_y, a.max_x, a.max_y)
    }
}

/// Numeric scalar abstraction for the quadtree.
///
/// Provides the handful of operations needed to halve boxes and to compare
/// edges with a tolerance.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Midpoint between a and b.
    fn mid(a: Self, b: Self) -> Self;

    /// Slack allowed on every edge comparison.
    fn epsilon() -> Self;
}

/// Edge tolerance used for `f32` and `f64` coordinates.
pub const EPSILON: f32 = 1e-6;

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        a + (b - a) * 0.5
    }

    #[inline]
    fn epsilon() -> Self {
        EPSILON
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        a + (b - a) * 0.5
    }

    #[inline]
    fn epsilon() -> Self {
        Self::from(EPSILON)
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }

    #[inline]
    fn epsilon() -> Self {
        0
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
