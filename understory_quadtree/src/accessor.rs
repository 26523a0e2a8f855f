// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds accessor trait used by [`Quadtree`](crate::Quadtree).

use crate::types::Aabb2D;

/// Reports the bounding box of an element stored in a quadtree.
///
/// The tree calls this whenever it needs an element's bounds, so it must be
/// pure: the same element has to report the same box until the caller
/// explicitly moves it with [`Quadtree::update`](crate::Quadtree::update).
///
/// Any `Fn(&E) -> Aabb2D<T>` closure is an accessor.
pub trait BoundsAccessor<E, T> {
    /// Bounds of `elem`.
    fn bounds(&self, elem: &E) -> Aabb2D<T>;
}

impl<E, T, F> BoundsAccessor<E, T> for F
where
    F: Fn(&E) -> Aabb2D<T>,
{
    #[inline]
    fn bounds(&self, elem: &E) -> Aabb2D<T> {
        self(elem)
    }
}
