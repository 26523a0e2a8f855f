// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion failures.

use crate::types::Aabb2D;

/// The element's bounds are not contained by the tree's root box.
///
/// The tree never grows to fit; the rejected element is handed back unchanged.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("element bounds {bounds:?} lie outside the quadtree root")]
pub struct OutOfBounds<E, T> {
    /// The element that was not inserted.
    pub element: E,
    /// Its bounds as reported by the accessor.
    pub bounds: Aabb2D<T>,
}

impl<E, T> OutOfBounds<E, T> {
    /// Take back the rejected element.
    pub fn into_element(self) -> E {
        self.element
    }
}
