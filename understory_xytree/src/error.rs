// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the XY-tree.

/// Failures reported at the public surface of the crate.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A bound with `min > max` on some axis, or with a NaN coordinate.
    #[error("invalid bound ({min_x}, {min_y}, {max_x}, {max_y}): min must not exceed max")]
    InvalidBound {
        /// Minimum x as given.
        min_x: f64,
        /// Minimum y as given.
        min_y: f64,
        /// Maximum x as given.
        max_x: f64,
        /// Maximum y as given.
        max_y: f64,
    },
    /// Components were added before [`SpatialIndex::create_tree`](crate::SpatialIndex::create_tree).
    #[error("spatial index has no tree yet; call create_tree first")]
    TreeNotCreated,
}
