// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning knobs.

/// Default minimum group size for a split during rebalancing.
pub const XY_THRESHOLD: usize = 16;

/// Configuration for a [`SpatialIndex`](crate::SpatialIndex).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct XyTreeConfig {
    /// Groups smaller than this stay in one leaf, and a split needs at least
    /// this many records strictly on its two sides combined.
    pub rebalance_threshold: usize,
}

impl Default for XyTreeConfig {
    fn default() -> Self {
        Self {
            rebalance_threshold: XY_THRESHOLD,
        }
    }
}
