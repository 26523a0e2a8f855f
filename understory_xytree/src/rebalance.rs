// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Split planning for [`SpatialIndex::rebalance`](crate::SpatialIndex::rebalance).
//!
//! A group of records is split at the center of its union bound, on the axis
//! with the lower figure of merit:
//!
//! ```text
//! fom = left * log(left) + total * log(middle) + right * log(right)
//! ```
//!
//! where `log` is [`log_time`]. Records in the middle child stay reachable
//! from every query that reaches the node, so they are charged against the
//! whole group. Ties go to X.
//!
//! A split is only made when the chosen axis puts at least one record
//! strictly on each side and the two sides together hold at least the
//! rebalance threshold. Every split therefore shrinks each child below its
//! parent, which bounds the recursion.

use crate::node::{ChildType, SplitAxis, classify};
use crate::record::ComponentRecord;

/// Integer cost of searching `n` items: the bit length of `n`, at least 1.
///
/// `log_time(0) == 1`, `log_time(1) == 1`, `log_time(2) == 2`, `log_time(16) == 5`.
pub fn log_time(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()).max(1) as usize
}

/// Figure of merit for splitting `total` records into `left` and `right`
/// sides, the rest going to the middle. Lower is better.
pub fn figure_of_merit(left: usize, right: usize, total: usize) -> usize {
    debug_assert!(left + right <= total, "sides exceed the group");
    left * log_time(left) + total * log_time(total - left - right) + right * log_time(right)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct SideCounts {
    left: usize,
    right: usize,
}

impl SideCounts {
    fn tally<A, G>(records: &[ComponentRecord<A, G>], axis: SplitAxis, coordinate: f64) -> Self {
        let mut counts = Self { left: 0, right: 0 };
        for r in records {
            match classify(axis, coordinate, &r.bound()) {
                ChildType::Left => counts.left += 1,
                ChildType::Right => counts.right += 1,
                ChildType::Middle => {}
            }
        }
        counts
    }

    fn separates(self) -> bool {
        self.left > 0 && self.right > 0
    }
}

/// Where to split a group of records.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SplitPlan {
    pub(crate) axis: SplitAxis,
    pub(crate) coordinate: f64,
}

/// Decide whether and where to split `records`; `None` keeps them in one leaf.
pub(crate) fn plan_split<A, G>(
    records: &[ComponentRecord<A, G>],
    threshold: usize,
) -> Option<SplitPlan> {
    let total = records.len();
    if total < threshold {
        return None;
    }
    let (mid_x, mid_y) = ComponentRecord::union_bound(records).center();
    let x = SideCounts::tally(records, SplitAxis::X, mid_x);
    let y = SideCounts::tally(records, SplitAxis::Y, mid_y);

    let axis = if x.separates() && y.separates() {
        let fom_x = figure_of_merit(x.left, x.right, total);
        let fom_y = figure_of_merit(y.left, y.right, total);
        log::trace!("xytree: {total} records, fom x={fom_x} y={fom_y}");
        if fom_x <= fom_y {
            SplitAxis::X
        } else {
            SplitAxis::Y
        }
    } else if x.separates() {
        SplitAxis::X
    } else {
        SplitAxis::Y
    };
    let (counts, coordinate) = match axis {
        SplitAxis::X => (x, mid_x),
        SplitAxis::Y => (y, mid_y),
    };
    if !counts.separates() || counts.left + counts.right < threshold {
        log::trace!("xytree: keeping {total} records in one leaf");
        return None;
    }
    log::trace!(
        "xytree: split {total} records on {axis:?} at {coordinate} ({} left, {} right)",
        counts.left,
        counts.right
    );
    Some(SplitPlan { axis, coordinate })
}
