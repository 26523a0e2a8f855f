// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf buckets.

use alloc::vec::Vec;

use crate::bound::BoundRect;
use crate::record::ComponentRecord;

/// An unordered bag of records with their aggregate bound.
///
/// The bound is exactly the union of the record bounds, and
/// [`BoundRect::EMPTY`] when the bag is empty.
#[derive(Clone, Debug)]
pub(crate) struct TreeLeaf<A, G> {
    bound: BoundRect,
    records: Vec<ComponentRecord<A, G>>,
}

impl<A, G> TreeLeaf<A, G> {
    pub(crate) fn with_record(record: ComponentRecord<A, G>) -> Self {
        Self {
            bound: record.bound(),
            records: alloc::vec![record],
        }
    }

    pub(crate) fn from_records(records: Vec<ComponentRecord<A, G>>) -> Self {
        Self {
            bound: ComponentRecord::union_bound(&records),
            records,
        }
    }

    pub(crate) fn bound(&self) -> BoundRect {
        self.bound
    }

    pub(crate) fn records(&self) -> &[ComponentRecord<A, G>] {
        &self.records
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn into_records(self) -> Vec<ComponentRecord<A, G>> {
        self.records
    }

    pub(crate) fn add(&mut self, record: ComponentRecord<A, G>) {
        self.bound.expand(&record.bound());
        self.records.push(record);
    }

    /// Push every record intersecting `range` into `out`.
    pub(crate) fn collect_intersecting<'a>(
        &'a self,
        range: &BoundRect,
        out: &mut Vec<&'a ComponentRecord<A, G>>,
    ) {
        if self.bound.is_disjoint(range) {
            return;
        }
        out.extend(self.records.iter().filter(|r| !r.bound().is_disjoint(range)));
    }
}

impl<A: PartialEq, G> TreeLeaf<A, G> {
    pub(crate) fn contains(&self, record: &ComponentRecord<A, G>) -> bool {
        self.records.iter().any(|r| r == record)
    }

    /// Remove the first record equal to `record` and recompute the bound.
    pub(crate) fn remove(&mut self, record: &ComponentRecord<A, G>) -> Option<ComponentRecord<A, G>> {
        let pos = self.records.iter().position(|r| r == record)?;
        let removed = self.records.swap_remove(pos);
        self.bound = ComponentRecord::union_bound(&self.records);
        Some(removed)
    }
}
