// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`SpatialIndex`] facade over an arena of ternary split nodes.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use crate::bound::BoundRect;
use crate::config::XyTreeConfig;
use crate::error::Error;
use crate::leaf::TreeLeaf;
use crate::node::{Child, ChildType, NodeIdx, SplitAxis, TreeNode, classify};
use crate::rebalance::plan_split;
use crate::record::{ComponentRecord, create_component};

/// XY-tree index of [`ComponentRecord`]s.
///
/// Every internal node splits its region on one axis into three children:
/// records strictly below the split line, records touching or crossing it,
/// and records strictly above it. Insertion follows that classification from
/// the root down; [`SpatialIndex::rebalance`] rebuilds the whole tree with
/// median-of-bound splits chosen by [`figure_of_merit`](crate::figure_of_merit).
///
/// Nodes live in an arena and refer to their parent by index. Leaves are
/// stored inline in their parent's child slot.
pub struct SpatialIndex<A, G = ()> {
    nodes: Vec<TreeNode<A, G>>,
    root: Option<NodeIdx>,
    config: XyTreeConfig,
    len: usize,
}

impl<A, G> Default for SpatialIndex<A, G> {
    fn default() -> Self {
        Self::with_config(XyTreeConfig::default())
    }
}

impl<A, G> Debug for SpatialIndex<A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root.map(|r| {
            let n = &self.nodes[r.get()];
            (n.axis, n.split)
        });
        f.debug_struct("SpatialIndex")
            .field("len", &self.len)
            .field("nodes", &self.nodes.len())
            .field("root", &root)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<A, G> SpatialIndex<A, G> {
    /// Create an index with no tree. Call [`SpatialIndex::create_tree`] before adding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with no tree and the given configuration.
    pub fn with_config(config: XyTreeConfig) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            config,
            len: 0,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> XyTreeConfig {
        self.config
    }

    /// Create the root node splitting at `split` on `axis`.
    ///
    /// Does nothing if a root already exists. `create_tree(f64::MIN, SplitAxis::X)`
    /// gives a root that sends every record to its right child.
    pub fn create_tree(&mut self, split: f64, axis: SplitAxis) {
        if self.root.is_some() {
            return;
        }
        self.root = Some(self.push_node(TreeNode::new(split, axis, None)));
    }

    /// True once [`SpatialIndex::create_tree`] has run.
    pub fn has_tree(&self) -> bool {
        self.root.is_some()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aggregate bound of all records, or `None` if there are none.
    pub fn bound(&self) -> Option<BoundRect> {
        let b = self.nodes[self.root?.get()].bound;
        b.is_valid().then_some(b)
    }

    /// Number of split nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Longest chain of split nodes from the root; 0 without a tree.
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |r| self.node_depth(r))
    }

    /// Split line of the root node, if the tree exists.
    pub fn root_split(&self) -> Option<(SplitAxis, f64)> {
        let n = &self.nodes[self.root?.get()];
        Some((n.axis, n.split))
    }

    /// Remove every record, keeping a fresh root with the same split line.
    pub fn clear(&mut self) {
        let split = self.root_split();
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        if let Some((axis, coordinate)) = split {
            self.create_tree(coordinate, axis);
        }
    }

    /// All stored records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord<A, G>> + '_ {
        self.nodes
            .iter()
            .flat_map(|n| n.children.iter().flatten())
            .filter_map(|c| match c {
                Child::Leaf(leaf) => Some(leaf.records()),
                Child::Node(_) => None,
            })
            .flatten()
    }

    /// Build a record from coordinates and insert it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBound`] for inverted or NaN coordinates, and
    /// [`Error::TreeNotCreated`] if there is no root yet. The index is
    /// unchanged on error.
    pub fn add_component(
        &mut self,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
        type_id: i32,
        addr: A,
    ) -> Result<(), Error> {
        if self.root.is_none() {
            return Err(Error::TreeNotCreated);
        }
        let record = create_component(min_x, min_y, max_x, max_y, type_id, addr)?;
        self.add_record(record)
    }

    /// Insert a pre-built record.
    ///
    /// # Errors
    ///
    /// [`Error::TreeNotCreated`] if there is no root yet.
    pub fn add_record(&mut self, record: ComponentRecord<A, G>) -> Result<(), Error> {
        let root = self.root.ok_or(Error::TreeNotCreated)?;
        self.insert_from(root, record);
        Ok(())
    }

    /// Records whose bounds intersect `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Touching edges count. An inverted range matches nothing.
    pub fn query_range(
        &self,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Vec<&ComponentRecord<A, G>> {
        match BoundRect::try_new(min_x, min_y, max_x, max_y) {
            Ok(range) => self.query(&range),
            Err(_) => Vec::new(),
        }
    }

    /// Records whose bounds intersect `range`.
    pub fn query(&self, range: &BoundRect) -> Vec<&ComponentRecord<A, G>> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.search_node(root, range, &mut out);
        }
        out
    }

    /// Rebuild the tree from all records, splitting where it pays off.
    ///
    /// Returns `true` if the new tree has a real split at the root. When the
    /// records cannot be split (too few, or no axis separates them) the tree
    /// is rebuilt as a single root at `f64::MIN` on X holding every record in
    /// one leaf, and `false` is returned. Without a tree this does nothing
    /// and returns `false`.
    pub fn rebalance(&mut self) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let mut records = Vec::with_capacity(self.len);
        self.drain_node(root, &mut records);
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        let total = records.len();
        log::debug!("xytree: rebalancing {total} records");

        let split = match self.build(records, None) {
            Child::Node(idx) => {
                self.root = Some(idx);
                self.len = total;
                true
            }
            Child::Leaf(leaf) => {
                self.create_tree(f64::MIN, SplitAxis::X);
                if let Some(root) = self.root {
                    for record in leaf.into_records() {
                        self.insert_from(root, record);
                    }
                }
                false
            }
        };
        log::debug!(
            "xytree: rebalanced into {} nodes, depth {}, root {:?}",
            self.nodes.len(),
            self.depth(),
            self.root_split()
        );
        split
    }

    fn push_node(&mut self, node: TreeNode<A, G>) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    fn child_bound(&self, child: &Child<A, G>) -> BoundRect {
        match child {
            Child::Leaf(leaf) => leaf.bound(),
            Child::Node(n) => self.nodes[n.get()].bound,
        }
    }

    fn node_depth(&self, idx: NodeIdx) -> usize {
        let below = self.nodes[idx.get()]
            .children
            .iter()
            .flatten()
            .map(|c| match c {
                Child::Node(n) => self.node_depth(*n),
                Child::Leaf(_) => 0,
            })
            .max()
            .unwrap_or(0);
        1 + below
    }

    fn insert_from(&mut self, root: NodeIdx, record: ComponentRecord<A, G>) {
        let bound = record.bound();
        let mut cur = root;
        loop {
            let node = &mut self.nodes[cur.get()];
            node.bound.expand(&bound);
            let ty = node.child_type(&bound);
            let slot = &mut node.children[ty.index()];
            match slot {
                Some(Child::Node(next)) => cur = *next,
                Some(Child::Leaf(leaf)) => {
                    leaf.add(record);
                    break;
                }
                None => {
                    *slot = Some(Child::Leaf(TreeLeaf::with_record(record)));
                    break;
                }
            }
        }
        self.len += 1;
    }

    fn search_node<'a>(
        &'a self,
        idx: NodeIdx,
        range: &BoundRect,
        out: &mut Vec<&'a ComponentRecord<A, G>>,
    ) {
        let node = &self.nodes[idx.get()];
        if node.bound.is_disjoint(range) {
            return;
        }
        let ty = node.child_type(range);
        if matches!(ty, ChildType::Left | ChildType::Middle) {
            self.search_child(node.child(ChildType::Left), range, out);
        }
        self.search_child(node.child(ChildType::Middle), range, out);
        if matches!(ty, ChildType::Middle | ChildType::Right) {
            self.search_child(node.child(ChildType::Right), range, out);
        }
    }

    fn search_child<'a>(
        &'a self,
        child: Option<&'a Child<A, G>>,
        range: &BoundRect,
        out: &mut Vec<&'a ComponentRecord<A, G>>,
    ) {
        match child {
            None => {}
            Some(Child::Leaf(leaf)) => leaf.collect_intersecting(range, out),
            Some(Child::Node(n)) => self.search_node(*n, range, out),
        }
    }

    /// Move every record below `idx` into `out`, leaving the nodes empty.
    fn drain_node(&mut self, idx: NodeIdx, out: &mut Vec<ComponentRecord<A, G>>) {
        let children = core::mem::replace(&mut self.nodes[idx.get()].children, [None, None, None]);
        for child in children.into_iter().flatten() {
            match child {
                Child::Leaf(leaf) => out.extend(leaf.into_records()),
                Child::Node(n) => self.drain_node(n, out),
            }
        }
    }

    /// Recursively split `records` into a subtree, or keep them as one leaf.
    fn build(&mut self, records: Vec<ComponentRecord<A, G>>, parent: Option<NodeIdx>) -> Child<A, G> {
        let Some(plan) = plan_split(&records, self.config.rebalance_threshold) else {
            return Child::Leaf(TreeLeaf::from_records(records));
        };
        let idx = self.push_node(TreeNode::new(plan.coordinate, plan.axis, parent));

        let mut buckets: [Vec<ComponentRecord<A, G>>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for record in records {
            let ty = classify(plan.axis, plan.coordinate, &record.bound());
            buckets[ty.index()].push(record);
        }

        let mut bound = BoundRect::EMPTY;
        for (ty, bucket) in ChildType::ALL.into_iter().zip(buckets) {
            if bucket.is_empty() {
                continue;
            }
            let child = self.build(bucket, Some(idx));
            bound.expand(&self.child_bound(&child));
            self.nodes[idx.get()].children[ty.index()] = Some(child);
        }
        self.nodes[idx.get()].bound = bound;
        Child::Node(idx)
    }

    /// Recompute and store the bound of `idx` from its children.
    ///
    /// Returns whether it changed.
    fn adjust_bound(&mut self, idx: NodeIdx) -> bool {
        let fresh = self.nodes[idx.get()]
            .children
            .iter()
            .flatten()
            .fold(BoundRect::EMPTY, |acc, c| acc.union(&self.child_bound(c)));
        let node = &mut self.nodes[idx.get()];
        let changed = node.bound != fresh;
        node.bound = fresh;
        changed
    }

    /// The node and child slot where a record with `bound` would live.
    fn find_slot(&self, bound: &BoundRect) -> Option<(NodeIdx, ChildType)> {
        let mut cur = self.root?;
        loop {
            let node = &self.nodes[cur.get()];
            let ty = node.child_type(bound);
            match node.child(ty) {
                Some(Child::Node(next)) => {
                    debug_assert_eq!(
                        self.nodes[next.get()].parent,
                        Some(cur),
                        "child node does not point back to its parent"
                    );
                    cur = *next;
                }
                _ => return Some((cur, ty)),
            }
        }
    }
}

impl<A: PartialEq, G> SpatialIndex<A, G> {
    /// True if a record equal to `record` is stored.
    pub fn contains(&self, record: &ComponentRecord<A, G>) -> bool {
        let Some((idx, ty)) = self.find_slot(&record.bound()) else {
            return false;
        };
        match self.nodes[idx.get()].child(ty) {
            Some(Child::Leaf(leaf)) => leaf.contains(record),
            _ => false,
        }
    }

    /// Remove one record equal to `record`.
    ///
    /// Returns `false` if none is stored. Ancestor bounds shrink to fit what
    /// remains.
    pub fn delete_area(&mut self, record: &ComponentRecord<A, G>) -> bool {
        let Some((idx, ty)) = self.find_slot(&record.bound()) else {
            return false;
        };
        let slot = &mut self.nodes[idx.get()].children[ty.index()];
        let Some(Child::Leaf(leaf)) = slot else {
            return false;
        };
        if leaf.remove(record).is_none() {
            return false;
        }
        if leaf.is_empty() {
            *slot = None;
        }
        self.len -= 1;

        let mut cur = Some(idx);
        while let Some(i) = cur {
            if !self.adjust_bound(i) {
                break;
            }
            cur = self.nodes[i.get()].parent;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    type Index = SpatialIndex<u32>;

    fn rec(addr: u32, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> ComponentRecord<u32> {
        ComponentRecord::new(BoundRect::new(min_x, min_y, max_x, max_y), 1, addr)
    }

    fn addrs(hits: &[&ComponentRecord<u32>]) -> Vec<u32> {
        let mut v: Vec<u32> = hits.iter().map(|r| *r.addr()).collect();
        v.sort_unstable();
        v
    }

    /// A 10x10 grid of unit squares spaced 10 apart, addr = row * 10 + col.
    fn grid() -> Index {
        let mut index = Index::new();
        index.create_tree(f64::MIN, SplitAxis::X);
        for row in 0..10_u32 {
            for col in 0..10_u32 {
                let x = f64::from(col) * 10.0;
                let y = f64::from(row) * 10.0;
                index
                    .add_component(x, y, x + 1.0, y + 1.0, 1, row * 10 + col)
                    .unwrap();
            }
        }
        index
    }

    /// Check stored bounds against a fresh recomputation, bottom-up.
    fn assert_bounds_tight(index: &Index) {
        for (i, node) in index.nodes.iter().enumerate() {
            let mut fresh = BoundRect::EMPTY;
            for child in node.children.iter().flatten() {
                match child {
                    Child::Leaf(leaf) => {
                        assert_eq!(leaf.bound(), ComponentRecord::union_bound(leaf.records()));
                        assert!(!leaf.is_empty(), "empty leaf left in node {i}");
                    }
                    Child::Node(n) => {
                        assert_eq!(index.nodes[n.get()].parent, Some(NodeIdx::new(i)));
                    }
                }
                fresh.expand(&index.child_bound(child));
            }
            assert_eq!(node.bound, fresh, "stale bound at node {i}");
        }
    }

    #[test]
    fn two_component_scenario() {
        let mut index = Index::new();
        index.create_tree(f64::MIN, SplitAxis::X);
        index.add_component(0.0, 0.0, 10.0, 10.0, 1, 1).unwrap();
        index.add_component(20.0, 20.0, 30.0, 30.0, 1, 2).unwrap();

        assert_eq!(addrs(&index.query_range(5.0, 5.0, 25.0, 25.0)), [1, 2]);
        assert!(index.query_range(100.0, 100.0, 200.0, 200.0).is_empty());
        assert_eq!(index.bound(), Some(BoundRect::new(0.0, 0.0, 30.0, 30.0)));
    }

    #[test]
    fn adding_without_a_tree_fails() {
        let mut index = Index::new();
        assert_eq!(
            index.add_component(0.0, 0.0, 1.0, 1.0, 0, 1),
            Err(Error::TreeNotCreated)
        );
        assert!(index.query_range(0.0, 0.0, 1.0, 1.0).is_empty());
        assert!(!index.rebalance());
        assert_eq!(index.bound(), None);
        assert_eq!(index.depth(), 0);
    }

    #[test]
    fn inverted_component_is_rejected() {
        let mut index = Index::new();
        index.create_tree(0.0, SplitAxis::Y);
        assert!(matches!(
            index.add_component(1.0, 0.0, 0.0, 1.0, 0, 1),
            Err(Error::InvalidBound { .. })
        ));
        assert!(index.is_empty());
        assert!(index.query_range(1.0, 1.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn create_tree_is_idempotent() {
        let mut index = Index::new();
        index.create_tree(5.0, SplitAxis::Y);
        index.create_tree(-5.0, SplitAxis::X);
        assert_eq!(index.root_split(), Some((SplitAxis::Y, 5.0)));
        assert_eq!(index.node_count(), 1);
    }

    #[test]
    fn touching_edges_are_found() {
        let mut index = Index::new();
        index.create_tree(10.0, SplitAxis::X);
        index.add_component(0.0, 0.0, 10.0, 10.0, 1, 1).unwrap();
        index.add_component(11.0, 0.0, 20.0, 10.0, 1, 2).unwrap();
        assert_eq!(addrs(&index.query_range(20.0, 10.0, 30.0, 30.0)), [2]);
        assert_eq!(addrs(&index.query_range(10.0, 10.0, 11.0, 10.0)), [1, 2]);
        assert!(index.query_range(10.5, 0.0, 10.6, 10.0).is_empty());
    }

    #[test]
    fn deleted_record_is_not_returned() {
        let mut index = grid();
        let victim = rec(34, 40.0, 30.0, 41.0, 31.0);
        assert!(index.contains(&victim));
        assert!(index.delete_area(&victim));
        assert!(!index.contains(&victim));
        assert!(index.query_range(40.0, 30.0, 41.0, 31.0).is_empty());
        assert!(!index.delete_area(&victim));
        assert_eq!(index.len(), 99);

        // Same bound but another handle is a different record.
        assert!(!index.delete_area(&rec(99, 50.0, 30.0, 51.0, 31.0)));
        assert_eq!(index.len(), 99);
    }

    #[test]
    fn rebalance_keeps_every_record() {
        let mut index = grid();
        assert!(index.rebalance());
        assert_eq!(index.len(), 100);
        assert!(index.depth() > 1);
        assert_bounds_tight(&index);
        for row in 0..10_u32 {
            for col in 0..10_u32 {
                let x = f64::from(col) * 10.0;
                let y = f64::from(row) * 10.0;
                let hits = index.query_range(x, y, x + 1.0, y + 1.0);
                assert_eq!(addrs(&hits), [row * 10 + col]);
            }
        }
        assert_eq!(index.iter().count(), 100);
    }

    #[test]
    fn clustered_records_do_not_split() {
        let mut index = Index::new();
        index.create_tree(0.0, SplitAxis::Y);
        for i in 0..17 {
            index.add_component(0.0, 0.0, 1.0, 1.0, 1, i).unwrap();
        }
        assert!(!index.rebalance());
        assert_eq!(index.root_split(), Some((SplitAxis::X, f64::MIN)));
        assert_eq!(index.node_count(), 1);
        assert_eq!(index.len(), 17);
        assert_eq!(index.query_range(0.5, 0.5, 0.5, 0.5).len(), 17);
    }

    #[test]
    fn small_index_does_not_split() {
        let mut index = Index::new();
        index.create_tree(f64::MIN, SplitAxis::X);
        for i in 0..15_u32 {
            let v = f64::from(i) * 10.0;
            index.add_component(v, v, v + 1.0, v + 1.0, 1, i).unwrap();
        }
        assert!(!index.rebalance());
        assert_eq!(index.len(), 15);

        let mut empty = Index::new();
        empty.create_tree(3.0, SplitAxis::Y);
        assert!(!empty.rebalance());
        assert!(empty.has_tree());
    }

    #[test]
    fn ancestor_bounds_shrink_after_delete() {
        let mut index = grid();
        assert!(index.rebalance());
        // Drop the whole top row, the extreme of every ancestor's y range.
        for col in 0..10_u32 {
            let x = f64::from(col) * 10.0;
            assert!(index.delete_area(&rec(90 + col, x, 90.0, x + 1.0, 91.0)));
            assert_bounds_tight(&index);
        }
        assert_eq!(index.bound(), Some(BoundRect::new(0.0, 0.0, 91.0, 81.0)));
        assert!(index.query_range(0.0, 85.0, 100.0, 100.0).is_empty());
    }

    #[test]
    fn delete_everything_then_reuse() {
        let mut index = grid();
        index.rebalance();
        let all: Vec<ComponentRecord<u32>> = index.iter().cloned().collect();
        for r in &all {
            assert!(index.delete_area(r));
        }
        assert!(index.is_empty());
        assert_eq!(index.bound(), None);
        assert_bounds_tight(&index);
        assert!(index.query_range(-1e9, -1e9, 1e9, 1e9).is_empty());

        index.add_component(5.0, 5.0, 6.0, 6.0, 2, 7).unwrap();
        assert_eq!(addrs(&index.query_range(0.0, 0.0, 100.0, 100.0)), [7]);
    }

    #[test]
    fn clear_keeps_the_root_line() {
        let mut index = grid();
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.node_count(), 1);
        assert_eq!(index.root_split(), Some((SplitAxis::X, f64::MIN)));
        index.add_component(0.0, 0.0, 1.0, 1.0, 1, 1).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn origin_survives_rebalance() {
        let mut index: SpatialIndex<u32, &str> = SpatialIndex::new();
        index.create_tree(f64::MIN, SplitAxis::X);
        for i in 0..40_u32 {
            let v = f64::from(i) * 3.0;
            let r = create_component(v, 0.0, v + 1.0, 1.0, 1, i)
                .unwrap()
                .with_origin("trace", i + 100);
            index.add_record(r).unwrap();
        }
        assert!(index.rebalance());
        let hits = index.query_range(30.0, 0.0, 31.0, 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].geometry(), Some(&"trace"));
        assert_eq!(hits[0].comp_id(), 110);
    }

    #[test]
    fn random_records_match_linear_scan() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut index = Index::with_config(XyTreeConfig {
            rebalance_threshold: 8,
        });
        index.create_tree(f64::MIN, SplitAxis::X);
        let mut all = Vec::new();
        for addr in 0..400_u32 {
            let x = rng.random_range(-500.0..500.0);
            let y = rng.random_range(-500.0..500.0);
            let r = rec(
                addr,
                x,
                y,
                x + rng.random_range(0.0..60.0),
                y + rng.random_range(0.0..60.0),
            );
            index.add_record(r.clone()).unwrap();
            all.push(r);
        }

        let check = |index: &Index, all: &[ComponentRecord<u32>], rng: &mut StdRng| {
            for _ in 0..50 {
                let x = rng.random_range(-550.0..550.0);
                let y = rng.random_range(-550.0..550.0);
                let range = BoundRect::new(
                    x,
                    y,
                    x + rng.random_range(0.0..200.0),
                    y + rng.random_range(0.0..200.0),
                );
                let want: Vec<u32> = {
                    let mut v: Vec<u32> = all
                        .iter()
                        .filter(|r| r.bound().intersects(&range))
                        .map(|r| *r.addr())
                        .collect();
                    v.sort_unstable();
                    v
                };
                assert_eq!(addrs(&index.query(&range)), want);
            }
        };

        check(&index, &all, &mut rng);
        assert!(index.rebalance());
        assert_bounds_tight(&index);
        check(&index, &all, &mut rng);

        let (gone, kept): (Vec<_>, Vec<_>) = all.into_iter().partition(|r| r.addr() % 3 == 0);
        for r in &gone {
            assert!(index.delete_area(r));
        }
        assert_eq!(index.len(), kept.len());
        assert_bounds_tight(&index);
        check(&index, &kept, &mut rng);
    }
}
