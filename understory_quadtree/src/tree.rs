// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree implementation: insertion with lazy subdivision, removal, and range queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::accessor::BoundsAccessor;
use crate::error::OutOfBounds;
use crate::quadrant::Quadrants;
use crate::types::{Aabb2D, Scalar};

/// Default number of direct elements a leaf holds before it subdivides.
pub const CAPACITY: usize = 4;

/// Default depth below which nodes stop subdividing.
pub const MAX_DEPTH: usize = 32;

/// Tunables for a [`Quadtree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadtreeConfig {
    /// Direct elements a leaf accepts before it subdivides.
    pub capacity: usize,
    /// Nodes at this depth (the root is depth 0) never subdivide and accept
    /// direct elements past `capacity`.
    pub max_depth: usize,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            capacity: CAPACITY,
            max_depth: MAX_DEPTH,
        }
    }
}

/// A region quadtree over elements whose bounds come from a [`BoundsAccessor`].
///
/// Each node covers a fixed box. A leaf keeps up to `capacity` elements
/// directly; once full it either pins a new element that overlaps several of
/// its quadrants in a straddling bucket, or subdivides into four children and
/// pushes its direct elements down. Straddling elements stay where they were
/// pinned.
///
/// Elements are matched for removal with `PartialEq`. That equality should
/// identify the element independently of its bounds, so that
/// [`update`](Self::update) can find it after it has moved.
pub struct Quadtree<E, T: Scalar, A> {
    root: QuadNode<E, T>,
    accessor: A,
    config: QuadtreeConfig,
    len: usize,
}

struct QuadNode<E, T> {
    bbox: Aabb2D<T>,
    // Top-left, top-right, bottom-left, bottom-right. A slot is `None` after
    // its leaf emptied out; it is recreated on demand.
    children: Option<Box<[Option<QuadNode<E, T>>; 4]>>,
    elems: Vec<E>,
    straddling: Vec<E>,
}

impl<E, T: Scalar> QuadNode<E, T> {
    fn new(bbox: Aabb2D<T>) -> Self {
        Self {
            bbox,
            children: None,
            elems: Vec::new(),
            straddling: Vec::new(),
        }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    fn is_empty_leaf(&self) -> bool {
        self.is_leaf() && self.elems.is_empty() && self.straddling.is_empty()
    }

    /// Caller guarantees `self.bbox` contains `bounds`.
    fn insert<A: BoundsAccessor<E, T>>(
        &mut self,
        elem: E,
        bounds: Aabb2D<T>,
        accessor: &A,
        config: &QuadtreeConfig,
        depth: usize,
    ) {
        debug_assert!(
            self.bbox.contains(&bounds),
            "element routed to a node that cannot contain it"
        );
        if let Some(children) = self.children.as_deref_mut() {
            for (slot, quad) in children.iter_mut().zip(self.bbox.quadrants()) {
                if quad.contains(&bounds) {
                    slot.get_or_insert_with(|| Self::new(quad))
                        .insert(elem, bounds, accessor, config, depth + 1);
                    return;
                }
            }
            self.straddling.push(elem);
            return;
        }

        if self.elems.len() < config.capacity && self.straddling.is_empty() {
            self.elems.push(elem);
        } else if Quadrants::touched_by(&self.bbox, &bounds).straddles() {
            self.straddling.push(elem);
        } else if depth >= config.max_depth {
            self.elems.push(elem);
        } else {
            self.subdivide(depth);
            let mut pending = core::mem::take(&mut self.elems);
            pending.push(elem);
            for e in pending {
                let b = accessor.bounds(&e);
                self.insert(e, b, accessor, config, depth);
            }
        }
    }

    fn subdivide(&mut self, depth: usize) {
        log::trace!(
            "quadtree: subdividing {:?} at depth {} ({} direct, {} straddling)",
            self.bbox,
            depth,
            self.elems.len(),
            self.straddling.len()
        );
        self.children = Some(Box::new(self.bbox.quadrants().map(|q| Some(Self::new(q)))));
    }

    /// Removes every element equal to `elem` in this subtree and returns how many went.
    fn remove(&mut self, elem: &E) -> usize
    where
        E: PartialEq,
    {
        let before = self.elems.len() + self.straddling.len();
        self.elems.retain(|e| e != elem);
        self.straddling.retain(|e| e != elem);
        let mut removed = before - (self.elems.len() + self.straddling.len());

        if let Some(children) = self.children.as_deref_mut() {
            for slot in children.iter_mut() {
                let discard = match slot.as_mut() {
                    Some(child) => {
                        removed += child.remove(elem);
                        child.is_empty_leaf()
                    }
                    None => false,
                };
                if discard {
                    *slot = None;
                }
            }
        }
        removed
    }

    fn query<'a, A: BoundsAccessor<E, T>>(
        &'a self,
        range: &Aabb2D<T>,
        accessor: &A,
        out: &mut Vec<&'a E>,
    ) {
        for e in self.straddling.iter().chain(&self.elems) {
            if range.intersects(&accessor.bounds(e)) {
                out.push(e);
            }
        }
        if let Some(children) = self.children.as_deref() {
            for child in children.iter().flatten() {
                // Members may poke out of the child box by one epsilon and still
                // match the range by another.
                if child.bbox.inflate(T::epsilon()).intersects(range) {
                    child.query(range, accessor, out);
                }
            }
        }
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a E>) {
        out.extend(self.straddling.iter().chain(&self.elems));
        if let Some(children) = self.children.as_deref() {
            for child in children.iter().flatten() {
                child.collect(out);
            }
        }
    }

    fn depth(&self) -> usize {
        self.children
            .as_deref()
            .map(|children| {
                children
                    .iter()
                    .flatten()
                    .map(|c| c.depth() + 1)
                    .max()
                    .unwrap_or(1)
            })
            .unwrap_or(0)
    }
}

impl<E, T, A> Quadtree<E, T, A>
where
    T: Scalar,
    A: BoundsAccessor<E, T>,
{
    /// Create an empty tree covering `bbox`.
    pub fn new(bbox: Aabb2D<T>, accessor: A) -> Self {
        Self::with_config(bbox, accessor, QuadtreeConfig::default())
    }

    /// Create an empty tree covering `bbox` with explicit tunables.
    ///
    /// # Panics
    ///
    /// Panics if `bbox` is inverted or `config.capacity` is zero.
    pub fn with_config(bbox: Aabb2D<T>, accessor: A, config: QuadtreeConfig) -> Self {
        assert!(!bbox.is_empty(), "quadtree root box must not be inverted");
        assert!(config.capacity > 0, "quadtree leaf capacity must be positive");
        Self {
            root: QuadNode::new(bbox),
            accessor,
            config,
            len: 0,
        }
    }

    /// Create an empty tree covering the bounds of `elem`.
    ///
    /// The element itself is not inserted.
    pub fn from_element(elem: &E, accessor: A) -> Self {
        let bbox = accessor.bounds(elem);
        Self::new(bbox, accessor)
    }

    /// The fixed box covered by the root.
    pub fn bbox(&self) -> Aabb2D<T> {
        self.root.bbox
    }

    /// The tunables in effect.
    pub fn config(&self) -> QuadtreeConfig {
        self.config
    }

    /// The bounds accessor.
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Levels below the root (0 while the root is still a leaf).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Insert an element.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] with the element if its bounds are not contained
    /// by the root box; the tree is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the accessor reports inverted bounds for `elem`.
    pub fn insert(&mut self, elem: E) -> Result<(), OutOfBounds<E, T>> {
        let bounds = self.accessor.bounds(&elem);
        assert!(!bounds.is_empty(), "element bounds {bounds:?} are inverted");
        if !self.root.bbox.contains(&bounds) {
            return Err(OutOfBounds {
                element: elem,
                bounds,
            });
        }
        self.root
            .insert(elem, bounds, &self.accessor, &self.config, 0);
        self.len += 1;
        Ok(())
    }

    /// Elements whose bounds intersect `range` (touching counts).
    ///
    /// Each call materializes a fresh result; order is unspecified.
    pub fn query(&self, range: &Aabb2D<T>) -> Vec<&E> {
        let mut out = Vec::new();
        self.root.query(range, &self.accessor, &mut out);
        out
    }

    /// All stored elements.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect(&mut out);
        out.into_iter()
    }

    /// Drop every element and all subdivisions.
    pub fn clear(&mut self) {
        self.root = QuadNode::new(self.root.bbox);
        self.len = 0;
    }
}

impl<E, T, A> Quadtree<E, T, A>
where
    E: PartialEq,
    T: Scalar,
    A: BoundsAccessor<E, T>,
{
    /// Remove every element equal to `elem`. Returns true if any was found.
    ///
    /// Leaves that become empty are dropped; internal nodes are kept.
    pub fn remove(&mut self, elem: &E) -> bool {
        let removed = self.root.remove(elem);
        self.len -= removed;
        removed > 0
    }

    /// Re-file an element after its bounds changed.
    ///
    /// The accessor must already report the new bounds for `elem`. Any stored
    /// element equal to `elem` is removed first, then `elem` is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if the new bounds leave the root box; the old
    /// entry has been removed at that point.
    pub fn update(&mut self, elem: E) -> Result<(), OutOfBounds<E, T>> {
        let _ = self.remove(&elem);
        self.insert(elem)
    }
}

impl<E, T: Scalar, A> Debug for Quadtree<E, T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("bbox", &self.root.bbox)
            .field("len", &self.len)
            .field("config", &self.config)
            .field("root_is_leaf", &self.root.is_leaf())
            .finish_non_exhaustive()
    }
}
