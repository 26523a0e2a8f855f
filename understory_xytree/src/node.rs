// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal split nodes and child classification.

use crate::bound::BoundRect;
use crate::leaf::TreeLeaf;

/// Axis a node splits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    /// Split on x: children lie left of, across, or right of a vertical line.
    X,
    /// Split on y: children lie below, across, or above a horizontal line.
    Y,
}

/// Which of a node's three children a bound belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ChildType {
    Left,
    Middle,
    Right,
}

impl ChildType {
    pub(crate) const ALL: [Self; 3] = [Self::Left, Self::Middle, Self::Right];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

/// Classify `bound` against the line `axis = coordinate`.
///
/// Strictly below goes left, strictly above goes right. Anything touching
/// or crossing the line is middle.
pub(crate) fn classify(axis: SplitAxis, coordinate: f64, bound: &BoundRect) -> ChildType {
    let (lo, hi) = match axis {
        SplitAxis::X => (bound.min_x(), bound.max_x()),
        SplitAxis::Y => (bound.min_y(), bound.max_y()),
    };
    if hi < coordinate {
        ChildType::Left
    } else if lo > coordinate {
        ChildType::Right
    } else {
        ChildType::Middle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Child<A, G> {
    Node(NodeIdx),
    Leaf(TreeLeaf<A, G>),
}

/// Ternary split node stored in the index arena.
#[derive(Clone, Debug)]
pub(crate) struct TreeNode<A, G> {
    /// Union of all descendant record bounds; [`BoundRect::EMPTY`] until something lands here.
    pub(crate) bound: BoundRect,
    pub(crate) parent: Option<NodeIdx>,
    pub(crate) axis: SplitAxis,
    pub(crate) split: f64,
    pub(crate) children: [Option<Child<A, G>>; 3],
}

impl<A, G> TreeNode<A, G> {
    pub(crate) fn new(split: f64, axis: SplitAxis, parent: Option<NodeIdx>) -> Self {
        Self {
            bound: BoundRect::EMPTY,
            parent,
            axis,
            split,
            children: [None, None, None],
        }
    }

    pub(crate) fn child_type(&self, bound: &BoundRect) -> ChildType {
        classify(self.axis, self.split, bound)
    }

    pub(crate) fn child(&self, ty: ChildType) -> Option<&Child<A, G>> {
        self.children[ty.index()].as_ref()
    }
}
