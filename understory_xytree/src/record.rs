// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component records stored in the index.

use crate::bound::BoundRect;
use crate::error::Error;

/// One indexed item: a bound plus the caller's opaque handles.
///
/// `A` is the primary handle the index hands back from queries, `G` an
/// optional originating geometry. The index never looks inside either.
///
/// Two records are equal when their bound, type tag and primary handle are
/// equal. The originating geometry and the component id do not take part.
#[derive(Clone, Debug)]
pub struct ComponentRecord<A, G = ()> {
    bound: BoundRect,
    type_id: i32,
    addr: A,
    geometry: Option<G>,
    comp_id: u32,
}

impl<A, G> ComponentRecord<A, G> {
    /// Create a record with no originating geometry and component id 0.
    pub fn new(bound: BoundRect, type_id: i32, addr: A) -> Self {
        Self {
            bound,
            type_id,
            addr,
            geometry: None,
            comp_id: 0,
        }
    }

    /// Attach the originating geometry and its component id.
    #[must_use]
    pub fn with_origin(mut self, geometry: G, comp_id: u32) -> Self {
        self.set_origin(geometry, comp_id);
        self
    }

    /// Replace the originating geometry and its component id.
    pub fn set_origin(&mut self, geometry: G, comp_id: u32) {
        self.geometry = Some(geometry);
        self.comp_id = comp_id;
    }

    /// The record's bound.
    pub fn bound(&self) -> BoundRect {
        self.bound
    }

    /// Caller-defined type tag.
    pub fn type_id(&self) -> i32 {
        self.type_id
    }

    /// The primary handle.
    pub fn addr(&self) -> &A {
        &self.addr
    }

    /// The originating geometry, if one was attached.
    pub fn geometry(&self) -> Option<&G> {
        self.geometry.as_ref()
    }

    /// Component id within the originating geometry.
    pub fn comp_id(&self) -> u32 {
        self.comp_id
    }

    /// Smallest bound enclosing every record, or [`BoundRect::EMPTY`] for none.
    pub fn union_bound<'a>(records: impl IntoIterator<Item = &'a Self>) -> BoundRect
    where
        A: 'a,
        G: 'a,
    {
        records
            .into_iter()
            .fold(BoundRect::EMPTY, |acc, r| acc.union(&r.bound))
    }
}

impl<A: PartialEq, G> PartialEq for ComponentRecord<A, G> {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound && self.type_id == other.type_id && self.addr == other.addr
    }
}

/// Build a record from raw coordinates.
///
/// # Errors
///
/// Returns [`Error::InvalidBound`] if the coordinates are inverted or NaN.
pub fn create_component<A, G>(
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    type_id: i32,
    addr: A,
) -> Result<ComponentRecord<A, G>, Error> {
    let bound = BoundRect::try_new(min_x, min_y, max_x, max_y)?;
    Ok(ComponentRecord::new(bound, type_id, addr))
}
