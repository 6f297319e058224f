//! The position capability and the arena that issues position handles.
//!
//! # Identity
//!
//! The engine never compares positions by content.  A [`PositionStore`] owns
//! the position objects and hands out a fresh [`PositionId`] for every
//! insert; that handle is the position's identity for its whole life.
//! Positions refer to their neighbors by handle, so a graph is usually built
//! in two passes: insert every position, then wire up neighbor lists with
//! [`PositionStore::get_mut`].

use std::ops::{Index, IndexMut};

use crate::{PathError, PathResult, PositionId, WeightedEdge};

/// A graph node that can report its own weighted neighbors.
///
/// Concrete positions (grid cells, named junctions, …) live outside the
/// engine; this is the only thing the engine needs from them.
pub trait Position {
    /// Append this position's `(neighbor, weight)` pairs to `out`.
    ///
    /// The caller clears `out` before calling.
    fn adjacent(&self, out: &mut Vec<WeightedEdge>);
}

/// Arena of positions indexed by [`PositionId`].
///
/// Handles are sequential from 0 and never reused.  Indexing with a handle
/// that this store did not issue panics; use [`try_get`](Self::try_get) when
/// the handle comes from an untrusted source.
#[derive(Debug, Clone)]
pub struct PositionStore<P> {
    positions: Vec<P>,
}

impl<P> PositionStore<P> {
    pub fn new() -> Self {
        Self { positions: Vec::new() }
    }

    /// Pre-allocate for the expected number of positions.
    pub fn with_capacity(n: usize) -> Self {
        Self { positions: Vec::with_capacity(n) }
    }

    /// Take ownership of `position` and return its new handle.
    ///
    /// # Panics
    ///
    /// If the store already holds `u32::MAX` positions.  See
    /// [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, position: P) -> PositionId {
        match self.try_insert(position) {
            Ok(id) => id,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`insert`](Self::insert), but fails instead of issuing a handle
    /// that would wrap or collide with [`PositionId::INVALID`].
    pub fn try_insert(&mut self, position: P) -> PathResult<PositionId> {
        let id = PositionId::try_from(self.positions.len())?;
        self.positions.push(position);
        Ok(id)
    }

    pub fn get(&self, id: PositionId) -> Option<&P> {
        self.positions.get(id.index())
    }

    pub fn get_mut(&mut self, id: PositionId) -> Option<&mut P> {
        self.positions.get_mut(id.index())
    }

    /// Like [`get`](Self::get) but reports a missing handle as an error.
    pub fn try_get(&self, id: PositionId) -> PathResult<&P> {
        self.get(id).ok_or(PathError::UnknownPosition(id))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Every issued handle, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = PositionId> + '_ {
        (0..self.positions.len()).map(|i| PositionId(i as u32))
    }

    /// `(handle, position)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PositionId, &P)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| (PositionId(i as u32), p))
    }
}

impl<P> Default for PositionStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Index<PositionId> for PositionStore<P> {
    type Output = P;

    #[inline]
    fn index(&self, id: PositionId) -> &P {
        &self.positions[id.index()]
    }
}

impl<P> IndexMut<PositionId> for PositionStore<P> {
    #[inline]
    fn index_mut(&mut self, id: PositionId) -> &mut P {
        &mut self.positions[id.index()]
    }
}
