//! Where neighbor lists come from.
//!
//! # Pluggability
//!
//! The search engine only talks to the [`Adjacency`] trait.  Two strategies
//! ship with the crate and are picked once, when a distance set or context is
//! built:
//!
//! | Strategy          | Asks                                                |
//! |-------------------|-----------------------------------------------------|
//! | [`SelfReported`]  | the position itself, via [`Position::adjacent`]     |
//! | [`Provided`]      | an injected [`AdjacencyProvider`]                   |
//!
//! A provider decouples connectivity from the position objects: the same
//! positions can be searched under different neighbor relations without
//! touching them.
//!
//! Strategies are cloned into every per-source distance set, so both shipped
//! strategies are thin `Copy` references.

use pm_core::{Position, PositionId, PositionStore, WeightedEdge};

/// Neighbor lookup as seen by the search engine.
pub trait Adjacency {
    /// Append the `(neighbor, weight)` pairs of `pos` to `out`.
    ///
    /// The caller clears `out` before calling.
    fn adjacent(&self, pos: PositionId, out: &mut Vec<WeightedEdge>);
}

/// External neighbor relation that overrides what positions report.
pub trait AdjacencyProvider {
    /// Append the `(neighbor, weight)` pairs of `pos` to `out`.
    fn adjacent(&self, pos: PositionId, out: &mut Vec<WeightedEdge>);
}

// ── SelfReported ──────────────────────────────────────────────────────────────

/// Ask each position for its own neighbors.
///
/// Holds a shared borrow of the store, so positions cannot be rewired while
/// any search state built on this strategy is alive.
///
/// # Panics
///
/// Looking up a handle the store did not issue panics.
pub struct SelfReported<'g, P> {
    store: &'g PositionStore<P>,
}

impl<'g, P> SelfReported<'g, P> {
    pub fn new(store: &'g PositionStore<P>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'g PositionStore<P> {
        self.store
    }
}

// Manual impls: deriving would require `P: Clone`.
impl<P> Clone for SelfReported<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for SelfReported<'_, P> {}

impl<P: Position> Adjacency for SelfReported<'_, P> {
    #[inline]
    fn adjacent(&self, pos: PositionId, out: &mut Vec<WeightedEdge>) {
        self.store[pos].adjacent(out);
    }
}

// ── Provided ──────────────────────────────────────────────────────────────────

/// Ask an injected [`AdjacencyProvider`] instead of the positions.
pub struct Provided<'a, T: ?Sized> {
    provider: &'a T,
}

impl<'a, T: ?Sized> Provided<'a, T> {
    pub fn new(provider: &'a T) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &'a T {
        self.provider
    }
}

impl<T: ?Sized> Clone for Provided<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Provided<'_, T> {}

impl<T: AdjacencyProvider + ?Sized> Adjacency for Provided<'_, T> {
    #[inline]
    fn adjacent(&self, pos: PositionId, out: &mut Vec<WeightedEdge>) {
        self.provider.adjacent(pos, out);
    }
}
