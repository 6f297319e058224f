//! The query facade.
//!
//! [`SearchContext::find_path`] is the entry point most callers need.  Work
//! done for one query is kept in the context's [`DistanceRegistry`], so a
//! second query from the same source starts where the first one stopped.

use tracing::debug;

use pm_core::{Path, Position, PositionId, PositionStore};

use crate::{Adjacency, AdjacencyProvider, DistanceRegistry, Provided, SelfReported, SingleSourceDistances};

/// Shortest-path queries backed by a per-source distance cache.
pub struct SearchContext<A> {
    registry: DistanceRegistry<A>,
}

impl<'g, P: Position> SearchContext<SelfReported<'g, P>> {
    /// Search `store`, asking each position for its own neighbors.
    pub fn self_reported(store: &'g PositionStore<P>) -> Self {
        Self::new(SelfReported::new(store))
    }
}

impl<'a, T: AdjacencyProvider + ?Sized> SearchContext<Provided<'a, T>> {
    /// Search with neighbors supplied by `provider` instead of the positions.
    pub fn with_provider(provider: &'a T) -> Self {
        Self::new(Provided::new(provider))
    }
}

impl<A: Adjacency + Clone> SearchContext<A> {
    pub fn new(adjacency: A) -> Self {
        Self { registry: DistanceRegistry::new(adjacency) }
    }

    /// Shortest path from `source` to `target`.
    ///
    /// If `target` is already settled from `source` the cached path is
    /// returned without further work.  Otherwise the source's distance set is
    /// advanced one position at a time until `target` is settled, the
    /// frontier runs dry, or `max_steps` advances have been made (`None`
    /// means no limit).
    ///
    /// The last two cases return an empty path.  A budget-limited call keeps
    /// its progress; calling again with a larger or no budget resumes it.
    pub fn find_path(&mut self, source: PositionId, target: PositionId, max_steps: Option<usize>) -> Path {
        self.search(source, target, max_steps)
            .map(|set| set.path_to(target))
            .unwrap_or_default()
    }

    /// Like [`find_path`](Self::find_path) but only returns the distance.
    pub fn distance(&mut self, source: PositionId, target: PositionId, max_steps: Option<usize>) -> Option<f64> {
        self.search(source, target, max_steps)
            .and_then(|set| set.calculated_to(target))
    }

    /// Settled distances to `pos` from every source queried so far, as
    /// `(source, distance)`.  Inspection only.
    pub fn calculated_distances(&self, pos: PositionId) -> Vec<(PositionId, f64)> {
        self.registry.all_distances_to(pos)
    }

    pub fn registry(&self) -> &DistanceRegistry<A> {
        &self.registry
    }

    /// Forget all cached work.  Required after the graph changes.
    pub fn reset(&mut self) {
        self.registry.clear();
    }

    /// Advance `source`'s set until `target` is settled; `None` if the
    /// frontier or the budget ran out first.
    fn search(
        &mut self,
        source: PositionId,
        target: PositionId,
        max_steps: Option<usize>,
    ) -> Option<&SingleSourceDistances<A>> {
        let set = self.registry.get_or_create(source);
        if set.calculated_to(target).is_some() {
            return Some(&*set);
        }

        let mut steps = 0usize;
        loop {
            if max_steps.is_some_and(|limit| steps >= limit) {
                debug!(source = %source, target = %target, steps, "step budget exhausted");
                return None;
            }
            match set.advance() {
                None => {
                    debug!(source = %source, target = %target, settled = set.settled_count(), "frontier exhausted");
                    return None;
                }
                Some(pos) if pos == target => return Some(&*set),
                Some(_) => steps += 1,
            }
        }
    }
}
