//! The per-source cache of distance sets.

use rustc_hash::FxHashMap;
use tracing::debug;

use pm_core::PositionId;

use crate::{Adjacency, SingleSourceDistances};

/// Lazily creates and keeps one [`SingleSourceDistances`] per source.
///
/// Entries are never evicted automatically.  Every set created here is wired
/// to a clone of the registry's adjacency strategy.
pub struct DistanceRegistry<A> {
    adjacency: A,
    sets: FxHashMap<PositionId, SingleSourceDistances<A>>,
}

impl<A: Adjacency + Clone> DistanceRegistry<A> {
    pub fn new(adjacency: A) -> Self {
        Self { adjacency, sets: FxHashMap::default() }
    }

    /// The distance set for `source`, created on first request.
    pub fn get_or_create(&mut self, source: PositionId) -> &mut SingleSourceDistances<A> {
        let adjacency = &self.adjacency;
        self.sets.entry(source).or_insert_with(|| {
            debug!(source = %source, "creating distance set");
            SingleSourceDistances::new(source, adjacency.clone())
        })
    }

    /// The distance set for `source`, if one has been created.
    pub fn get(&self, source: PositionId) -> Option<&SingleSourceDistances<A>> {
        self.sets.get(&source)
    }

    /// Settled distance to `pos` from every cached source that has reached
    /// it, as `(source, distance)` sorted by source.
    ///
    /// Inspection only; path finding never calls this.
    pub fn all_distances_to(&self, pos: PositionId) -> Vec<(PositionId, f64)> {
        let mut found: Vec<(PositionId, f64)> = self
            .sets
            .iter()
            .filter_map(|(&source, set)| set.calculated_to(pos).map(|d| (source, d)))
            .collect();
        found.sort_unstable_by_key(|&(source, _)| source);
        found
    }

    /// Drop the cached set for `source`.  Returns `true` if one existed.
    pub fn invalidate(&mut self, source: PositionId) -> bool {
        let removed = self.sets.remove(&source).is_some();
        if removed {
            debug!(source = %source, "invalidated distance set");
        }
        removed
    }

    /// Drop every cached set.
    pub fn clear(&mut self) {
        debug!(sets = self.sets.len(), "clearing distance registry");
        self.sets.clear();
    }

    /// Sources with a cached set, sorted.
    pub fn sources(&self) -> Vec<PositionId> {
        let mut sources: Vec<PositionId> = self.sets.keys().copied().collect();
        sources.sort_unstable();
        sources
    }

    pub fn adjacency(&self) -> &A {
        &self.adjacency
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
