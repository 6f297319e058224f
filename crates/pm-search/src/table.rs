//! A map-backed [`AdjacencyProvider`].
//!
//! Handy when connectivity is known up front (test graphs, graphs loaded from
//! an edge list) and the position objects should not carry it themselves.

use rustc_hash::FxHashMap;

use pm_core::{PathResult, PositionId, WeightedEdge};

use crate::AdjacencyProvider;

/// Directed weighted adjacency lists keyed by [`PositionId`].
///
/// Positions with no entry have no neighbors.
///
/// # Example
///
/// ```
/// use pm_core::PositionId;
/// use pm_search::AdjacencyTable;
///
/// let mut t = AdjacencyTable::new();
/// t.add_link(PositionId(0), PositionId(1), 2.0).unwrap(); // both directions
/// t.add_edge(PositionId(1), PositionId(2), 1.0).unwrap(); // one-way
/// assert_eq!(t.neighbors(PositionId(1)).len(), 2);
/// assert!(t.neighbors(PositionId(2)).is_empty());
/// assert!(t.add_edge(PositionId(0), PositionId(2), -1.0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyTable {
    edges: FxHashMap<PositionId, Vec<WeightedEdge>>,
}

impl AdjacencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a **directed** edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// `PathError::NegativeDistance` if `distance` is negative or NaN; the
    /// table is left unchanged.
    pub fn add_edge(&mut self, from: PositionId, to: PositionId, distance: f64) -> PathResult<()> {
        let edge = WeightedEdge::new(to, distance)?;
        self.edges.entry(from).or_default().push(edge);
        Ok(())
    }

    /// Convenience: add edges in **both directions** with the same weight.
    pub fn add_link(&mut self, a: PositionId, b: PositionId, distance: f64) -> PathResult<()> {
        let forward = WeightedEdge::new(b, distance)?;
        let backward = WeightedEdge::new(a, distance)?;
        self.edges.entry(a).or_default().push(forward);
        self.edges.entry(b).or_default().push(backward);
        Ok(())
    }

    /// Replace the whole neighbor list of `pos`.
    pub fn set_adjacent(&mut self, pos: PositionId, edges: Vec<WeightedEdge>) {
        self.edges.insert(pos, edges);
    }

    pub fn neighbors(&self, pos: PositionId) -> &[WeightedEdge] {
        self.edges.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl AdjacencyProvider for AdjacencyTable {
    fn adjacent(&self, pos: PositionId, out: &mut Vec<WeightedEdge>) {
        out.extend_from_slice(self.neighbors(pos));
    }
}
