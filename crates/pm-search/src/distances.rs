//! Resumable single-source Dijkstra.
//!
//! # Design
//!
//! A [`SingleSourceDistances`] never runs to completion on its own.  Each
//! [`advance`](SingleSourceDistances::advance) settles exactly one position,
//! so callers decide how much work to do and can pick up later where they
//! left off.  Two maps hold the state:
//!
//! - `settled`: positions whose shortest distance is final.  Seeded with the
//!   source at distance 0.
//! - `frontier`: positions adjacent to the settled set with a tentative
//!   (upper-bound) distance.  Seeded with the source's direct neighbors.
//!
//! A position is never in both.  The frontier is backed by a binary heap with
//! lazy deletion: lowering a tentative distance updates the map and pushes a
//! fresh heap entry; outdated entries are skipped when popped.
//!
//! Every reached position also records the settled position it was reached
//! from, so [`path_to`](SingleSourceDistances::path_to) walks the exact chain
//! the relaxation produced.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::trace;

use pm_core::{Path, PositionId, WeightedEdge};

use crate::Adjacency;

/// How a position was reached: total distance from the source plus the last
/// edge taken.
#[derive(Copy, Clone, Debug)]
struct Reached {
    distance: f64,
    /// Predecessor on the shortest path; `INVALID` for the source.
    via: PositionId,
    /// Weight of the `via → position` edge.
    weight: f64,
}

/// Heap entry, ordered so `BinaryHeap` (max) pops the smallest distance first.
/// Secondary key `PositionId` keeps tie-breaking deterministic.
#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    distance: f64,
    pos: PositionId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Shortest distances discovered so far from one fixed source.
pub struct SingleSourceDistances<A> {
    source: PositionId,
    adjacency: A,
    settled: FxHashMap<PositionId, Reached>,
    frontier: FxHashMap<PositionId, Reached>,
    heap: BinaryHeap<FrontierEntry>,
    // scratch buffer for neighbor queries
    nbuf: Vec<WeightedEdge>,
}

impl<A: Adjacency> SingleSourceDistances<A> {
    /// Start a search from `source`, reading neighbors through `adjacency`.
    ///
    /// The source is settled at distance 0 and its direct neighbors form the
    /// initial frontier.  If a neighbor is listed more than once the cheapest
    /// edge wins.
    pub fn new(source: PositionId, adjacency: A) -> Self {
        let mut settled = FxHashMap::default();
        settled.insert(
            source,
            Reached { distance: 0.0, via: PositionId::INVALID, weight: 0.0 },
        );
        let mut this = Self {
            source,
            adjacency,
            settled,
            frontier: FxHashMap::default(),
            heap: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
        };
        this.expand(source, 0.0);
        this
    }

    /// The position all distances are measured from.
    #[inline]
    pub fn source(&self) -> PositionId {
        self.source
    }

    /// Settle the closest frontier position and relax its neighbors.
    ///
    /// Returns the newly settled position, or `None` once the frontier is
    /// empty, i.e. everything reachable from the source has been settled.
    pub fn advance(&mut self) -> Option<PositionId> {
        let (pos, reached) = loop {
            let entry = self.heap.pop()?;
            match self.frontier.get(&entry.pos) {
                // Skip stale heap entries.
                Some(r) if entry.distance <= r.distance => break (entry.pos, *r),
                _ => continue,
            }
        };

        self.frontier.remove(&pos);
        self.settled.insert(pos, reached);
        trace!(source = %self.source, position = %pos, distance = reached.distance, "settled");

        self.expand(pos, reached.distance);
        Some(pos)
    }

    /// Relax every neighbor of the freshly settled `from`.
    fn expand(&mut self, from: PositionId, from_distance: f64) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.adjacency.adjacent(from, &mut nbuf);

        for edge in nbuf.iter() {
            let to = edge.position();
            if self.settled.contains_key(&to) {
                continue;
            }
            let candidate = from_distance + edge.distance();
            let reached = Reached { distance: candidate, via: from, weight: edge.distance() };

            match self.frontier.entry(to) {
                Entry::Occupied(mut o) => {
                    if candidate >= o.get().distance {
                        continue;
                    }
                    o.insert(reached);
                }
                Entry::Vacant(v) => {
                    v.insert(reached);
                }
            }
            self.heap.push(FrontierEntry { distance: candidate, pos: to });
        }

        self.nbuf = nbuf;
    }

    /// Settled distance to `pos`, or `None` if it is not settled yet.
    ///
    /// Never triggers any computation.
    #[inline]
    pub fn calculated_to(&self, pos: PositionId) -> Option<f64> {
        self.settled.get(&pos).map(|r| r.distance)
    }

    /// Current upper bound for a frontier position.
    pub fn tentative_to(&self, pos: PositionId) -> Option<f64> {
        self.frontier.get(&pos).map(|r| r.distance)
    }

    /// The position `pos` was settled from (`None` for the source and for
    /// unsettled positions).
    pub fn predecessor(&self, pos: PositionId) -> Option<PositionId> {
        self.settled
            .get(&pos)
            .map(|r| r.via)
            .filter(|via| via.is_valid())
    }

    /// Shortest path from the source to `pos`.
    ///
    /// Returns an empty path if `pos` is not settled.  The length is the
    /// settled distance of `pos`, which is the source-first sum of the edge
    /// weights along the path, so it matches [`calculated_to`] exactly.
    ///
    /// [`calculated_to`]: Self::calculated_to
    pub fn path_to(&self, pos: PositionId) -> Path {
        let Some(end) = self.settled.get(&pos) else {
            return Path::empty();
        };

        let mut steps = vec![pos];
        let mut cur = pos;
        while cur != self.source {
            // A predecessor is always settled before its successors.
            cur = self.settled[&cur].via;
            steps.push(cur);
        }
        steps.reverse();
        Path::new(steps, end.distance)
    }

    /// Path to `pos` rebuilt from neighbor distances alone.
    ///
    /// Starting at `pos`, repeatedly steps to the settled neighbor with the
    /// smallest settled distance until the source is reached.  This does not
    /// consult recorded predecessors, so with weight ties or asymmetric edges
    /// it can return a different (even longer) path than [`path_to`].
    ///
    /// Returns an empty path if `pos` is unsettled or the walk gets stuck
    /// (no settled neighbor, or a cycle).
    ///
    /// [`path_to`]: Self::path_to
    pub fn path_to_by_neighbors(&self, pos: PositionId) -> Path {
        if !self.settled.contains_key(&pos) {
            return Path::empty();
        }

        let mut steps = vec![pos];
        let mut length = 0.0;
        let mut cur = pos;
        let mut nbuf = Vec::new();
        while cur != self.source {
            if steps.len() > self.settled.len() {
                return Path::empty();
            }
            nbuf.clear();
            self.adjacency.adjacent(cur, &mut nbuf);
            let closest = nbuf
                .iter()
                .filter_map(|e| self.settled.get(&e.position()).map(|r| (e, r.distance)))
                .min_by(|a, b| a.1.total_cmp(&b.1));
            let Some((edge, _)) = closest else {
                return Path::empty();
            };
            length += edge.distance();
            cur = edge.position();
            steps.push(cur);
        }
        steps.reverse();
        Path::new(steps, length)
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// Number of settled positions, the source included.
    #[inline]
    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }

    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// `true` once every position reachable from the source is settled.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// `(position, distance)` for every settled position, in no particular
    /// order.
    pub fn settled(&self) -> impl Iterator<Item = (PositionId, f64)> + '_ {
        self.settled.iter().map(|(&p, r)| (p, r.distance))
    }
}
