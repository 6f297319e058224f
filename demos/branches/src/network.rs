//! The four-branch test graph.
//!
//! ```text
//!            ┌─ B1_1 ─0.5─ B1_2 ─┐
//!            ├─ B2_1 ─0.6─ B2_2 ─┤
//!   START ─1─┼─ B3_1 ─0.7─ B3_2 ─┼─1─ END
//!            └─ B4_1 ─0.2─ B4_2 ─┘
//! ```
//!
//! END lists only branches 1–3 as neighbors, so branch 4 is one-way into END.

use anyhow::Result;
use pm_core::{Position, PositionId, PositionStore, WeightedEdge};

/// A named junction carrying its own neighbor list.
#[derive(Debug, Default)]
pub struct Junction {
    pub name: &'static str,
    adj: Vec<WeightedEdge>,
}

impl Position for Junction {
    fn adjacent(&self, out: &mut Vec<WeightedEdge>) {
        out.extend_from_slice(&self.adj);
    }
}

pub struct Network {
    pub store: PositionStore<Junction>,
    pub start: PositionId,
    pub end: PositionId,
}

const BRANCHES: [(&str, &str, f64); 4] = [
    ("B1_1", "B1_2", 0.5),
    ("B2_1", "B2_2", 0.6),
    ("B3_1", "B3_2", 0.7),
    ("B4_1", "B4_2", 0.2),
];

pub fn build_network() -> Result<Network> {
    let mut store = PositionStore::new();
    let junction = |name| Junction { name, ..Default::default() };

    let start = store.insert(junction("START"));
    let end = store.insert(junction("END"));
    let mut branches = Vec::with_capacity(BRANCHES.len());
    for (near, far, w) in BRANCHES {
        branches.push((store.insert(junction(near)), store.insert(junction(far)), w));
    }

    for (i, &(near, far, w)) in branches.iter().enumerate() {
        store[start].adj.push(WeightedEdge::new(near, 1.0)?);
        if i < 3 {
            store[end].adj.push(WeightedEdge::new(far, 1.0)?);
        }
        store[near].adj = vec![WeightedEdge::new(start, 1.0)?, WeightedEdge::new(far, w)?];
        store[far].adj = vec![WeightedEdge::new(near, w)?, WeightedEdge::new(end, 1.0)?];
    }

    Ok(Network { store, start, end })
}
