//! The grid of positions searched by the demo.

use std::f64::consts::SQRT_2;

use anyhow::Result;
use pm_core::{Position, PositionId, PositionStore, WeightedEdge};

use crate::config::GridConfig;

/// One grid cell.  Carries its own 8-way neighbor list.
#[derive(Debug)]
pub struct GridCell {
    pub x: usize,
    pub y: usize,
    pub passability: f64,
    adj: Vec<WeightedEdge>,
}

impl Position for GridCell {
    fn adjacent(&self, out: &mut Vec<WeightedEdge>) {
        out.extend_from_slice(&self.adj);
    }
}

pub struct Area {
    pub store: PositionStore<GridCell>,
    pub width: usize,
    pub height: usize,
    /// Row-major: cell `(x, y)` is `ids[y * width + x]`.
    ids: Vec<PositionId>,
}

impl Area {
    /// Lay out the grid and wire every cell to its up to eight neighbors.
    ///
    /// Moving between cells costs the mean of their passabilities, scaled by
    /// `sqrt(2)` on diagonals.
    pub fn build(config: &GridConfig) -> Result<Self> {
        let (width, height) = (config.width, config.height);
        let mut pass = vec![config.default_passability; width * height];
        for c in &config.cells {
            pass[c.y * width + c.x] = c.passability;
        }

        let mut store = PositionStore::with_capacity(width * height);
        let ids: Vec<PositionId> = (0..width * height)
            .map(|i| {
                store.insert(GridCell {
                    x: i % width,
                    y: i / width,
                    passability: pass[i],
                    adj: Vec::new(),
                })
            })
            .collect();

        for y in 0..height {
            for x in 0..width {
                let here = y * width + x;
                let mut adj = Vec::with_capacity(8);
                for (dx, dy) in NEIGHBOR_OFFSETS {
                    let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                        continue;
                    };
                    if nx >= width || ny >= height {
                        continue;
                    }
                    let there = ny * width + nx;
                    let mean = (pass[here] + pass[there]) / 2.0;
                    let weight = if dx != 0 && dy != 0 { mean * SQRT_2 } else { mean };
                    adj.push(WeightedEdge::new(ids[there], weight)?);
                }
                store[ids[here]].adj = adj;
            }
        }

        Ok(Self { store, width, height, ids })
    }

    pub fn id(&self, x: usize, y: usize) -> PositionId {
        self.ids[y * self.width + x]
    }
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
