//! Grid layout configuration.
//!
//! The defaults reproduce the classic 10×10 demo: a wall of passability 10
//! along column 3 and row 4, with a cheaper gap (passability 2) at the left
//! edge.  Any field can be overridden from a JSON file:
//!
//! ```json
//! { "width": 6, "height": 4, "start": [0, 0], "end": [5, 3],
//!   "cells": [ { "x": 2, "y": 1, "passability": 8.0 } ] }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Passability override for a single cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellOverride {
    pub x: usize,
    pub y: usize,
    pub passability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Passability of every cell without an override.
    pub default_passability: f64,
    /// `[x, y]` of the search source.
    pub start: [usize; 2],
    /// `[x, y]` of the search target.
    pub end: [usize; 2],
    /// Step budget for the query; `None` searches until done.
    pub max_steps: Option<usize>,
    pub cells: Vec<CellOverride>,
}

impl Default for GridConfig {
    fn default() -> Self {
        let wall = |x, y| CellOverride { x, y, passability: 10.0 };
        let mut cells: Vec<CellOverride> = (0..5).map(|y| wall(3, y)).collect();
        cells.push(wall(2, 4));
        cells.push(wall(1, 4));
        cells.push(CellOverride { x: 0, y: 4, passability: 2.0 });

        Self {
            width: 10,
            height: 10,
            default_passability: 1.0,
            start: [1, 1],
            end: [9, 9],
            max_steps: None,
            cells,
        }
    }
}

impl GridConfig {
    /// Read a config from a JSON file.  Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening grid config {}", path.display()))?;
        let config: GridConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing grid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0 && self.height > 0, "grid must not be empty");
        let inside = |[x, y]: [usize; 2]| x < self.width && y < self.height;
        ensure!(inside(self.start), "start {:?} outside the grid", self.start);
        ensure!(inside(self.end), "end {:?} outside the grid", self.end);
        ensure!(
            self.default_passability >= 0.0,
            "default passability must be non-negative"
        );
        for c in &self.cells {
            ensure!(inside([c.x, c.y]), "override ({}, {}) outside the grid", c.x, c.y);
            ensure!(c.passability >= 0.0, "passability of ({}, {}) is negative", c.x, c.y);
        }
        Ok(())
    }
}
