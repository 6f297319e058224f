//! The result of a shortest-path query.

use std::fmt;

use crate::PositionId;

/// An ordered list of positions from source to target plus its total weight.
///
/// An empty path means "no path found" or "not computed yet" (for example a
/// step-bounded search that ran out of budget).  It is a regular value, not an
/// error.  A path from a position to itself has exactly one step and a length
/// of zero, so the two cases never collide.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Positions in order, source first, target last.
    pub steps: Vec<PositionId>,
    /// Sum of the edge weights between consecutive steps.
    pub length: f64,
}

impl Path {
    /// The empty "no path" value.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(steps: Vec<PositionId>, length: f64) -> Self {
        Self { steps, length }
    }

    /// `true` if no path was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of positions on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Number of edges traversed.
    #[inline]
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<PositionId> {
        self.steps.first().copied()
    }

    pub fn target(&self) -> Option<PositionId> {
        self.steps.last().copied()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PATH")?;
        for step in &self.steps {
            write!(f, "-{}", step.0)?;
        }
        Ok(())
    }
}
