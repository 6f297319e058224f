//! The `(position, distance)` pair.
//!
//! Depending on context the distance is the weight of a single edge (in a
//! neighbor list) or an accumulated distance from some source (in inspection
//! results).  Either way it is fixed at construction and never negative.

use crate::{PathError, PathResult, PositionId};

/// An immutable `(position, distance)` pair with `distance >= 0`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEdge"))]
pub struct WeightedEdge {
    position: PositionId,
    distance: f64,
}

impl WeightedEdge {
    /// Build an edge, rejecting negative (and NaN) distances.
    ///
    /// # Errors
    ///
    /// [`PathError::NegativeDistance`] if `!(distance >= 0.0)`.
    pub fn new(position: PositionId, distance: f64) -> PathResult<Self> {
        // Written this way round so NaN fails too.
        if !(distance >= 0.0) {
            return Err(PathError::NegativeDistance { distance });
        }
        Ok(Self { position, distance })
    }

    #[inline]
    pub fn position(&self) -> PositionId {
        self.position
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Unchecked wire form; deserialization goes through [`WeightedEdge::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEdge {
    position: PositionId,
    distance: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEdge> for WeightedEdge {
    type Error = PathError;
    fn try_from(raw: RawEdge) -> PathResult<Self> {
        WeightedEdge::new(raw.position, raw.distance)
    }
}
