//! Opaque position identity.
//!
//! A `PositionId` is the only notion of identity the engine has.  Handles are
//! issued by [`PositionStore::insert`](crate::PositionStore::insert) and are
//! never derived from what a position contains, so two structurally identical
//! positions inserted separately always compare unequal.
//!
//! The inner integer is `pub` so provider implementations can index their own
//! `Vec`s with it, but callers should prefer `.index()` for clarity.

use std::fmt;

use crate::{PathError, PathResult};

/// Handle identifying one position in a graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionId(pub u32);

impl PositionId {
    /// Sentinel meaning "no valid position" — equivalent to `u32::MAX`.
    pub const INVALID: PositionId = PositionId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for PositionId {
    /// Returns the `INVALID` sentinel so uninitialized handles are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PositionId({})", self.0)
    }
}

impl TryFrom<usize> for PositionId {
    type Error = PathError;

    /// Fails for indices that do not fit in a `u32` or that collide with
    /// [`PositionId::INVALID`].
    fn try_from(n: usize) -> PathResult<PositionId> {
        u32::try_from(n)
            .ok()
            .map(PositionId)
            .filter(|id| id.is_valid())
            .ok_or(PathError::IndexOverflow(n))
    }
}
