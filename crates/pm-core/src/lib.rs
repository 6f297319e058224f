//! `pm-core` — foundational types for the `pathmemo` shortest-path engine.
//!
//! This crate is a dependency of every other `pm-*` crate.  It knows nothing
//! about search algorithms; it only defines what a graph node looks like from
//! the engine's point of view.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `PositionId` identity handle                           |
//! | [`edge`]     | `WeightedEdge` (position, non-negative distance)       |
//! | [`path`]     | `Path` result value                                    |
//! | [`position`] | `Position` capability, `PositionStore` arena           |
//! | [`error`]    | `PathError`, `PathResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod edge;
pub mod error;
pub mod ids;
pub mod path;
pub mod position;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use edge::WeightedEdge;
pub use error::{PathError, PathResult};
pub use ids::PositionId;
pub use path::Path;
pub use position::{Position, PositionStore};
