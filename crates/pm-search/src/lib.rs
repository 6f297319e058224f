//! `pm-search` — incremental shortest paths with a per-source cache.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`adjacency`]   | `Adjacency` trait, `SelfReported`, `Provided`, `AdjacencyProvider` |
//! | [`table`]       | `AdjacencyTable`, a ready-made `AdjacencyProvider`        |
//! | [`distances`]   | `SingleSourceDistances` (resumable Dijkstra)              |
//! | [`registry`]    | `DistanceRegistry` (one distance set per source)          |
//! | [`context`]     | `SearchContext`, the query facade                         |
//!
//! # Staleness
//!
//! Cached distances are never re-validated against the graph.  Changing
//! connectivity or weights after a query has been issued leaves every cached
//! source stale.  With [`SelfReported`] the borrow checker enforces this (the
//! context borrows the `PositionStore`); with an injected provider it is the
//! caller's job, and [`SearchContext::reset`] / [`DistanceRegistry::invalidate`]
//! exist to drop stale state explicitly.
//!
//! # Example
//!
//! ```
//! use pm_search::{AdjacencyTable, SearchContext};
//! use pm_core::PositionId;
//!
//! let (a, b, c) = (PositionId(0), PositionId(1), PositionId(2));
//! let mut table = AdjacencyTable::new();
//! table.add_link(a, b, 1.0).unwrap();
//! table.add_link(b, c, 1.0).unwrap();
//! table.add_link(a, c, 3.0).unwrap();
//!
//! let mut ctx = SearchContext::with_provider(&table);
//! let path = ctx.find_path(a, c, None);
//! assert_eq!(path.steps, vec![a, b, c]);
//! assert_eq!(path.length, 2.0);
//! ```

pub mod adjacency;
pub mod context;
pub mod distances;
pub mod registry;
pub mod table;


pub use adjacency::{Adjacency, AdjacencyProvider, Provided, SelfReported};
pub use context::SearchContext;
pub use distances::SingleSourceDistances;
pub use registry::DistanceRegistry;
pub use table::AdjacencyTable;
