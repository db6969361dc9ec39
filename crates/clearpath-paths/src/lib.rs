//! Clearance-aware pathfinding on 2D obstacle grids.
//!
//! Agents occupy a square of `unit_size` cells and may only stand where the
//! distance to the nearest obstacle is at least that size. The crate has
//! three layers:
//!
//! - **Clearance field** ([`ClearanceField`]): per-cell distance to the
//!   nearest blocked cell, capped at a radius and measured with a selectable
//!   [`Metric`].
//! - **Weighted jump search** ([`Pathfinder::search`]): a Dijkstra-style
//!   search that expands every precomputed [`NeighborOffset`] within the
//!   current jump range. Open space allows long straight jumps while tight
//!   spots fall back to single steps.
//! - **Path following** ([`Path`], [`PathWalker`]): reconstruction from the
//!   resulting [`ScoreMap`] and interpolated positions along the route.
//!
//! [`scatter_blocks`] generates random obstacle layouts for demos and tests.
//!
//! # Example
//!
//! ```
//! use clearpath_core::{ObstacleGrid, Point};
//! use clearpath_paths::{ClearanceField, Metric, Pathfinder, SearchConfig};
//!
//! let grid = ObstacleGrid::new(20, 20);
//! let field = ClearanceField::build(&grid, Metric::Euclidean);
//! let finder = Pathfinder::new(grid.bounds());
//! let cfg = SearchConfig::new(Point::new(1, 1), Point::new(18, 1));
//! let result = finder.search(&field, &cfg).unwrap();
//! assert!(result.found());
//! assert_eq!(result.path.start(), Some(Point::new(1, 1)));
//! ```

mod clearance;
mod config;
mod distance;
mod error;
mod mapgen;
mod offsets;
mod path;
mod queue;
mod scoremap;
mod search;
mod walk;

pub use clearance::{ClearanceError, ClearanceField, DEFAULT_RADIUS, MAX_RADIUS};
pub use config::{AgentProfile, SearchConfig};
pub use distance::{Metric, TABLE_SPAN, UnknownMetric, ceil_sqrt, chebyshev, euclidean, manhattan};
pub use error::{Endpoint, SearchError};
pub use mapgen::{ScatterConfig, scatter_blocks};
pub use offsets::{NeighborOffset, NeighborOffsets};
pub use path::{Path, position_at_distance};
pub use queue::{HeapOpenSet, NodeRef, OpenSet, ScanOpenSet};
pub use scoremap::{ScoreMap, SearchNode};
pub use search::{Pathfinder, SearchResult, edge_cost};
pub use walk::PathWalker;
