use std::fmt;

use clearpath_core::{Point, Range};

/// Which endpoint of a search was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Invalid input to [`Pathfinder::search`](crate::Pathfinder::search).
///
/// "No path" is not an error: it is reported by an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal lies outside the grid.
    OutOfBounds {
        endpoint: Endpoint,
        pos: Point,
        bounds: Range,
    },
    /// Unit size below 1.
    InvalidUnitSize(i32),
    /// The clearance field covers a different rectangle than the pathfinder.
    RangeMismatch { expected: Range, found: Range },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                pos,
                bounds,
            } => write!(f, "search {endpoint} {pos} is outside grid {bounds}"),
            Self::InvalidUnitSize(n) => write!(f, "unit size must be at least 1, got {n}"),
            Self::RangeMismatch { expected, found } => write!(
                f,
                "clearance field covers {found} but the pathfinder expects {expected}"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
