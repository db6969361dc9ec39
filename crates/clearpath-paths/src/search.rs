//! Weighted jump search.
//!
//! A uniform-cost search whose edges are variable-length jumps. From a cell
//! with clearance `c`, an agent of unit size `u` may jump up to
//! `max(1, c - u)` cells in any direction of the offset table, and may only
//! land on cells with clearance of at least `u`. Only the landing cell is
//! checked; the segment between the two endpoints is assumed to be at least
//! as wide as the smaller endpoint clearance allows. A start cell narrower
//! than the agent yields no path.

use clearpath_core::{Point, Range};

use crate::clearance::{ClearanceField, DEFAULT_RADIUS};
use crate::config::SearchConfig;
use crate::error::{Endpoint, SearchError};
use crate::offsets::NeighborOffsets;
use crate::path::Path;
use crate::queue::{HeapOpenSet, NodeRef, OpenSet};
use crate::scoremap::{ScoreMap, SearchNode};

/// Cost of one jump of length `step` between cells with the given clearances.
///
/// The clearance along the jump is integrated with the trapezoidal rule over
/// `step + 1` samples (rounded in favour of longer jumps), scaled by
/// `wall_factor / 6`, and added to the travelled distance.
///
/// A positive factor charges for clearance, so routes hug walls. A negative
/// factor charges for the clearance *missing* below `radius` instead, so
/// routes keep to open space. Both forms cost at least `step`, which keeps
/// every edge positive while different factors still rank routes
/// differently.
#[inline]
pub fn edge_cost(
    step: i32,
    from_clearance: i32,
    to_clearance: i32,
    wall_factor: i32,
    radius: i32,
) -> i32 {
    let integrated = (to_clearance + from_clearance) * (step + 1) / 2;
    let weight = if wall_factor >= 0 {
        integrated.saturating_mul(wall_factor)
    } else {
        let ceiling = (2 * radius) * (step + 1) / 2;
        (ceiling - integrated).max(0).saturating_mul(wall_factor.saturating_neg())
    };
    step.saturating_add(weight / 6).max(1)
}

/// Outcome of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Score map of the run, for reconstruction and visualization.
    pub map: ScoreMap,
    /// Route from start to goal; empty when the goal was not reached.
    pub path: Path,
    /// Relaxations dropped because the open set was at capacity.
    pub overflows: usize,
    /// Number of cells expanded.
    pub expanded: usize,
    goal: Point,
}

impl SearchResult {
    /// Whether the goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.goal_score() > 0
    }

    /// Score of the goal cell, 0 if it was not reached.
    #[inline]
    pub fn goal_score(&self) -> i32 {
        self.map.score_at(self.goal)
    }
}

/// Clearance-aware pathfinder for a fixed grid rectangle.
///
/// Owns the jump offset table, which is built once and shared by every
/// search. Each search allocates its own [`ScoreMap`] and open set, so a
/// `Pathfinder` holds no per-run state.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    rng: Range,
    offsets: NeighborOffsets,
}

impl Pathfinder {
    /// Pathfinder for `rng` with jumps up to [`DEFAULT_RADIUS`].
    pub fn new(rng: Range) -> Self {
        Self::with_radius(rng, DEFAULT_RADIUS)
    }

    /// Pathfinder for `rng` with jumps up to `radius` cells.
    pub fn with_radius(rng: Range, radius: i32) -> Self {
        Self {
            rng,
            offsets: NeighborOffsets::new(radius),
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The jump offset table.
    #[inline]
    pub fn offsets(&self) -> &NeighborOffsets {
        &self.offsets
    }

    /// Search with the default binary-heap open set.
    pub fn search(
        &self,
        field: &ClearanceField,
        cfg: &SearchConfig,
    ) -> Result<SearchResult, SearchError> {
        self.search_with::<HeapOpenSet>(field, cfg)
    }

    /// Search using the open set implementation `Q`.
    ///
    /// The open set is bounded by the number of grid cells. A relaxation that
    /// would push past that bound is dropped without touching the score map
    /// and counted in [`SearchResult::overflows`].
    pub fn search_with<Q: OpenSet>(
        &self,
        field: &ClearanceField,
        cfg: &SearchConfig,
    ) -> Result<SearchResult, SearchError> {
        self.search_bounded::<Q>(field, cfg, self.rng.len())
    }

    /// Search with an open set holding at most `capacity` entries.
    pub(crate) fn search_bounded<Q: OpenSet>(
        &self,
        field: &ClearanceField,
        cfg: &SearchConfig,
        capacity: usize,
    ) -> Result<SearchResult, SearchError> {
        let (start_idx, goal_idx) = self.validate(field, cfg)?;

        let mut map = ScoreMap::new(self.rng);
        let start_clearance = field.at_index(start_idx);
        if start_clearance < cfg.unit_size {
            log::debug!(
                "search {} -> {}: start clearance {} below unit {}",
                cfg.start,
                cfg.goal,
                start_clearance,
                cfg.unit_size
            );
            return Ok(SearchResult {
                map,
                path: Path::default(),
                overflows: 0,
                expanded: 0,
                goal: cfg.goal,
            });
        }

        *map.node_mut(start_idx) = SearchNode {
            pos: cfg.start,
            from: None,
            score: 1,
        };

        let mut open = Q::with_capacity(capacity);
        open.push(NodeRef {
            idx: start_idx,
            score: 1,
        });

        let unit = cfg.unit_size;
        let mut overflows = 0usize;
        let mut expanded = 0usize;

        while let Some(cur) = open.pop() {
            let node = *map.node(cur.idx);
            // Skip stale entries.
            if cur.score > node.score {
                continue;
            }
            if cfg.stop_at_goal && cur.idx == goal_idx {
                break;
            }
            expanded += 1;

            let cell_clearance = field.at_index(cur.idx);
            let max_jump = (cell_clearance - unit).max(1);
            let max_step = if cfg.jumping { max_jump } else { 1 };

            for off in self.offsets.within(max_step) {
                let tp = node.pos + off.delta;
                let Some(ti) = self.rng.index(tp) else {
                    continue;
                };
                let target_clearance = field.at_index(ti);
                if target_clearance < unit {
                    continue;
                }

                let cost = edge_cost(
                    off.distance,
                    cell_clearance,
                    target_clearance,
                    cfg.wall_factor,
                    field.radius(),
                );
                let candidate = cur.score.saturating_add(cost);
                let target = map.node_mut(ti);
                if target.score != 0 && candidate >= target.score {
                    continue;
                }
                if open.len() >= capacity {
                    overflows += 1;
                    continue;
                }
                target.from = Some(node.pos);
                target.score = candidate;
                open.push(NodeRef {
                    idx: ti,
                    score: candidate,
                });
            }
        }

        if overflows > 0 {
            log::warn!(
                "open set overflow: dropped {} relaxations (capacity {})",
                overflows,
                capacity
            );
        }

        let path = map.path_to(cfg.start, cfg.goal);
        log::debug!(
            "search {} -> {}: unit {}, wall factor {}, jumping {}, expanded {}, goal score {}, {} steps",
            cfg.start,
            cfg.goal,
            unit,
            cfg.wall_factor,
            cfg.jumping,
            expanded,
            map.score_at(cfg.goal),
            path.len().saturating_sub(1)
        );

        Ok(SearchResult {
            map,
            path,
            overflows,
            expanded,
            goal: cfg.goal,
        })
    }

    fn validate(
        &self,
        field: &ClearanceField,
        cfg: &SearchConfig,
    ) -> Result<(usize, usize), SearchError> {
        if field.range() != self.rng {
            return Err(SearchError::RangeMismatch {
                expected: self.rng,
                found: field.range(),
            });
        }
        if cfg.unit_size < 1 {
            return Err(SearchError::InvalidUnitSize(cfg.unit_size));
        }
        let locate = |endpoint: Endpoint, pos: Point| {
            self.rng.index(pos).ok_or(SearchError::OutOfBounds {
                endpoint,
                pos,
                bounds: self.rng,
            })
        };
        Ok((
            locate(Endpoint::Start, cfg.start)?,
            locate(Endpoint::Goal, cfg.goal)?,
        ))
    }
}
