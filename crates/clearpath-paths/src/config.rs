//! Per-search parameters and agent presets.

use clearpath_core::Point;

/// Parameters for a single [`Pathfinder::search`](crate::Pathfinder::search) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub start: Point,
    pub goal: Point,
    /// Minimum clearance a cell needs for the agent to land on it. At least 1.
    pub unit_size: i32,
    /// Signed weight applied to the integrated clearance along each jump.
    ///
    /// `0` is a pure shortest-path search. Positive values make jumps
    /// through high-clearance cells more expensive; negative values make
    /// them cheaper.
    pub wall_factor: i32,
    /// When `false`, only unit-length (cardinal) steps are considered.
    pub jumping: bool,
    /// Stop as soon as the goal is popped instead of exhausting the open set.
    ///
    /// The goal score is the same either way; the score map of an early-exit
    /// run simply covers fewer cells.
    pub stop_at_goal: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: Point::ZERO,
            goal: Point::ZERO,
            unit_size: 1,
            wall_factor: 0,
            jumping: true,
            stop_at_goal: true,
        }
    }
}

impl SearchConfig {
    /// Config from `start` to `goal` with default agent parameters.
    pub fn new(start: Point, goal: Point) -> Self {
        Self {
            start,
            goal,
            ..Self::default()
        }
    }

    /// Copy unit size and wall factor from an agent profile.
    pub fn for_agent(mut self, agent: &AgentProfile) -> Self {
        self.unit_size = agent.unit_size;
        self.wall_factor = agent.wall_factor;
        self
    }

    pub fn with_unit_size(mut self, unit_size: i32) -> Self {
        self.unit_size = unit_size;
        self
    }

    pub fn with_wall_factor(mut self, wall_factor: i32) -> Self {
        self.wall_factor = wall_factor;
        self
    }

    pub fn with_jumping(mut self, jumping: bool) -> Self {
        self.jumping = jumping;
        self
    }

    pub fn with_stop_at_goal(mut self, stop_at_goal: bool) -> Self {
        self.stop_at_goal = stop_at_goal;
        self
    }
}

/// A named agent kind: how wide it is and how it weighs clearance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    pub name: String,
    pub unit_size: i32,
    pub wall_factor: i32,
}

impl AgentProfile {
    /// Highest wall factor reachable by [`cycle_wall_factor`](Self::cycle_wall_factor).
    pub const WALL_FACTOR_CYCLE: i32 = 8;

    pub fn new(name: impl Into<String>, unit_size: i32, wall_factor: i32) -> Self {
        Self {
            name: name.into(),
            unit_size,
            wall_factor,
        }
    }

    /// Small agent that fits through one-cell gaps and is charged for
    /// clearance, so it keeps close to walls.
    pub fn small() -> Self {
        Self::new("rat", 1, 2)
    }

    /// Large agent that needs two cells of clearance and takes the
    /// shortest route it fits through.
    pub fn large() -> Self {
        Self::new("cat", 2, 0)
    }

    /// Step the wall factor through `0..WALL_FACTOR_CYCLE`, wrapping.
    pub fn cycle_wall_factor(&mut self) {
        self.wall_factor = (self.wall_factor + 1).rem_euclid(Self::WALL_FACTOR_CYCLE);
    }
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self::small()
    }
}
