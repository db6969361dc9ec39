//! Clearance field: per-cell distance to the nearest blocked cell.
//!
//! The field saturates at a maximum radius `R`: every cell further than `R`
//! from any obstacle reports exactly `R`, and blocked cells report `0`.
//!
//! The builder is a brute-force "splat": every blocked cell writes its
//! distance into the `(2R+1)²` window around it, keeping the minimum. This is
//! `O(blocked × R²)` and meant to run only when obstacles change. A linear
//! distance transform could replace it as long as the saturating
//! min-distance contract is kept.

use std::fmt;

use clearpath_core::{ObstacleGrid, Point, Range};

use crate::distance::{Metric, TABLE_SPAN};

/// Default maximum clearance radius.
pub const DEFAULT_RADIUS: i32 = 10;

/// Largest supported radius. Keeps every Euclidean lookup in-table.
pub const MAX_RADIUS: i32 = TABLE_SPAN;

/// Per-cell integer distance to the nearest blocked cell, capped at a radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearanceField {
    rng: Range,
    radius: i32,
    metric: Metric,
    cells: Vec<u8>,
}

impl ClearanceField {
    /// Build the field for `grid` with the default radius.
    pub fn build(grid: &ObstacleGrid, metric: Metric) -> Self {
        let mut field = Self::empty(grid.bounds(), DEFAULT_RADIUS, metric);
        field.rebuild(grid);
        field
    }

    /// Build the field for `grid` with a custom radius in `1..=MAX_RADIUS`.
    pub fn with_radius(
        grid: &ObstacleGrid,
        metric: Metric,
        radius: i32,
    ) -> Result<Self, ClearanceError> {
        if !(1..=MAX_RADIUS).contains(&radius) {
            return Err(ClearanceError::InvalidRadius(radius));
        }
        let mut field = Self::empty(grid.bounds(), radius, metric);
        field.rebuild(grid);
        Ok(field)
    }

    fn empty(rng: Range, radius: i32, metric: Metric) -> Self {
        Self {
            rng,
            radius,
            metric,
            cells: vec![radius as u8; rng.len()],
        }
    }

    /// Recompute the field in place from the current obstacles.
    ///
    /// If the grid was resized since the last build, the buffer is
    /// reallocated to match.
    pub fn rebuild(&mut self, grid: &ObstacleGrid) {
        self.rng = grid.bounds();
        self.cells.clear();
        self.cells.resize(self.rng.len(), self.radius as u8);

        let r = self.radius;
        let mut blocked = 0usize;
        for src in grid.blocked() {
            blocked += 1;
            let window = Range::new(src.x - r, src.y - r, src.x + r + 1, src.y + r + 1);
            for p in self.rng.intersect(window) {
                let d = self.metric.distance(src.x - p.x, src.y - p.y);
                let Some(i) = self.rng.index(p) else {
                    continue;
                };
                if d < r && d < self.cells[i] as i32 {
                    self.cells[i] = d as u8;
                }
            }
        }

        log::debug!(
            "clearance field rebuilt: {}x{}, {} blocked cells, metric {}, radius {}",
            self.rng.width(),
            self.rng.height(),
            blocked,
            self.metric,
            r
        );
    }

    /// Switch metric and rebuild.
    pub fn set_metric(&mut self, metric: Metric, grid: &ObstacleGrid) {
        self.metric = metric;
        self.rebuild(grid);
    }

    /// Clearance at `p`, or `None` if `p` is outside the field.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.rng.index(p).map(|i| self.cells[i] as i32)
    }

    /// Clearance at flat index `i`. Callers guarantee `i < len`.
    #[inline]
    pub(crate) fn at_index(&self, i: usize) -> i32 {
        self.cells[i] as i32
    }

    /// The saturation radius `R`.
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The metric the field was built with.
    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The grid rectangle covered by the field.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Row-major clearance values, for visualization.
    pub fn values(&self) -> &[u8] {
        &self.cells
    }
}

/// Errors from building a [`ClearanceField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearanceError {
    /// Radius outside `1..=MAX_RADIUS`.
    InvalidRadius(i32),
}

impl fmt::Display for ClearanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius(r) => {
                write!(f, "clearance radius {r} outside 1..={MAX_RADIUS}")
            }
        }
    }
}

impl std::error::Error for ClearanceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngExt, SeedableRng};

    /// Brute force over every blocked cell, no window clipping.
    fn brute_force(grid: &ObstacleGrid, metric: Metric, r: i32) -> Vec<u8> {
        grid.bounds()
            .iter()
            .map(|p| {
                grid.blocked()
                    .map(|b| metric.between(b, p))
                    .filter(|&d| d < r)
                    .min()
                    .unwrap_or(r) as u8
            })
            .collect()
    }

    #[test]
    fn open_grid_saturates() {
        let grid = ObstacleGrid::new(20, 12);
        let field = ClearanceField::build(&grid, Metric::Euclidean);
        assert_eq!(field.radius(), DEFAULT_RADIUS);
        assert!(field.values().iter().all(|&c| c as i32 == DEFAULT_RADIUS));
    }

    #[test]
    fn single_obstacle_distances() {
        let mut grid = ObstacleGrid::new(30, 30);
        let c = Point::new(15, 15);
        grid.set(c, true);

        let field = ClearanceField::build(&grid, Metric::Euclidean);
        assert_eq!(field.at(c), Some(0));
        assert_eq!(field.at(Point::new(16, 15)), Some(1));
        assert_eq!(field.at(Point::new(16, 16)), Some(2));
        assert_eq!(field.at(Point::new(18, 19)), Some(5));
        assert_eq!(field.at(Point::new(24, 15)), Some(9));
        // d == R is not stored, so it saturates to R anyway.
        assert_eq!(field.at(Point::new(25, 15)), Some(10));
        assert_eq!(field.at(Point::new(0, 0)), Some(10));
        assert_eq!(field.at(Point::new(30, 0)), None);

        let cheb = ClearanceField::build(&grid, Metric::Chebyshev);
        assert_eq!(cheb.at(Point::new(18, 19)), Some(4));
        let manh = ClearanceField::build(&grid, Metric::Manhattan);
        assert_eq!(manh.at(Point::new(18, 19)), Some(7));
    }

    #[test]
    fn matches_brute_force_on_random_maps() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for metric in Metric::ALL {
            let mut grid = ObstacleGrid::new(25, 18);
            for _ in 0..20 {
                let p = Point::new(rng.random_range(0..25), rng.random_range(0..18));
                grid.set(p, true);
            }
            let field = ClearanceField::with_radius(&grid, metric, 6).unwrap();
            assert_eq!(field.values(), brute_force(&grid, metric, 6).as_slice());
        }
    }

    #[test]
    fn adding_obstacles_never_increases_clearance() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        let mut grid = ObstacleGrid::new(32, 24);
        let mut field = ClearanceField::build(&grid, Metric::Euclidean);
        for _ in 0..40 {
            let before = field.values().to_vec();
            let p = Point::new(rng.random_range(0..32), rng.random_range(0..24));
            grid.set(p, true);
            field.rebuild(&grid);
            assert_eq!(field.at(p), Some(0));
            for (a, b) in before.iter().zip(field.values()) {
                assert!(b <= a);
            }
        }
    }

    #[test]
    fn rebuild_follows_grid_changes() {
        let mut grid = ObstacleGrid::new(8, 8);
        grid.set(Point::new(0, 0), true);
        let mut field = ClearanceField::build(&grid, Metric::Euclidean);
        assert_eq!(field.at(Point::new(1, 0)), Some(1));

        grid.clear();
        field.rebuild(&grid);
        assert_eq!(field.at(Point::new(1, 0)), Some(10));

        grid.set(Point::new(7, 7), true);
        field.set_metric(Metric::Manhattan, &grid);
        assert_eq!(field.metric(), Metric::Manhattan);
        assert_eq!(field.at(Point::new(5, 6)), Some(3));
    }

    #[test]
    fn radius_is_validated() {
        let grid = ObstacleGrid::new(4, 4);
        assert_eq!(
            ClearanceField::with_radius(&grid, Metric::Euclidean, 0),
            Err(ClearanceError::InvalidRadius(0))
        );
        assert!(ClearanceField::with_radius(&grid, Metric::Euclidean, MAX_RADIUS + 1).is_err());
        let field = ClearanceField::with_radius(&grid, Metric::Euclidean, MAX_RADIUS).unwrap();
        assert_eq!(field.at(Point::new(2, 2)), Some(MAX_RADIUS));
    }
}
