//! Random obstacle layouts for demos and tests.
//!
//! [`scatter_blocks`] clears the grid and stamps square blobs at random
//! positions away from the borders. Each stamp either blocks or clears its
//! square, so later stamps carve openings into earlier ones.

use clearpath_core::{ObstacleGrid, Range};
use rand::{Rng, RngExt};

/// Parameters for [`scatter_blocks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterConfig {
    /// Number of stamps.
    pub count: usize,
    /// Minimum distance from a stamp's centre to the grid border.
    /// Clamped so that small grids still have a valid centre range.
    pub margin: i32,
    /// Stamps are squares of half-size `1..=max_half_size`.
    pub max_half_size: i32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 40,
            margin: 15,
            max_half_size: 2,
        }
    }
}

/// Inclusive `[lo, hi]` range of stamp centres along an axis of length `len`.
///
/// Both ends sit `margin` cells in from the axis ends, `len - margin`
/// included.
fn centre_span(len: i32, margin: i32) -> (i32, i32) {
    let lo = margin.clamp(0, ((len - 1) / 2).max(0));
    let hi = (len - margin).clamp(lo, (len - 1).max(lo));
    (lo, hi)
}

/// Clear `grid` and scatter `cfg.count` random square stamps over it.
///
/// Returns the number of blocked cells afterwards.
pub fn scatter_blocks(grid: &mut ObstacleGrid, rng: &mut impl Rng, cfg: &ScatterConfig) -> usize {
    grid.clear();
    let bounds = grid.bounds();
    if bounds.is_empty() {
        return 0;
    }

    let (x0, x1) = centre_span(grid.width(), cfg.margin);
    let (y0, y1) = centre_span(grid.height(), cfg.margin);
    let max_half = cfg.max_half_size.max(1);

    for _ in 0..cfg.count {
        let x = bounds.min.x + rng.random_range(x0..=x1);
        let y = bounds.min.y + rng.random_range(y0..=y1);
        let s = rng.random_range(1..=max_half);
        let blocked = rng.random_bool(0.5);
        grid.fill_range(Range::new(x - s, y - s, x + s + 1, y + s + 1), blocked);
    }

    let n = grid.count_blocked();
    log::debug!("scattered {} stamps, {} cells blocked", cfg.count, n);
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearpath_core::Point;
    use rand::SeedableRng;

    #[test]
    fn same_seed_same_layout() {
        let cfg = ScatterConfig::default();
        let mut a = ObstacleGrid::new(80, 45);
        let mut b = ObstacleGrid::new(80, 45);
        scatter_blocks(&mut a, &mut rand::rngs::StdRng::seed_from_u64(3), &cfg);
        scatter_blocks(&mut b, &mut rand::rngs::StdRng::seed_from_u64(3), &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn respects_margin() {
        let cfg = ScatterConfig::default();
        let mut grid = ObstacleGrid::new(80, 45);
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for _ in 0..10 {
            scatter_blocks(&mut grid, &mut rng, &cfg);
            // Centres lie in [15, 65] x [15, 30], stamps reach 2 further.
            let inner = Range::new(13, 13, 68, 33);
            assert!(grid.blocked().all(|p| inner.contains(p)));
        }
    }

    #[test]
    fn clears_previous_obstacles() {
        let mut grid = ObstacleGrid::new(40, 30);
        grid.set(Point::new(0, 0), true);
        let cfg = ScatterConfig {
            count: 0,
            ..ScatterConfig::default()
        };
        assert_eq!(scatter_blocks(&mut grid, &mut rand::rngs::StdRng::seed_from_u64(0), &cfg), 0);
        assert_eq!(grid.count_blocked(), 0);
    }

    #[test]
    fn small_grid_stays_in_bounds() {
        let mut grid = ObstacleGrid::new(5, 3);
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let cfg = ScatterConfig {
            count: 20,
            ..ScatterConfig::default()
        };
        let n = scatter_blocks(&mut grid, &mut rng, &cfg);
        assert!(n <= 15);
        assert_eq!(centre_span(5, 15), (2, 2));
        assert_eq!(centre_span(1, 15), (0, 0));
        assert_eq!(centre_span(80, 15), (15, 65));
        assert_eq!(centre_span(45, 15), (15, 30));
        assert_eq!(centre_span(30, 15), (14, 15));
    }
}
