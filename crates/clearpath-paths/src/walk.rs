//! Moving an agent along a path over time.

use crate::path::{Path, position_at_distance};

/// Tracks how far an agent has walked along a path.
///
/// Each [`advance`](Self::advance) adds `dt * speed` to the walked distance
/// and returns the interpolated position. Running past the end wraps the
/// walker back to the start of the path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathWalker {
    speed: f32,
    walked: f32,
}

impl PathWalker {
    /// A walker moving at `speed` cells per second.
    pub fn new(speed: f32) -> Self {
        Self { speed, walked: 0.0 }
    }

    /// Cells per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Distance walked since the last wrap or reset.
    pub fn walked(&self) -> f32 {
        self.walked
    }

    /// Restart from the beginning of the path.
    pub fn reset(&mut self) {
        self.walked = 0.0;
    }

    /// Advance by `dt` seconds and return the new position on `path`.
    ///
    /// Returns `None` for an empty path. When the step runs past the end,
    /// the walker wraps to the start and reports the first cell.
    pub fn advance(&mut self, path: &Path, dt: f32) -> Option<(f32, f32)> {
        let start = path.start()?;
        self.walked += dt * self.speed;
        match position_at_distance(path, &mut self.walked) {
            Some(pos) => Some(pos),
            None => Some((start.x as f32, start.y as f32)),
        }
    }

    /// Position for the current walked distance, without advancing.
    pub fn position(&self, path: &Path) -> Option<(f32, f32)> {
        path.position_at(self.walked)
    }
}

impl Default for PathWalker {
    fn default() -> Self {
        Self::new(3.0)
    }
}
