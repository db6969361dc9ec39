//! The obstacle bitmap.
//!
//! [`ObstacleGrid`] is a plain owned buffer of `bool` cells laid out
//! row-major over a [`Range`]. It is mutated by the caller (painting,
//! random scattering, parsing) and read by the clearance field builder.

use std::fmt;

use crate::geom::{Point, Range};

/// Character used for blocked cells in text maps.
pub const BLOCKED_CHAR: char = '#';
/// Character used for open cells in text maps.
pub const OPEN_CHAR: char = '.';

/// A 2D grid of obstacle flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleGrid {
    bounds: Range,
    cells: Vec<bool>,
}

impl ObstacleGrid {
    /// Create a new grid of the given size with no blocked cells.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            bounds,
            cells: vec![false; bounds.len()],
        }
    }

    /// Parse a text map: one line per row, `#` for blocked and `.` for open.
    ///
    /// Leading and trailing blank lines are ignored, as is surrounding
    /// whitespace on each line, so maps can be written as indented string
    /// literals.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        let lines = &lines[..end];

        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Self::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(ParseError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found: line.chars().count(),
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let blocked = match ch {
                    BLOCKED_CHAR => true,
                    OPEN_CHAR => false,
                    _ => {
                        return Err(ParseError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                grid.set(Point::new(x as i32, y as i32), blocked);
            }
        }
        Ok(grid)
    }

    /// Returns the bounding range of the grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the grid.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether the cell at `p` is blocked, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<bool> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether the cell at `p` is blocked. Out-of-bounds cells report `false`.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).unwrap_or(false)
    }

    /// Set the obstacle flag at a point.
    ///
    /// Returns `false` (and does nothing) if `p` is out of bounds.
    pub fn set(&mut self, p: Point, blocked: bool) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = blocked;
                true
            }
            None => false,
        }
    }

    /// Flip the obstacle flag at `p` and return the new value.
    pub fn toggle(&mut self, p: Point) -> Option<bool> {
        let i = self.bounds.index(p)?;
        self.cells[i] = !self.cells[i];
        Some(self.cells[i])
    }

    /// Set every cell of `rng` (clipped to the grid) to `blocked`.
    pub fn fill_range(&mut self, rng: Range, blocked: bool) {
        for p in self.bounds.intersect(rng) {
            self.set(p, blocked);
        }
    }

    /// Set every cell to `blocked`.
    pub fn fill(&mut self, blocked: bool) {
        self.cells.fill(blocked);
    }

    /// Remove every obstacle.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Iterate over the positions of blocked cells in row-major order.
    pub fn blocked(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter_map(|(p, b)| b.then_some(p))
    }

    /// Iterate over `(Point, blocked)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Row-major view of the raw cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, blocked) in self.iter() {
            if p.x == self.bounds.min.x && p.y != self.bounds.min.y {
                writeln!(f)?;
            }
            let ch = if blocked { BLOCKED_CHAR } else { OPEN_CHAR };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line's width differs from the first line.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = ObstacleGrid::parse("#..\n.#.").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: ObstacleGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
