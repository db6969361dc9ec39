//! Colour rendering of a grid, a background layer and search paths.

use std::collections::HashMap;
use std::io::{self, Write};

use clearpath_core::{ObstacleGrid, Point};
use clearpath_paths::{ClearanceField, Path, ScoreMap};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

/// Blocked cell.
pub const WALL_FG: Color = Color::Rgb { r: 150, g: 155, b: 170 };
pub const WALL_BG: Color = Color::Rgb { r: 60, g: 62, b: 70 };
/// Open cell glyph.
pub const FLOOR_FG: Color = Color::Rgb { r: 110, g: 115, b: 125 };
/// Cell on more than one path.
pub const SHARED_FG: Color = Color::Rgb { r: 248, g: 248, b: 242 };

/// Cell never reached by the shown search.
pub const UNVISITED_BG: Color = Color::Rgb { r: 12, g: 12, b: 16 };

/// What the background of open cells shows.
#[derive(Clone, Copy)]
pub enum Layer<'a> {
    /// Distance to the nearest obstacle.
    Clearance(&'a ClearanceField),
    /// Cost of reaching each cell, scaled to the largest score in the map.
    Scores(&'a ScoreMap),
}

impl Layer<'_> {
    fn background(&self, p: Point) -> Color {
        match self {
            Layer::Clearance(field) => shade(field.at(p).unwrap_or(0), field.radius()),
            Layer::Scores(map) => match map.score_at(p) {
                0 => UNVISITED_BG,
                s => heat(s, map.max_score()),
            },
        }
    }
}

/// A path to draw, with its glyph and colour.
pub struct Overlay<'a> {
    pub path: &'a Path,
    pub glyph: char,
    pub fg: Color,
}

/// Background shade for a clearance value: darker near walls.
fn shade(clearance: i32, radius: i32) -> Color {
    let t = clearance.clamp(0, radius) as f32 / radius.max(1) as f32;
    let v = (16.0 + t * 40.0) as u8;
    Color::Rgb {
        r: v,
        g: v,
        b: v + 8,
    }
}

/// Score shade: cool near the start, warm at the far frontier.
fn heat(score: i32, max: i32) -> Color {
    let t = score.clamp(0, max) as f32 / max.max(1) as f32;
    Color::Rgb {
        r: (30.0 + t * 150.0) as u8,
        g: 30,
        b: (120.0 - t * 90.0) as u8,
    }
}

/// Write the whole grid to `out`, one row per line.
pub fn draw(
    out: &mut impl Write,
    grid: &ObstacleGrid,
    layer: Layer<'_>,
    overlays: &[Overlay<'_>],
) -> io::Result<()> {
    let mut marks: HashMap<Point, (char, Color)> = HashMap::new();
    for ov in overlays {
        for &p in ov.path {
            marks
                .entry(p)
                .and_modify(|m| *m = ('+', SHARED_FG))
                .or_insert((ov.glyph, ov.fg));
        }
    }

    let bounds = grid.bounds();
    for y in bounds.min.y..bounds.max.y {
        for x in bounds.min.x..bounds.max.x {
            let p = Point::new(x, y);
            let (ch, fg, bg) = if grid.is_blocked(p) {
                ('#', WALL_FG, WALL_BG)
            } else {
                let bg = layer.background(p);
                match marks.get(&p) {
                    Some(&(ch, fg)) => (ch, fg, bg),
                    None => ('.', FLOOR_FG, bg),
                }
            };
            queue!(out, SetForegroundColor(fg), SetBackgroundColor(bg), Print(ch))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearpath_paths::{Metric, Pathfinder, SearchConfig};

    #[test]
    fn shade_gets_lighter_with_clearance() {
        let Color::Rgb { r: near, .. } = shade(0, 10) else {
            panic!("expected rgb");
        };
        let Color::Rgb { r: far, .. } = shade(10, 10) else {
            panic!("expected rgb");
        };
        assert!(near < far);
        assert_eq!(shade(25, 10), shade(10, 10));
    }

    #[test]
    fn score_layer_shades_by_max_score() {
        let grid = ObstacleGrid::parse("....\n.##.\n....").unwrap();
        let field = ClearanceField::build(&grid, Metric::Euclidean);
        let res = Pathfinder::new(grid.bounds())
            .search(&field, &SearchConfig::new(Point::ZERO, Point::new(3, 2)).with_stop_at_goal(false))
            .unwrap();
        let layer = Layer::Scores(&res.map);
        assert_eq!(layer.background(Point::new(1, 1)), UNVISITED_BG);
        assert_eq!(layer.background(Point::ZERO), heat(1, res.map.max_score()));
        assert_ne!(layer.background(Point::ZERO), layer.background(Point::new(3, 2)));
        assert_eq!(heat(res.map.max_score(), res.map.max_score()), heat(i32::MAX, res.map.max_score()));
    }

    #[test]
    fn draws_every_cell() {
        let grid = ObstacleGrid::parse("..#\n...").unwrap();
        let field = ClearanceField::build(&grid, Metric::Euclidean);
        let path = Path::from(vec![Point::new(0, 0), Point::new(0, 1)]);
        let mut buf = Vec::new();
        draw(
            &mut buf,
            &grid,
            Layer::Clearance(&field),
            &[Overlay {
                path: &path,
                glyph: 'r',
                fg: Color::Red,
            }],
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches('\n').count(), 2);
        assert_eq!(text.matches('r').count(), 2);
        assert_eq!(text.matches('#').count(), 1);
    }
}
