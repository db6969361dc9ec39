//! Reconstructed routes and their geometry.

use clearpath_core::Point;

use crate::distance::euclidean;
use crate::scoremap::ScoreMap;

/// Ordered route from start to goal, both inclusive.
///
/// An empty path means no route was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Walk predecessor links in `map` from `goal` back to `start`.
    ///
    /// Returns an empty path if `goal` was not reached. The result never
    /// holds more points than the map has cells, so a malformed predecessor
    /// chain cannot loop forever; in that case the route is cut short and
    /// the start is still appended.
    pub fn reconstruct(map: &ScoreMap, start: Point, goal: Point) -> Self {
        if map.score_at(goal) == 0 {
            return Self::default();
        }

        // Leave room for the start.
        let limit = map.range().len().saturating_sub(1);
        let mut points = Vec::new();
        let mut cur = goal;
        while cur != start && points.len() < limit {
            let Some(node) = map.at(cur).filter(|n| n.is_visited()) else {
                break;
            };
            points.push(cur);
            let Some(prev) = node.from else {
                break;
            };
            cur = prev;
        }
        points.push(start);
        points.reverse();
        Self { points }
    }

    /// The route's cells, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cells on the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no route was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First cell.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last cell.
    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Iterate over consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Rounded-up Euclidean length of each step, matching the jump table.
    pub fn step_distances(&self) -> impl Iterator<Item = i32> + '_ {
        self.steps().map(|(a, b)| euclidean(b.x - a.x, b.y - a.y))
    }

    /// Sum of the Euclidean lengths of all steps.
    pub fn length(&self) -> f32 {
        self.steps().map(|(a, b)| a.distance_to(b)).sum()
    }

    /// Interpolated position after travelling `distance` cells along the path.
    ///
    /// Returns `None` for an empty path, a negative distance, or once
    /// `distance` exceeds [`length`](Self::length). A single-cell path yields
    /// that cell for a distance of zero.
    pub fn position_at(&self, distance: f32) -> Option<(f32, f32)> {
        if distance < 0.0 {
            return None;
        }
        if let [only] = self.points.as_slice() {
            return (distance == 0.0).then_some((only.x as f32, only.y as f32));
        }
        let mut travelled = 0.0;
        for (a, b) in self.steps() {
            let d = a.distance_to(b);
            if travelled + d >= distance {
                let t = if d > 0.0 { (distance - travelled) / d } else { 0.0 };
                let x = a.x as f32 + (b.x - a.x) as f32 * t;
                let y = a.y as f32 + (b.y - a.y) as f32 * t;
                return Some((x, y));
            }
            travelled += d;
        }
        None
    }

    /// Consume the path into its cells.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Position on `path` after `walked` cells, with a caller-owned accumulator.
///
/// Once `walked` runs past the end of the path it is reset to zero and
/// `None` is returned; restarting is left to the caller.
pub fn position_at_distance(path: &Path, walked: &mut f32) -> Option<(f32, f32)> {
    let pos = path.position_at(*walked);
    if pos.is_none() {
        *walked = 0.0;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoremap::SearchNode;
    use clearpath_core::Range;

    fn approx(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4
    }

    fn chain(map: &mut ScoreMap, links: &[(Point, Option<Point>, i32)]) {
        let rng = map.range();
        for &(pos, from, score) in links {
            let i = rng.index(pos).unwrap();
            *map.node_mut(i) = SearchNode { pos, from, score };
        }
    }

    #[test]
    fn reconstruct_follows_links() {
        let mut map = ScoreMap::new(Range::new(0, 0, 6, 6));
        let (a, b, c) = (Point::new(0, 0), Point::new(3, 0), Point::new(3, 4));
        chain(&mut map, &[(a, None, 1), (b, Some(a), 4), (c, Some(b), 8)]);
        let path = map.path_to(a, c);
        assert_eq!(path.points(), &[a, b, c]);
        assert_eq!(path.start(), Some(a));
        assert_eq!(path.goal(), Some(c));
        assert!((path.length() - 7.0).abs() < 1e-6);
        assert_eq!(path.step_distances().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn reconstruct_unreached_goal_is_empty() {
        let map = ScoreMap::new(Range::new(0, 0, 4, 4));
        let path = map.path_to(Point::new(0, 0), Point::new(3, 3));
        assert!(path.is_empty());
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.position_at(0.0), None);
    }

    #[test]
    fn reconstruct_start_equals_goal() {
        let mut map = ScoreMap::new(Range::new(0, 0, 3, 3));
        let s = Point::new(1, 1);
        chain(&mut map, &[(s, None, 1)]);
        assert_eq!(map.path_to(s, s).points(), &[s]);
    }

    #[test]
    fn reconstruct_stops_on_cycle() {
        let mut map = ScoreMap::new(Range::new(0, 0, 3, 1));
        let (a, b, c) = (Point::new(0, 0), Point::new(1, 0), Point::new(2, 0));
        // b and c point at each other; the start is never reached.
        chain(&mut map, &[(a, None, 1), (b, Some(c), 2), (c, Some(b), 3)]);
        let path = map.path_to(a, c);
        assert_eq!(path.len(), map.range().len());
        assert_eq!(path.start(), Some(a));
        assert_eq!(path.goal(), Some(c));
    }

    #[test]
    fn position_interpolates_segments() {
        let path = Path::from(vec![Point::new(0, 0), Point::new(4, 0), Point::new(4, 3)]);
        assert!((path.length() - 7.0).abs() < 1e-6);
        assert!(approx(path.position_at(0.0).unwrap(), (0.0, 0.0)));
        assert!(approx(path.position_at(2.0).unwrap(), (2.0, 0.0)));
        assert!(approx(path.position_at(4.0).unwrap(), (4.0, 0.0)));
        assert!(approx(path.position_at(5.5).unwrap(), (4.0, 1.5)));
        assert!(approx(path.position_at(7.0).unwrap(), (4.0, 3.0)));
        assert_eq!(path.position_at(7.5), None);
        assert_eq!(path.position_at(-1.0), None);
    }

    #[test]
    fn position_on_diagonal() {
        let path = Path::from(vec![Point::new(0, 0), Point::new(3, 4)]);
        assert!(approx(path.position_at(2.5).unwrap(), (1.5, 2.0)));
    }

    #[test]
    fn single_cell_path() {
        let path = Path::from(vec![Point::new(2, 5)]);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.position_at(0.0), Some((2.0, 5.0)));
        assert_eq!(path.position_at(0.5), None);
    }

    #[test]
    fn accumulator_resets_past_end() {
        let path = Path::from(vec![Point::new(0, 0), Point::new(2, 0)]);
        let mut walked = 1.0;
        assert!(approx(position_at_distance(&path, &mut walked).unwrap(), (1.0, 0.0)));
        assert_eq!(walked, 1.0);
        walked = 3.0;
        assert_eq!(position_at_distance(&path, &mut walked), None);
        assert_eq!(walked, 0.0);
    }
}
