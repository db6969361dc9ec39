use clearpath_core::{Point, Range};

use crate::path::Path;

/// Per-cell record of a search run.
///
/// `score == 0` means the cell was not reached; otherwise `score` is the
/// cumulative cost of the best known route from the start (which itself has
/// score 1) and `from` is the cell that route arrives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Point,
    pub from: Option<Point>,
    pub score: i32,
}

impl SearchNode {
    /// Whether the search reached this cell.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.score > 0
    }
}

/// Full-grid array of [`SearchNode`]s produced by one search.
///
/// Every search constructs a fresh `ScoreMap`, so scores never leak from
/// one run into the next. After the search the map belongs to the caller,
/// who can reconstruct paths from it or render the cost frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreMap {
    rng: Range,
    nodes: Vec<SearchNode>,
}

impl ScoreMap {
    /// A map over `rng` where every cell is unvisited.
    pub fn new(rng: Range) -> Self {
        let nodes = rng
            .iter()
            .map(|pos| SearchNode {
                pos,
                from: None,
                score: 0,
            })
            .collect();
        Self { rng, nodes }
    }

    /// The grid rectangle covered by the map.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The node at `p`, or `None` if `p` is outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&SearchNode> {
        self.rng.index(p).map(|i| &self.nodes[i])
    }

    /// Score at `p`; 0 for unvisited or out-of-range cells.
    #[inline]
    pub fn score_at(&self, p: Point) -> i32 {
        self.at(p).map_or(0, |n| n.score)
    }

    /// Predecessor of `p` on its best known route.
    #[inline]
    pub fn from_at(&self, p: Point) -> Option<Point> {
        self.at(p).and_then(|n| n.from)
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Visited nodes in row-major order.
    pub fn visited(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter().filter(|n| n.is_visited())
    }

    /// Largest score in the map, 0 if nothing was visited.
    pub fn max_score(&self) -> i32 {
        self.nodes.iter().map(|n| n.score).max().unwrap_or(0)
    }

    /// Reconstruct the route from `start` to `goal`.
    ///
    /// Returns an empty path if `goal` was not reached.
    pub fn path_to(&self, start: Point, goal: Point) -> Path {
        Path::reconstruct(self, start, goal)
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_unvisited() {
        let m = ScoreMap::new(Range::new(0, 0, 4, 3));
        assert_eq!(m.nodes().len(), 12);
        assert_eq!(m.visited().count(), 0);
        assert_eq!(m.max_score(), 0);
        assert_eq!(m.at(Point::new(3, 2)).map(|n| n.pos), Some(Point::new(3, 2)));
        assert_eq!(m.score_at(Point::new(9, 9)), 0);
        assert_eq!(m.from_at(Point::new(1, 1)), None);
    }

    #[test]
    fn node_mut_updates_lookup() {
        let rng = Range::new(0, 0, 4, 3);
        let mut m = ScoreMap::new(rng);
        let i = rng.index(Point::new(2, 1)).unwrap();
        *m.node_mut(i) = SearchNode {
            pos: Point::new(2, 1),
            from: Some(Point::new(1, 1)),
            score: 7,
        };
        assert_eq!(m.score_at(Point::new(2, 1)), 7);
        assert_eq!(m.from_at(Point::new(2, 1)), Some(Point::new(1, 1)));
        assert_eq!(m.node(i).score, 7);
        assert_eq!(m.max_score(), 7);
        assert_eq!(m.visited().count(), 1);
    }
}
