use clearpath_core::Point;

use crate::distance::euclidean;

/// A relative jump target and its rounded-up Euclidean length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborOffset {
    pub delta: Point,
    pub distance: i32,
}

/// Precomputed table of jump offsets.
///
/// Holds every `(dx, dy)` in `[-R, R]²`, excluding the origin, whose
/// Euclidean distance `ceil(sqrt(dx² + dy²))` is at most `R`. The table is
/// always Euclidean-shaped regardless of the metric used for the clearance
/// field, and it does not depend on agent size.
#[derive(Debug, Clone)]
pub struct NeighborOffsets {
    radius: i32,
    offsets: Vec<NeighborOffset>,
}

impl NeighborOffsets {
    /// Build the table for radius `radius`.
    pub fn new(radius: i32) -> Self {
        let mut offsets = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let distance = euclidean(dx, dy);
                if distance >= 1 && distance <= radius {
                    offsets.push(NeighborOffset {
                        delta: Point::new(dx, dy),
                        distance,
                    });
                }
            }
        }
        Self { radius, offsets }
    }

    /// The radius the table was built for.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the table is empty (only for radius < 1).
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate over all offsets.
    pub fn iter(&self) -> std::slice::Iter<'_, NeighborOffset> {
        self.offsets.iter()
    }

    /// Offsets of length at most `max`, as a filtered iterator.
    pub fn within(&self, max: i32) -> impl Iterator<Item = &NeighborOffset> {
        self.offsets.iter().filter(move |o| o.distance <= max)
    }
}

impl<'a> IntoIterator for &'a NeighborOffsets {
    type Item = &'a NeighborOffset;
    type IntoIter = std::slice::Iter<'a, NeighborOffset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
