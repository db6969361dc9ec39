//! Integer distance metrics.
//!
//! Euclidean distances are rounded *up* (`ceil(sqrt(dx² + dy²))`) and served
//! from a lookup table computed at compile time, so neither the clearance
//! builder nor the search touches floating point.

use std::fmt;
use std::str::FromStr;

use clearpath_core::Point;

/// Largest `|dx|` / `|dy|` served from the Euclidean lookup table.
pub const TABLE_SPAN: i32 = 15;

const TABLE_LEN: usize = (2 * TABLE_SPAN * TABLE_SPAN + 1) as usize;

static CEIL_SQRT: [u8; TABLE_LEN] = build_ceil_sqrt_table();

const fn build_ceil_sqrt_table() -> [u8; TABLE_LEN] {
    let mut table = [0u8; TABLE_LEN];
    let mut n = 0;
    while n < TABLE_LEN {
        table[n] = ceil_sqrt(n as u64) as u8;
        n += 1;
    }
    table
}

/// Smallest integer `d` with `d * d >= n`.
#[inline]
pub const fn ceil_sqrt(n: u64) -> u64 {
    let r = n.isqrt();
    if r * r < n { r + 1 } else { r }
}

/// `ceil(sqrt(dx² + dy²))`.
#[inline]
pub fn euclidean(dx: i32, dy: i32) -> i32 {
    let (ax, ay) = (dx.unsigned_abs() as u64, dy.unsigned_abs() as u64);
    if ax <= TABLE_SPAN as u64 && ay <= TABLE_SPAN as u64 {
        return CEIL_SQRT[(ax * ax + ay * ay) as usize] as i32;
    }
    i32::try_from(ceil_sqrt(ax * ax + ay * ay)).unwrap_or(i32::MAX)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Distance function used to build a clearance field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// `ceil(sqrt(dx² + dy²))`.
    #[default]
    Euclidean,
    /// `max(|dx|, |dy|)`.
    Chebyshev,
    /// `|dx| + |dy|`.
    Manhattan,
}

impl Metric {
    /// Every metric, in cycling order.
    pub const ALL: [Metric; 3] = [Metric::Euclidean, Metric::Chebyshev, Metric::Manhattan];

    /// Distance of the offset `(dx, dy)` under this metric.
    #[inline]
    pub fn distance(self, dx: i32, dy: i32) -> i32 {
        match self {
            Metric::Euclidean => euclidean(dx, dy),
            Metric::Chebyshev => dx.abs().max(dy.abs()),
            Metric::Manhattan => dx.abs() + dy.abs(),
        }
    }

    /// Distance between two points under this metric.
    #[inline]
    pub fn between(self, a: Point, b: Point) -> i32 {
        self.distance(a.x - b.x, a.y - b.y)
    }

    /// The metric after this one in [`Metric::ALL`], wrapping around.
    pub fn next(self) -> Metric {
        match self {
            Metric::Euclidean => Metric::Chebyshev,
            Metric::Chebyshev => Metric::Manhattan,
            Metric::Manhattan => Metric::Euclidean,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Chebyshev => "chebyshev",
            Metric::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Returned when parsing a [`Metric`] from an unrecognised name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown metric \u{201c}{}\u{201d} (expected euclidean, chebyshev or manhattan)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMetric {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_float_ceil_sqrt() {
        for dy in -TABLE_SPAN..=TABLE_SPAN {
            for dx in -TABLE_SPAN..=TABLE_SPAN {
                let expect = ((dx * dx + dy * dy) as f64).sqrt().ceil() as i32;
                assert_eq!(euclidean(dx, dy), expect, "offset ({dx}, {dy})");
            }
        }
    }

    #[test]
    fn euclidean_outside_table() {
        assert_eq!(euclidean(16, 0), 16);
        assert_eq!(euclidean(30, 40), 50);
        assert_eq!(euclidean(-20, 1), 21);
        assert_eq!(euclidean(i32::MIN, i32::MIN), i32::MAX);
    }

    #[test]
    fn ceil_sqrt_exact_squares() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(100), 10);
        assert_eq!(ceil_sqrt(101), 11);
    }

    #[test]
    fn metric_variants() {
        assert_eq!(Metric::Euclidean.distance(1, 1), 2);
        assert_eq!(Metric::Euclidean.distance(3, -4), 5);
        assert_eq!(Metric::Chebyshev.distance(3, -4), 4);
        assert_eq!(Metric::Manhattan.distance(3, -4), 7);
        assert_eq!(Metric::Manhattan.distance(0, 0), 0);
        assert_eq!(
            Metric::Chebyshev.between(Point::new(1, 1), Point::new(4, 3)),
            chebyshev(Point::new(1, 1), Point::new(4, 3))
        );
        assert_eq!(manhattan(Point::new(1, 1), Point::new(4, 3)), 5);
    }

    #[test]
    fn metric_cycles_through_all() {
        let mut m = Metric::default();
        for expected in Metric::ALL {
            assert_eq!(m, expected);
            m = m.next();
        }
        assert_eq!(m, Metric::Euclidean);
    }

    #[test]
    fn metric_parses_names() {
        for m in Metric::ALL {
            assert_eq!(m.to_string().parse::<Metric>(), Ok(m));
        }
        assert_eq!(" Manhattan ".parse::<Metric>(), Ok(Metric::Manhattan));
        assert!("taxicab".parse::<Metric>().is_err());
    }
}
