//! Geometry primitive: [`Coord`].
//!
//! Grid searches only ever visit cells with non-negative coordinates, so
//! unlike a screen point a `Coord` is unsigned and moves that would leave
//! the first quadrant are reported as `None` rather than wrapping.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell address. X grows right, Y grows down.
///
/// Ordering is row-major (`y` first, then `x`), which is also the order
/// [`WeightedGrid::coords`](crate::WeightedGrid::coords) yields cells in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the coordinate shifted by (dx, dy), or `None` if either axis
    /// would go negative.
    #[inline]
    pub fn shift(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cardinal neighbours (up, right, down, left) that exist in the
    /// first quadrant. Upper bounds are the caller's business.
    pub fn neighbors_4(self) -> impl Iterator<Item = Coord> {
        const DIRS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        DIRS.into_iter().filter_map(move |(dx, dy)| self.shift(dx, dy))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}
