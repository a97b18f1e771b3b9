//! The [`WeightedGrid`] type — an immutable cost surface that can be tiled.
//!
//! A grid is built once from a rectangular block of base costs (`1..=9`).
//! With a tile multiplier `n` the base block repeats `n` times along each
//! axis; every tile step right or down adds one to the cost, wrapping from
//! 9 back to 1.

use crate::error::GridError;
use crate::geom::Coord;

/// Highest cost a cell can carry; one past it wraps to 1.
pub const MAX_COST: u32 = 9;

// ---------------------------------------------------------------------------
// WeightedGrid
// ---------------------------------------------------------------------------

/// A rectangular grid of traversal costs, optionally tiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGrid {
    cells: Vec<u8>,
    base_width: usize,
    base_height: usize,
    tiles: usize,
}

impl WeightedGrid {
    /// Build a grid from rows of base costs, repeated `tiles` times per axis.
    ///
    /// Rows must be non-empty and all the same length, and every cost must
    /// lie in `1..=9`.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R], tiles: usize) -> Result<Self, GridError> {
        if tiles == 0 {
            return Err(GridError::ZeroTiles);
        }
        let base_width = rows.first().map_or(0, |r| r.as_ref().len());
        if base_width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(base_width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != base_width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: base_width,
                    found: row.len(),
                });
            }
            for (x, &cost) in row.iter().enumerate() {
                if !(1..=MAX_COST as i32).contains(&cost) {
                    return Err(GridError::CostOutOfRange {
                        at: Coord::new(x, y),
                        cost,
                    });
                }
                cells.push(cost as u8);
            }
        }

        check_size(base_width, rows.len(), tiles)?;
        Ok(Self {
            cells,
            base_width,
            base_height: rows.len(),
            tiles,
        })
    }

    /// The same base grid under a different tile multiplier.
    pub fn with_tiles(&self, tiles: usize) -> Result<Self, GridError> {
        if tiles == 0 {
            return Err(GridError::ZeroTiles);
        }
        check_size(self.base_width, self.base_height, tiles)?;
        Ok(Self {
            tiles,
            ..self.clone()
        })
    }

    /// Width of the untiled block.
    #[inline]
    pub fn base_width(&self) -> usize {
        self.base_width
    }

    /// Height of the untiled block.
    #[inline]
    pub fn base_height(&self) -> usize {
        self.base_height
    }

    /// Tile multiplier.
    #[inline]
    pub fn tiles(&self) -> usize {
        self.tiles
    }

    /// Tiled width.
    #[inline]
    pub fn width(&self) -> usize {
        self.base_width * self.tiles
    }

    /// Tiled height.
    #[inline]
    pub fn height(&self) -> usize {
        self.base_height * self.tiles
    }

    /// Whether `c` lies inside the tiled bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x < self.width() && c.y < self.height()
    }

    /// Bottom-right cell of the tiled grid.
    #[inline]
    pub fn far_corner(&self) -> Coord {
        Coord::new(self.width() - 1, self.height() - 1)
    }

    /// Cost of entering cell (x, y).
    ///
    /// The coordinate must be inside the tiled bounds; check with
    /// [`contains`](Self::contains) first.
    #[inline]
    pub fn cost_at(&self, x: usize, y: usize) -> u32 {
        debug_assert!(
            self.contains(Coord::new(x, y)),
            "({x}, {y}) outside {}x{} grid",
            self.width(),
            self.height()
        );
        let base = self.cells[(y % self.base_height) * self.base_width + x % self.base_width];
        let bump = ((x / self.base_width + y / self.base_height) % MAX_COST as usize) as u32;
        (u32::from(base) - 1 + bump) % MAX_COST + 1
    }

    /// [`cost_at`](Self::cost_at) taking a [`Coord`].
    #[inline]
    pub fn cost(&self, c: Coord) -> u32 {
        self.cost_at(c.x, c.y)
    }

    /// All tiled coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (w, h) = (self.width(), self.height());
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord::new(x, y)))
    }

    /// The untiled base costs, one `Vec` per row.
    pub fn base_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.base_width)
            .map(|row| row.iter().map(|&c| i32::from(c)).collect())
            .collect()
    }
}

/// Tiled dimensions and the largest tile bump must fit their integer types.
fn check_size(base_width: usize, base_height: usize, tiles: usize) -> Result<(), GridError> {
    let fits = base_width.checked_mul(tiles).is_some()
        && base_height.checked_mul(tiles).is_some()
        && (tiles - 1)
            .checked_mul(2)
            .is_some_and(|bump| u32::try_from(bump).is_ok());
    if fits {
        Ok(())
    } else {
        Err(GridError::TooLarge { tiles })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: Vec<Vec<i32>>,
    tiles: usize,
}

#[cfg(feature = "serde")]
impl serde::Serialize for WeightedGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            rows: self.base_rows(),
            tiles: self.tiles,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WeightedGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        WeightedGrid::from_rows(&repr.rows, repr.tiles).map_err(serde::de::Error::custom)
    }
}
