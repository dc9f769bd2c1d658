//! A rectangular grid map with per-cell traversal costs.
//!
//! Each cell stores an `i32`: zero or positive is the extra cost of entering
//! the cell, negative marks the cell as impassable. The map also carries
//! optional start and finish markers for the search that will run on it.

use crate::error::MapError;
use crate::geom::{Point, Range};

/// Cell value for an impassable cell.
pub const WALL: i32 = -1;

/// Cell value for plain floor with no extra cost.
pub const FLOOR: i32 = 0;

/// Largest accepted width or height.
pub const MAX_SIZE: i32 = 4096;

/// A 2D grid map anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMap2D")
)]
pub struct Map2D {
    bounds: Range,
    cells: Vec<i32>,
    start: Option<Point>,
    finish: Option<Point>,
}

impl Map2D {
    /// Create a `width` x `height` map filled with [`FLOOR`].
    ///
    /// Each side must lie in `1..=MAX_SIZE`.
    pub fn new(width: i32, height: i32) -> Result<Self, MapError> {
        if !(1..=MAX_SIZE).contains(&width) || !(1..=MAX_SIZE).contains(&height) {
            return Err(MapError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        Ok(Self {
            bounds,
            cells: vec![FLOOR; bounds.len()],
            start: None,
            finish: None,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is a cell of this map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width() + p.x) as usize)
    }

    fn check(&self, p: Point) -> Result<usize, MapError> {
        self.index(p).ok_or(MapError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// The value stored at `p`, or `None` outside the map.
    pub fn cell_value(&self, p: Point) -> Option<i32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Store `value` at `p`.
    pub fn set_cell_value(&mut self, p: Point, value: i32) -> Result<(), MapError> {
        let i = self.check(p)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Whether `p` is inside the map and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell_value(p).is_some_and(|v| v >= 0)
    }

    /// Set every cell to `value`. Markers are kept.
    pub fn fill(&mut self, value: i32) {
        self.cells.fill(value);
    }

    /// Number of impassable cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v < 0).count()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn set_start(&mut self, p: Point) -> Result<(), MapError> {
        self.check(p)?;
        self.start = Some(p);
        Ok(())
    }

    pub fn finish(&self) -> Option<Point> {
        self.finish
    }

    pub fn set_finish(&mut self, p: Point) -> Result<(), MapError> {
        self.check(p)?;
        self.finish = Some(p);
        Ok(())
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

/// Unchecked wire form of [`Map2D`]; converted through [`Map2D::new`] so a
/// deserialized map upholds the same invariants as a constructed one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMap2D {
    bounds: Range,
    cells: Vec<i32>,
    start: Option<Point>,
    finish: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMap2D> for Map2D {
    type Error = MapError;

    fn try_from(raw: RawMap2D) -> Result<Self, MapError> {
        if raw.bounds.min != Point::ZERO {
            return Err(MapError::NotAnchored {
                bounds: raw.bounds,
            });
        }
        let mut map = Map2D::new(raw.bounds.width(), raw.bounds.height())?;
        if raw.cells.len() != map.cells.len() {
            return Err(MapError::CellCount {
                expected: map.cells.len(),
                found: raw.cells.len(),
            });
        }
        map.cells = raw.cells;
        if let Some(p) = raw.start {
            map.set_start(p)?;
        }
        if let Some(p) = raw.finish {
            map.set_finish(p)?;
        }
        Ok(map)
    }
}
