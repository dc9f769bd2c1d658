use std::fmt;

use crate::geom::{Point, Range};

/// Errors raised while building or editing a [`Map2D`](crate::Map2D).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Width or height was outside `1..=MAX_SIZE`.
    InvalidDimensions { width: i32, height: i32 },
    /// A point lies outside the map bounds.
    OutOfBounds { pos: Point, bounds: Range },
    /// A layout row has a different width than the first row.
    InconsistentSize { row: i32, expected: i32, found: i32 },
    /// A layout contains a character with no terrain meaning.
    InvalidRune { ch: char, pos: Point },
    /// A layout contains more than one start or finish marker.
    DuplicateMarker { ch: char, pos: Point },
    /// A layout contained no cells.
    Empty,
    /// Stored bounds do not start at the origin.
    NotAnchored { bounds: Range },
    /// Stored cells do not cover the bounds exactly.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "map: invalid dimensions {width}x{height}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "map: point {pos} outside bounds {bounds}")
            }
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}"
                )
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::Empty => f.write_str("layout: no cells"),
            Self::NotAnchored { bounds } => {
                write!(f, "map: bounds {bounds} do not start at the origin")
            }
            Self::CellCount { expected, found } => {
                write!(f, "map: expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for MapError {}
