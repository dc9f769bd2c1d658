//! ASCII map layouts.
//!
//! A layout is a block of text with one line per map row. All rows must
//! have the same width. Leading and trailing whitespace around the whole
//! block is ignored, but not inside rows.
//!
//! | Rune | Meaning |
//! |---|---|
//! | `.` | floor |
//! | `#` | wall |
//! | `1`–`9` | floor with that extra entry cost |
//! | `S` | start marker (floor) |
//! | `F` | finish marker (floor) |

use std::fmt;

use crate::error::MapError;
use crate::geom::Point;
use crate::map::{FLOOR, Map2D, WALL};

/// Rune for the start marker.
pub const START_RUNE: char = 'S';
/// Rune for the finish marker.
pub const FINISH_RUNE: char = 'F';

fn rune_value(ch: char) -> Option<i32> {
    match ch {
        '.' | START_RUNE | FINISH_RUNE => Some(FLOOR),
        '#' => Some(WALL),
        '1'..='9' => ch.to_digit(10).map(|d| d as i32),
        _ => None,
    }
}

fn value_rune(v: i32) -> char {
    match v {
        v if v < 0 => '#',
        0 => '.',
        // Costs above 9 have no rune of their own.
        v => char::from_digit(v.min(9) as u32, 10).unwrap_or('9'),
    }
}

impl Map2D {
    /// Parse a map from an ASCII layout.
    pub fn from_layout(s: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = s.trim().lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count() as i32);
        if width == 0 {
            return Err(MapError::Empty);
        }
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count() as i32;
            if found != width {
                return Err(MapError::InconsistentSize {
                    row: y as i32,
                    expected: width,
                    found,
                });
            }
        }

        let mut map = Map2D::new(width, rows.len() as i32)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let value = rune_value(ch).ok_or(MapError::InvalidRune { ch, pos })?;
                map.set_cell_value(pos, value)?;
                match ch {
                    START_RUNE if map.start().is_some() => {
                        return Err(MapError::DuplicateMarker { ch, pos });
                    }
                    START_RUNE => map.set_start(pos)?,
                    FINISH_RUNE if map.finish().is_some() => {
                        return Err(MapError::DuplicateMarker { ch, pos });
                    }
                    FINISH_RUNE => map.set_finish(pos)?,
                    _ => {}
                }
            }
        }
        Ok(map)
    }

    /// The rune used to draw `p` in a layout, or `None` outside the map.
    pub fn rune_at(&self, p: Point) -> Option<char> {
        let v = self.cell_value(p)?;
        if self.start() == Some(p) {
            Some(START_RUNE)
        } else if self.finish() == Some(p) {
            Some(FINISH_RUNE)
        } else {
            Some(value_rune(v))
        }
    }
}

/// Renders the map back into layout text, without a trailing newline.
impl fmt::Display for Map2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width() {
                let ch = self.rune_at(Point::new(x, y)).unwrap_or(' ');
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#.#
.#..
...F";

    #[test]
    fn parse_room() {
        let m = Map2D::from_layout(ROOM).unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 4);
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert_eq!(m.finish(), Some(Point::new(3, 3)));
        assert_eq!(m.cell_value(Point::new(3, 0)), Some(WALL));
        assert_eq!(m.cell_value(Point::new(1, 1)), Some(WALL));
        assert!(m.is_passable(Point::new(0, 0)));
        assert_eq!(m.wall_count(), 4);
    }

    #[test]
    fn digits_are_costs() {
        let m = Map2D::from_layout("1.9\n#5.").unwrap();
        assert_eq!(m.cell_value(Point::new(0, 0)), Some(1));
        assert_eq!(m.cell_value(Point::new(2, 0)), Some(9));
        assert_eq!(m.cell_value(Point::new(1, 1)), Some(5));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let m = Map2D::from_layout("\n\n..\n..\n\n").unwrap();
        assert_eq!(m.height(), 2);

        // Whitespace inside a row is part of the row.
        let err = Map2D::from_layout(". .\n...").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidRune {
                ch: ' ',
                pos: Point::new(1, 0)
            }
        );
    }

    #[test]
    fn display_round_trips() {
        let m = Map2D::from_layout(ROOM).unwrap();
        assert_eq!(m.to_string(), ROOM);
        let again = Map2D::from_layout(&m.to_string()).unwrap();
        assert_eq!(again, m);
    }

    #[test]
    fn large_costs_render_as_nine() {
        let mut m = Map2D::new(2, 1).unwrap();
        m.set_cell_value(Point::new(1, 0), 42).unwrap();
        assert_eq!(m.to_string(), ".9");
        assert_eq!(m.rune_at(Point::new(2, 0)), None);
    }

    #[test]
    fn inconsistent_size_error() {
        assert_eq!(
            Map2D::from_layout("...\n....").unwrap_err(),
            MapError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn invalid_rune_error() {
        let err = Map2D::from_layout("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn duplicate_marker_error() {
        let err = Map2D::from_layout("S.\n.S").unwrap_err();
        assert!(matches!(err, MapError::DuplicateMarker { ch: 'S', .. }));
        let err = Map2D::from_layout("FF").unwrap_err();
        assert_eq!(
            err,
            MapError::DuplicateMarker {
                ch: 'F',
                pos: Point::new(1, 0)
            }
        );
    }

    #[test]
    fn empty_layout_error() {
        assert_eq!(Map2D::from_layout("   \n  ").unwrap_err(), MapError::Empty);
        assert_eq!(Map2D::from_layout("").unwrap_err(), MapError::Empty);
    }
}
