//! **waygrid-core** — grid maps and geometry for A* search.
//!
//! This crate provides the foundational types used across the *waygrid*
//! workspace: the [`Point`] location key, the [`Range`] rectangle, and the
//! [`Map2D`] cost grid with its ASCII layout format.

pub mod error;
pub mod geom;
pub mod layout;
pub mod map;

pub use error::MapError;
pub use geom::{Point, Range};
pub use layout::{FINISH_RUNE, START_RUNE};
pub use map::{FLOOR, MAX_SIZE, Map2D, WALL};
