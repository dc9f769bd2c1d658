//! A* frontier bookkeeping and search for grid maps.
//!
//! The heart of this crate is [`FrontierState`]: the open and closed sets of
//! one A* run, with replace-if-cheaper admission, deterministic minimum
//! selection and a strict open → closed transition. [`AStarPathfinder`]
//! drives it over any [`AstarPather`]; [`GridPather`] adapts a
//! [`Map2D`](waygrid_core::Map2D) to that interface.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step cost |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate |

mod config;
mod distance;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod pathfinder;
mod traits;
mod waypoint;

pub use config::{Connectivity, SearchConfig};
pub use distance::{euclidean, manhattan};
pub use error::FrontierError;
pub use frontier::FrontierState;
pub use grid::GridPather;
pub use neighbors::{CARDINAL, DIAGONAL, push_neighbors};
pub use pathfinder::{AStarPathfinder, PathResult};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use waypoint::Waypoint;
