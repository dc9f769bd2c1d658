use std::fmt;

use waygrid_core::Point;

/// Errors surfaced by [`FrontierState`](crate::FrontierState) and the
/// pathfinder built on it.
///
/// Both variants are caller mistakes; the frontier is left unchanged when
/// one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontierError {
    /// A required argument was missing or unusable.
    InvalidArgument(String),
    /// `close_waypoint` was called for a location with no open waypoint.
    PreconditionViolation { location: Point },
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::PreconditionViolation { location } => {
                write!(f, "no open waypoint at {location} to close")
            }
        }
    }
}

impl std::error::Error for FrontierError {}
