//! Search configuration.

use std::fmt;
use std::str::FromStr;

/// Which neighbouring cells a step may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Connectivity {
    /// Up, down, left and right only.
    Four,
    /// Cardinal and diagonal steps.
    #[default]
    Eight,
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connectivity::Four => "four",
            Connectivity::Eight => "eight",
        })
    }
}

impl FromStr for Connectivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4" | "four" => Ok(Connectivity::Four),
            "8" | "eight" => Ok(Connectivity::Eight),
            other => Err(format!("unknown connectivity {other:?}, expected 4 or 8")),
        }
    }
}

/// Knobs for [`AStarPathfinder`](crate::AStarPathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Neighbourhood used by [`GridPather`](crate::GridPather).
    pub connectivity: Connectivity,
    /// Give up once the cheapest open waypoint's total cost exceeds this.
    pub max_cost: Option<f32>,
    /// Give up after closing this many waypoints.
    pub max_expansions: Option<usize>,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let c: SearchConfig = serde_json::from_str(r#"{"connectivity":"four"}"#).unwrap();
        assert_eq!(c.connectivity, Connectivity::Four);
        assert_eq!(c.max_expansions, None);
    }

    #[test]
    fn config_round_trip() {
        let c = SearchConfig {
            connectivity: Connectivity::Four,
            max_cost: Some(12.5),
            max_expansions: Some(100),
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
