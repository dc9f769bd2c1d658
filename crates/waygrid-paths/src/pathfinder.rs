//! The A* driver loop built on [`FrontierState`].

use waygrid_core::Point;

use crate::config::SearchConfig;
use crate::error::FrontierError;
use crate::frontier::FrontierState;
use crate::traits::AstarPather;
use crate::waypoint::Waypoint;

/// A path found by [`AStarPathfinder::compute_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// The waypoint at the goal, carrying the final costs.
    pub goal: Waypoint,
    /// Locations from start to goal, both included.
    pub path: Vec<Point>,
    /// Number of waypoints closed during the search.
    pub expanded: usize,
}

impl PathResult {
    /// Total cost of the path.
    pub fn cost(&self) -> f32 {
        self.goal.previous_cost()
    }

    /// Number of steps (one less than the number of locations).
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Runs A* searches with a fixed [`SearchConfig`].
///
/// Each call to [`compute_path`](Self::compute_path) uses a fresh
/// [`FrontierState`]; nothing is shared between runs.
#[derive(Debug, Clone, Default)]
pub struct AStarPathfinder {
    config: SearchConfig,
}

impl AStarPathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute the cheapest path from `from` to `to`.
    ///
    /// Returns `Ok(None)` when either endpoint lies outside the pather's
    /// domain, when the goal cannot be reached, or when the search is cut
    /// short by `max_cost` or `max_expansions`.
    pub fn compute_path<P: AstarPather>(
        &self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<PathResult>, FrontierError> {
        if !pather.contains(from) || !pather.contains(to) {
            log::debug!("astar: endpoint {from} or {to} is outside the map");
            return Ok(None);
        }
        if from == to {
            return Ok(Some(PathResult {
                goal: Waypoint::start(from, 0.0),
                path: vec![from],
                expanded: 0,
            }));
        }

        let mut state = FrontierState::new(pather);
        state.add_open_waypoint(Waypoint::start(from, pather.estimate(from, to)));

        let mut nbuf = Vec::with_capacity(8);
        let mut expanded = 0usize;

        while state.num_open_waypoints() > 0 {
            let Some(&best) = state.min_open_waypoint() else {
                break;
            };
            let current = best.location();

            if current == to {
                let path = state.path_to(&best);
                log::debug!(
                    "astar: reached {to} from {from}, cost {:.3}, {} steps, {expanded} expanded",
                    best.previous_cost(),
                    path.len() - 1
                );
                return Ok(Some(PathResult {
                    goal: best,
                    path,
                    expanded,
                }));
            }

            if self.config.max_cost.is_some_and(|max| best.total_cost() > max) {
                log::debug!(
                    "astar: cheapest open cost {:.3} exceeds limit, giving up on {to}",
                    best.total_cost()
                );
                return Ok(None);
            }
            if self.config.max_expansions.is_some_and(|max| expanded >= max) {
                log::warn!("astar: expansion budget of {expanded} exhausted before reaching {to}");
                return Ok(None);
            }

            state.close_waypoint(current)?;
            expanded += 1;

            nbuf.clear();
            state.map().neighbors(current, &mut nbuf);
            for &next in &nbuf {
                if state.is_location_closed(next) {
                    continue;
                }
                let step = pather.cost(current, next);
                state.add_open_waypoint(best.successor(next, step, pather.estimate(next, to)));
            }
        }

        log::debug!("astar: no path from {from} to {to}, {expanded} expanded");
        Ok(None)
    }
}
