use waygrid_core::Point;

/// A search node: a location plus the costs of the best path found to it.
///
/// Waypoints are built by the search loop and handed to a
/// [`FrontierState`](crate::FrontierState), which only compares, stores and
/// moves them. The predecessor is kept as a location key rather than a
/// pointer; path reconstruction resolves it through the closed set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    location: Point,
    predecessor: Option<Point>,
    previous_cost: f32,
    total_cost: f32,
}

impl Waypoint {
    /// Create a waypoint with explicit costs.
    ///
    /// `previous_cost` is g, the cost accumulated from the start.
    /// `total_cost` is f = g + h, used only to order the open set.
    pub fn new(
        location: Point,
        predecessor: Option<Point>,
        previous_cost: f32,
        total_cost: f32,
    ) -> Self {
        Self {
            location,
            predecessor,
            previous_cost,
            total_cost,
        }
    }

    /// The first waypoint of a search: no predecessor, g = 0, f = `estimate`.
    pub fn start(location: Point, estimate: f32) -> Self {
        Self::new(location, None, 0.0, estimate)
    }

    /// A waypoint reached from `self` with the given step cost and remaining
    /// estimate.
    pub fn successor(&self, location: Point, step_cost: f32, estimate: f32) -> Self {
        let g = self.previous_cost + step_cost;
        Self::new(location, Some(self.location), g, g + estimate)
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.location
    }

    /// Location this waypoint was reached from, `None` for the start.
    #[inline]
    pub fn predecessor(&self) -> Option<Point> {
        self.predecessor
    }

    #[inline]
    pub fn previous_cost(&self) -> f32 {
        self.previous_cost
    }

    #[inline]
    pub fn total_cost(&self) -> f32 {
        self.total_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_has_no_predecessor() {
        let w = Waypoint::start(Point::new(1, 2), 4.5);
        assert_eq!(w.location(), Point::new(1, 2));
        assert_eq!(w.predecessor(), None);
        assert_eq!(w.previous_cost(), 0.0);
        assert_eq!(w.total_cost(), 4.5);
    }

    #[test]
    fn successor_accumulates_cost() {
        let a = Waypoint::start(Point::new(0, 0), 3.0);
        let b = a.successor(Point::new(1, 0), 1.0, 2.0);
        let c = b.successor(Point::new(2, 0), 1.5, 0.0);
        assert_eq!(b.predecessor(), Some(Point::new(0, 0)));
        assert_eq!(b.previous_cost(), 1.0);
        assert_eq!(b.total_cost(), 3.0);
        assert_eq!(c.predecessor(), Some(Point::new(1, 0)));
        assert_eq!(c.previous_cost(), 2.5);
        assert_eq!(c.total_cost(), 2.5);
    }
}
