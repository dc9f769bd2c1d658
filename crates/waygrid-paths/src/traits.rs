use waygrid_core::Point;

/// The graph a search walks: which locations follow a given one.
pub trait Pather {
    /// Append the locations reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` can be stood on at all. Searches refuse endpoints
    /// outside this domain.
    fn contains(&self, p: Point) -> bool;
}

/// Pather with weighted steps.
pub trait WeightedPather: Pather {
    /// Cost of the single step `from` → `to`. Must be positive.
    fn cost(&self, from: Point, to: Point) -> f32;
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: WeightedPather {
    /// Estimated remaining cost from `from` to `to`.
    /// Must never exceed the cheapest real cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f32;
}
