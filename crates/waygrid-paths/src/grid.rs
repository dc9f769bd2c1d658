use waygrid_core::{Map2D, Point};

use crate::config::Connectivity;
use crate::distance::{euclidean, manhattan};
use crate::neighbors::push_neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// [`AstarPather`] over a [`Map2D`].
///
/// Neighbours are the in-bounds, passable cells reachable under the chosen
/// [`Connectivity`]. Entering a cell costs the step length (1 or √2) plus
/// the cell's value. The estimate is the L1 distance under
/// [`Connectivity::Four`] and the straight-line distance otherwise; neither
/// exceeds the real cost.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    map: &'a Map2D,
    connectivity: Connectivity,
}

impl<'a> GridPather<'a> {
    pub fn new(map: &'a Map2D, connectivity: Connectivity) -> Self {
        Self { map, connectivity }
    }

    #[inline]
    pub fn map(&self) -> &'a Map2D {
        self.map
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_neighbors(self.connectivity, p, |n| self.map.is_passable(n), buf);
    }

    fn contains(&self, p: Point) -> bool {
        self.map.is_passable(p)
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> f32 {
        let extra = self.map.cell_value(to).unwrap_or(0).max(0);
        euclidean(from, to) + extra as f32
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f32 {
        match self.connectivity {
            Connectivity::Four => manhattan(from, to),
            Connectivity::Eight => euclidean(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pather_neighbors(p: &GridPather<'_>, at: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        p.neighbors(at, &mut buf);
        buf
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let map = Map2D::from_layout(
            "\
.#.
...
...",
        )
        .unwrap();
        let eight = GridPather::new(&map, Connectivity::Eight);
        let got = pather_neighbors(&eight, Point::new(0, 0));
        assert_eq!(got, vec![Point::new(0, 1), Point::new(1, 1)]);

        let four = GridPather::new(&map, Connectivity::Four);
        assert_eq!(pather_neighbors(&four, Point::new(1, 1)).len(), 3);
        assert_eq!(pather_neighbors(&eight, Point::new(1, 1)).len(), 7);
    }

    #[test]
    fn step_cost_includes_cell_value() {
        let map = Map2D::from_layout(".3\n..").unwrap();
        let p = GridPather::new(&map, Connectivity::Eight);
        assert_eq!(p.cost(Point::new(0, 0), Point::new(0, 1)), 1.0);
        assert_eq!(p.cost(Point::new(0, 0), Point::new(1, 0)), 4.0);
        let diag = p.cost(Point::new(0, 1), Point::new(1, 0));
        assert!((diag - (2f32.sqrt() + 3.0)).abs() < 1e-6);
    }

    #[test]
    fn domain_is_passable_cells() {
        let map = Map2D::from_layout("#.\n.3").unwrap();
        let p = GridPather::new(&map, Connectivity::Eight);
        assert!(!p.contains(Point::new(0, 0)));
        assert!(p.contains(Point::new(1, 0)));
        assert!(p.contains(Point::new(1, 1)));
        assert!(!p.contains(Point::new(2, 0)));
        assert!(!p.contains(Point::new(-1, 1)));
    }

    #[test]
    fn estimate_is_consistent_on_open_floor() {
        let map = Map2D::new(6, 6).unwrap();
        let goal = Point::new(5, 5);
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let p = GridPather::new(&map, connectivity);
            // Moving one step never reduces the estimate by more than it costs.
            for from in map.bounds() {
                let mut buf = Vec::new();
                p.neighbors(from, &mut buf);
                for &to in &buf {
                    assert!(p.estimate(from, goal) <= p.cost(from, to) + p.estimate(to, goal) + 1e-5);
                }
            }
        }
    }

    #[test]
    fn four_way_estimate_counts_steps() {
        let map = Map2D::new(6, 6).unwrap();
        let four = GridPather::new(&map, Connectivity::Four);
        let eight = GridPather::new(&map, Connectivity::Eight);
        assert_eq!(four.estimate(Point::new(0, 0), Point::new(3, 4)), 7.0);
        assert_eq!(eight.estimate(Point::new(0, 0), Point::new(3, 4)), 5.0);
    }
}
