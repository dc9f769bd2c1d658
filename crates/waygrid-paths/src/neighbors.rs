use waygrid_core::Point;

use crate::config::Connectivity;

/// Unit steps to the four cardinal neighbours (up, right, down, left).
pub const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Unit steps to the four diagonal neighbours, clockwise from up-right.
pub const DIAGONAL: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Append the neighbours of `p` under `connectivity` for which `keep`
/// returns `true`. Cardinal neighbours come first.
pub fn push_neighbors(
    connectivity: Connectivity,
    p: Point,
    keep: impl Fn(Point) -> bool,
    buf: &mut Vec<Point>,
) {
    let diagonals: &[Point] = match connectivity {
        Connectivity::Four => &[],
        Connectivity::Eight => &DIAGONAL,
    };
    for &d in CARDINAL.iter().chain(diagonals) {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}
