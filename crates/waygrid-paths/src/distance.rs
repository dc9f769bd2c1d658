use waygrid_core::Point;

/// Number of unit steps between two points when only cardinal moves are
/// allowed (L1 distance).
#[inline]
pub fn manhattan(a: Point, b: Point) -> f32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f32
}

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_agree_on_axis_steps() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 3.0);
        assert_eq!(euclidean(a, b), 3.0);
    }

    #[test]
    fn metrics_on_diagonal() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(euclidean(b, a), 5.0);
    }
}
