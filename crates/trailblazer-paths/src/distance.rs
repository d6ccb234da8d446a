use trailblazer_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for 4-way unit-cost movement, which is what
/// makes it a valid A* heuristic here.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Point::new(1, 4);
        let b = Point::new(6, 2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
