//! What a search returns.

use trailblazer_core::Point;

/// A minimum-step route from a start cell to an end cell.
///
/// `steps` excludes the start and includes the end, so [`len`](Path::len)
/// is the number of moves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Point,
    steps: Vec<Point>,
}

impl Path {
    pub(crate) fn new(start: Point, steps: Vec<Point>) -> Self {
        Self { start, steps }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Last cell of the path (the start for an empty path).
    #[inline]
    pub fn end(&self) -> Point {
        self.steps.last().copied().unwrap_or(self.start)
    }

    /// Cells after the start, in walking order.
    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every cell of the path, start included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.steps.iter().copied())
    }
}

/// Result of a search that ran with a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    PathFound(Path),
    /// The frontier ran dry without reaching the end.
    NoPathExists,
    /// The observer asked to stop. Cell annotations are left as they were.
    Cancelled,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }
}

/// Counters from the last search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped and expanded.
    pub expanded: usize,
    /// Heap pushes, re-pushes after relaxation included.
    pub pushed: usize,
    /// Heap entries still queued when the search stopped.
    pub remaining: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accessors() {
        let path = Path::new(
            Point::new(0, 0),
            vec![Point::new(0, 1), Point::new(1, 1)],
        );
        assert_eq!(path.len(), 2);
        assert_eq!(path.end(), Point::new(1, 1));
        assert_eq!(path.points().count(), 3);
        assert_eq!(path.points().next(), Some(Point::new(0, 0)));

        let empty = Path::new(Point::new(2, 2), Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.end(), Point::new(2, 2));
    }

    #[test]
    fn outcome_accessors() {
        let found = SearchOutcome::PathFound(Path::new(Point::ZERO, vec![Point::new(0, 1)]));
        assert!(found.is_found());
        assert_eq!(found.path().map(Path::len), Some(1));
        assert!(SearchOutcome::NoPathExists.path().is_none());
        assert!(SearchOutcome::Cancelled.into_path().is_none());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path::new(Point::new(1, 1), vec![Point::new(1, 2), Point::new(2, 2)]);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
