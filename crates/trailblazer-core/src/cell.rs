//! The [`Cell`] type and its [`CellState`].

use crate::geom::Point;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Traversal state of a cell.
///
/// `Visited`, `Frontier` and `Path` are transient search annotations and
/// only ever overlay `Empty` cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    Visited,
    Frontier,
    Path,
}

impl CellState {
    /// All states, in declaration order.
    pub const ALL: [CellState; 7] = [
        Self::Empty,
        Self::Barrier,
        Self::Start,
        Self::End,
        Self::Visited,
        Self::Frontier,
        Self::Path,
    ];

    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    /// Whether the state is a search annotation (cleared between runs).
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Visited | Self::Frontier | Self::Path)
    }

    /// Glyph used by the ASCII map format.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Visited => 'x',
            Self::Frontier => 'o',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Empty,
            '#' => Self::Barrier,
            'S' => Self::Start,
            'E' => Self::End,
            'x' => Self::Visited,
            'o' => Self::Frontier,
            '*' => Self::Path,
            _ => return None,
        })
    }
}

/// One grid position with its state and search bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    origin: Point,
    pub state: CellState,
    cost: i32,
    predecessor: Option<Point>,
    pub(crate) neighbors: Vec<Point>,
}

impl Cell {
    /// A fresh `Empty` cell at `pos`, drawn at `pos * cell_size`.
    pub fn new(pos: Point, cell_size: i32) -> Self {
        Self {
            pos,
            origin: Point::new(pos.row * cell_size, pos.col * cell_size),
            state: CellState::Empty,
            cost: UNREACHABLE,
            predecessor: None,
            neighbors: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Pixel-space origin for renderers. The search never reads it.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Cost from the start of the last search, or [`UNREACHABLE`].
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Predecessor on the best-known path of the last search.
    #[inline]
    pub fn predecessor(&self) -> Option<Point> {
        self.predecessor
    }

    /// Neighbour list as of the last [`Grid::refresh_neighbors`](crate::Grid::refresh_neighbors).
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    /// Mark this cell as a search root with cost 0.
    pub fn set_root(&mut self) {
        self.cost = 0;
        self.predecessor = None;
    }

    /// Record `cost` reached through `from` if it is strictly cheaper than
    /// the current cost. Returns whether the cell was updated.
    pub fn relax(&mut self, cost: i32, from: Point) -> bool {
        if cost >= self.cost {
            return false;
        }
        self.cost = cost;
        self.predecessor = Some(from);
        true
    }

    /// Overlay a transient annotation. Only `Empty` or already-annotated
    /// cells are touched; returns whether the state changed.
    pub fn annotate(&mut self, state: CellState) -> bool {
        debug_assert!(state.is_transient());
        if self.state == CellState::Empty || self.state.is_transient() {
            self.state = state;
            true
        } else {
            false
        }
    }

    /// Drop search bookkeeping and transient annotations.
    pub fn clear_search(&mut self) {
        if self.state.is_transient() {
            self.state = CellState::Empty;
        }
        self.cost = UNREACHABLE;
        self.predecessor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for s in CellState::ALL {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn origin_scales_with_cell_size() {
        let c = Cell::new(Point::new(2, 3), 16);
        assert_eq!(c.origin(), Point::new(32, 48));
        assert_eq!(c.cost(), UNREACHABLE);
        assert_eq!(c.predecessor(), None);
    }

    #[test]
    fn relax_only_lowers_cost() {
        let mut c = Cell::new(Point::new(1, 1), 1);
        assert!(c.relax(5, Point::new(0, 1)));
        assert!(!c.relax(5, Point::new(1, 0)));
        assert!(!c.relax(7, Point::new(1, 0)));
        assert_eq!(c.predecessor(), Some(Point::new(0, 1)));
        assert!(c.relax(3, Point::new(1, 2)));
        assert_eq!(c.cost(), 3);
        assert_eq!(c.predecessor(), Some(Point::new(1, 2)));
    }

    #[test]
    fn annotate_leaves_fixed_states_alone() {
        let mut c = Cell::new(Point::ZERO, 1);
        for fixed in [CellState::Barrier, CellState::Start, CellState::End] {
            c.state = fixed;
            assert!(!c.annotate(CellState::Visited));
            assert_eq!(c.state, fixed);
        }
        c.state = CellState::Empty;
        assert!(c.annotate(CellState::Frontier));
        assert!(c.annotate(CellState::Visited));
        assert_eq!(c.state, CellState::Visited);
    }

    #[test]
    fn clear_search_keeps_barriers() {
        let mut c = Cell::new(Point::ZERO, 1);
        c.state = CellState::Path;
        c.relax(4, Point::new(0, 1));
        c.clear_search();
        assert_eq!(c.state, CellState::Empty);
        assert_eq!(c.cost(), UNREACHABLE);
        assert_eq!(c.predecessor(), None);

        c.state = CellState::Barrier;
        c.clear_search();
        assert_eq!(c.state, CellState::Barrier);
    }
}
