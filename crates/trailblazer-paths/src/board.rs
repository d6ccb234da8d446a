//! Edit-then-search workflow on top of a [`Grid`].
//!
//! A [`Board`] tracks the start and end cells while the user paints a grid
//! and hands them to a [`SearchEngine`] when asked to run. It knows nothing
//! about the input device driving it: a front-end maps its clicks and keys
//! onto [`paint`](Board::paint), [`erase`](Board::erase),
//! [`clear`](Board::clear) and [`run`](Board::run).

use trailblazer_core::{CellState, Grid, GridConfig, GridError, Point};

use crate::SearchEngine;
use crate::error::{Misconfiguration, SearchError};
use crate::observer::{NoObserver, SearchObserver};
use crate::outcome::SearchOutcome;

#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
}

impl Board {
    /// An empty board.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            grid: Grid::from_config(config),
            start: None,
            end: None,
        }
    }

    /// A board from an ASCII map (see [`Grid::parse`]).
    pub fn parse(map: &str) -> Result<Self, GridError> {
        Grid::parse(map).map(Self::from_grid)
    }

    /// Wrap an existing grid, taking its first `Start` and `End` cells in
    /// row-major order as the endpoints.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            start: grid.find(CellState::Start),
            end: grid.find(CellState::End),
            grid,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Paint `p`: the first paint places the start, the next one the end,
    /// and every later one a barrier. Painting over an endpoint does
    /// nothing. Returns the state given to the cell, if any.
    pub fn paint(&mut self, p: Point) -> Result<Option<CellState>, GridError> {
        let painted = if self.start.is_none() && self.end != Some(p) {
            self.start = Some(p);
            CellState::Start
        } else if self.end.is_none() && self.start != Some(p) {
            self.end = Some(p);
            CellState::End
        } else if self.start != Some(p) && self.end != Some(p) {
            CellState::Barrier
        } else {
            return Ok(None);
        };
        self.grid.set_state(p, painted)?;
        log::trace!("painted {p} as {painted:?}");
        Ok(Some(painted))
    }

    /// Put `p` back to `Empty`, forgetting it as an endpoint if it was one.
    pub fn erase(&mut self, p: Point) -> Result<(), GridError> {
        self.grid.reset(p)?;
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
        log::trace!("erased {p}");
        Ok(())
    }

    /// Wipe the board: fresh cells, no endpoints.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.start = None;
        self.end = None;
    }

    /// Drop the annotations of the last search, keeping the layout.
    pub fn clear_search(&mut self) {
        self.grid.clear_search();
    }

    /// Refresh adjacency and search from the start to the end.
    pub fn run(&mut self, engine: &mut SearchEngine) -> Result<SearchOutcome, SearchError> {
        self.run_with(engine, &mut NoObserver)
    }

    /// [`run`](Self::run) with an observer.
    pub fn run_with<O: SearchObserver + ?Sized>(
        &mut self,
        engine: &mut SearchEngine,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError> {
        let start = self.start.ok_or(Misconfiguration::MissingStart)?;
        let end = self.end.ok_or(Misconfiguration::MissingEnd)?;
        self.grid.refresh_neighbors();
        engine.search_with(&mut self.grid, start, end, observer)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_order_start_end_barrier() {
        let mut b = Board::new(&GridConfig::with_rows(4));
        let (a, c, d) = (Point::new(0, 0), Point::new(3, 3), Point::new(1, 1));
        assert_eq!(b.paint(a), Ok(Some(CellState::Start)));
        assert_eq!(b.paint(a), Ok(None));
        assert_eq!(b.paint(c), Ok(Some(CellState::End)));
        assert_eq!(b.paint(d), Ok(Some(CellState::Barrier)));
        assert_eq!(b.paint(c), Ok(None));
        assert_eq!(b.start(), Some(a));
        assert_eq!(b.end(), Some(c));
        assert_eq!(b.grid().state(d), Some(CellState::Barrier));
    }

    #[test]
    fn erase_start_then_repaint() {
        let mut b = Board::new(&GridConfig::with_rows(3));
        b.paint(Point::new(0, 0)).unwrap();
        b.paint(Point::new(2, 2)).unwrap();
        b.erase(Point::new(0, 0)).unwrap();
        assert_eq!(b.start(), None);
        assert_eq!(b.grid().state(Point::new(0, 0)), Some(CellState::Empty));

        // Painting the end does not turn it into the start.
        assert_eq!(b.paint(Point::new(2, 2)), Ok(None));
        assert_eq!(b.paint(Point::new(1, 0)), Ok(Some(CellState::Start)));
    }

    #[test]
    fn paint_out_of_bounds() {
        let mut b = Board::new(&GridConfig::with_rows(2));
        assert!(matches!(
            b.paint(Point::new(5, 5)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn run_requires_endpoints() {
        let mut engine = SearchEngine::default();
        let mut b = Board::new(&GridConfig::with_rows(3));
        assert_eq!(
            b.run(&mut engine),
            Err(SearchError::InvalidConfiguration(Misconfiguration::MissingStart))
        );
        b.paint(Point::new(0, 0)).unwrap();
        assert_eq!(
            b.run(&mut engine),
            Err(SearchError::InvalidConfiguration(Misconfiguration::MissingEnd))
        );
    }

    #[test]
    fn run_refreshes_adjacency() {
        let mut engine = SearchEngine::default();
        let mut b = Board::new(&GridConfig::with_rows(3));
        b.paint(Point::new(0, 0)).unwrap();
        b.paint(Point::new(2, 2)).unwrap();
        b.paint(Point::new(1, 1)).unwrap();
        let path = b.run(&mut engine).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 4);

        for col in [0, 2] {
            b.paint(Point::new(1, col)).unwrap();
        }
        assert_eq!(b.run(&mut engine), Ok(SearchOutcome::NoPathExists));
    }

    #[test]
    fn parse_and_clear() {
        let mut b = Board::parse(
            "\
S.#
..#
.E.",
        )
        .unwrap();
        assert_eq!(b.start(), Some(Point::new(0, 0)));
        assert_eq!(b.end(), Some(Point::new(2, 1)));
        let mut engine = SearchEngine::default();
        assert!(b.run(&mut engine).unwrap().is_found());

        b.clear_search();
        assert_eq!(b.grid().count(CellState::Path), 0);

        b.clear();
        assert_eq!(b.start(), None);
        assert_eq!(b.grid().count(CellState::Barrier), 0);
        assert_eq!(b.grid().len(), 9);
    }
}
