//! The [`Grid`] type: a square, row-major collection of [`Cell`]s.
//!
//! A `Grid` is an owned value. Editing and searching both take it by
//! reference; nothing about it is global or shared.
//!
//! Adjacency is cached per cell and is only recomputed by
//! [`Grid::refresh_neighbors`]. Edits made after the last refresh leave the
//! cached lists stale until the next one.

use std::fmt;

use rand::Rng;
use rand::distr::{Bernoulli, Distribution};

use crate::cell::{Cell, CellState};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::Point;

/// A `total_rows x total_rows` grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cell_size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid of `total_rows x total_rows` empty cells in row-major
    /// order. Each cell is drawn at `(row * cell_size, col * cell_size)`.
    pub fn new(total_rows: i32, cell_size: i32) -> Self {
        let rows = total_rows.max(0);
        let mut cells = Vec::with_capacity((rows as usize) * (rows as usize));
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(Point::new(row, col), cell_size));
            }
        }
        Self {
            rows,
            cell_size,
            cells,
        }
    }

    /// Build a grid from a [`GridConfig`].
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.total_rows, config.cell_size())
    }

    /// Parse an ASCII map, one glyph per cell (see [`CellState::glyph`]).
    ///
    /// Leading and trailing whitespace of the whole string is ignored, and
    /// so is trailing whitespace on each line. Every line must have the same
    /// width and the map must be square.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        let Some(first) = lines.first().filter(|l| !l.is_empty()) else {
            return Err(GridError::Empty);
        };
        let cols = first.chars().count();
        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GridError::InconsistentSize { line: i });
            }
        }
        if lines.len() != cols {
            return Err(GridError::NotSquare {
                rows: lines.len(),
                cols,
            });
        }

        let mut grid = Self::from_config(&GridConfig::with_rows(cols as i32));
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let point = Point::new(row as i32, col as i32);
                let state =
                    CellState::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, point })?;
                grid.set_state(point, state)?;
            }
        }
        Ok(grid)
    }

    /// Cells per side.
    #[inline]
    pub fn total_rows(&self) -> i32 {
        self.rows
    }

    /// Pixel side of one cell.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.rows
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.rows + p.col) as usize)
    }

    /// The cell at `p`.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// State of the cell at `p`.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(|c| c.state)
    }

    fn checked_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        let rows = self.rows;
        self.cell_mut(p)
            .ok_or(GridError::OutOfBounds { point: p, rows })
    }

    /// Overwrite the state of the cell at `p`.
    ///
    /// No validation beyond bounds: keeping a single `Start` and a single
    /// `End` is up to the caller.
    pub fn set_state(&mut self, p: Point, state: CellState) -> Result<(), GridError> {
        self.checked_mut(p)?.state = state;
        Ok(())
    }

    /// Put the cell at `p` back to `Empty`.
    pub fn reset(&mut self, p: Point) -> Result<(), GridError> {
        self.set_state(p, CellState::Empty)
    }

    /// Recompute every cell's neighbour list: the in-bounds cardinal
    /// neighbours that are not barriers.
    pub fn refresh_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let mut buf = std::mem::take(&mut self.cells[i].neighbors);
            buf.clear();
            for n in self.cells[i].pos().neighbors_4() {
                if self.state(n).is_some_and(|s| !s.is_barrier()) {
                    buf.push(n);
                }
            }
            self.cells[i].neighbors = buf;
        }
        log::trace!("refreshed adjacency of {} cells", self.cells.len());
    }

    /// Cached neighbours of `p`; empty if out of bounds.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.cell(p).map(Cell::neighbors).unwrap_or(&[])
    }

    /// Drop all search annotations, costs and predecessors. Barriers and
    /// endpoints stay where they are.
    pub fn clear_search(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear_search();
        }
    }

    /// Reset every cell to a fresh `Empty` cell, discarding adjacency.
    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::new(c.pos(), self.cell_size);
        }
    }

    /// Count how many cells are in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// First cell in row-major order whose state is `state`.
    pub fn find(&self, state: CellState) -> Option<Point> {
        self.cells.iter().find(|c| c.state == state).map(Cell::pos)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Turn each `Empty` cell into a barrier with probability `density`.
    /// Returns the number of barriers placed.
    pub fn scatter_barriers<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> usize {
        let Ok(coin) = Bernoulli::new(density.clamp(0.0, 1.0)) else {
            return 0;
        };
        let mut placed = 0;
        for c in self.cells.iter_mut() {
            if c.state == CellState::Empty && coin.sample(rng) {
                c.state = CellState::Barrier;
                placed += 1;
            }
        }
        log::debug!("scattered {placed} barriers at density {density}");
        placed
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.rows as usize) {
            for c in row {
                write!(f, "{}", c.state.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
