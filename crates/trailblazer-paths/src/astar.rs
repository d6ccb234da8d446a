use trailblazer_core::{CellState, Grid, Point};

use crate::SearchEngine;
use crate::distance::manhattan;
use crate::error::{Misconfiguration, SearchError};
use crate::observer::{NoObserver, SearchObserver};
use crate::outcome::{Path, SearchOutcome, SearchStats};

impl SearchEngine {
    /// Find a minimum-step path from `start` to `end` with A*.
    ///
    /// Uses the grid's cached adjacency as-is: call
    /// [`Grid::refresh_neighbors`] after editing barriers or the result
    /// reflects the old layout.
    pub fn search(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
    ) -> Result<SearchOutcome, SearchError> {
        self.search_with(grid, start, end, &mut NoObserver)
    }

    /// Like [`search`](Self::search), reporting every expansion to
    /// `observer` and stopping early with [`SearchOutcome::Cancelled`] once it
    /// asks to.
    ///
    /// Expanded cells are annotated `Visited`, discovered ones `Frontier`
    /// and, on success, the cells of the path `Path`. Annotations only land
    /// on `Empty` cells.
    pub fn search_with<O: SearchObserver + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError> {
        let start_idx = validate(grid, start, end)?;
        log::debug!(
            "A* search {start} -> {end} on a {0}x{0} grid",
            grid.total_rows()
        );

        grid.clear_search();
        self.frontier.reset(grid.len());
        self.visited.clear();
        self.stats = SearchStats::default();

        if let Some(cell) = grid.cell_mut(start) {
            cell.set_root();
        }
        self.frontier.push(start_idx, start, manhattan(start, end));
        self.stats.pushed += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            if observer.should_cancel() {
                break SearchOutcome::Cancelled;
            }
            let Some(current) = self.frontier.pop() else {
                break SearchOutcome::NoPathExists;
            };
            self.visited.push(current);
            self.stats.expanded += 1;

            let Some(cell) = grid.cell_mut(current) else {
                continue;
            };
            cell.annotate(CellState::Visited);
            let current_cost = cell.cost();

            if current == end {
                let path = reconstruct(grid, start, end);
                // Endpoints always end up displayed as Start and End.
                grid.set_state(start, CellState::Start)?;
                grid.set_state(end, CellState::End)?;
                observer.on_step(grid, current);
                break SearchOutcome::PathFound(path);
            }

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(current));

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.frontier.is_closed(ni) {
                    continue;
                }
                let tentative = current_cost + 1;
                let Some(n) = grid.cell_mut(np) else {
                    continue;
                };
                if !n.relax(tentative, current) {
                    continue;
                }
                // A cheaper copy is pushed even if the cell is already open;
                // the old copy is skipped as stale once the cell is closed.
                self.stats.pushed += 1;
                if self.frontier.push(ni, np, tentative + manhattan(np, end)) {
                    n.annotate(CellState::Frontier);
                }
            }

            log::trace!("expanded {current} at cost {current_cost}");
            observer.on_step(grid, current);
        };

        self.nbuf = nbuf;
        self.stats.remaining = self.frontier.len();

        match &outcome {
            SearchOutcome::PathFound(path) => log::debug!(
                "path of {} steps found after {} expansions",
                path.len(),
                self.stats.expanded
            ),
            SearchOutcome::NoPathExists => log::debug!(
                "no path after {} expansions",
                self.stats.expanded
            ),
            SearchOutcome::Cancelled => log::debug!(
                "search cancelled after {} expansions",
                self.stats.expanded
            ),
        }
        Ok(outcome)
    }
}

/// Check the request and return the start's flat index.
fn validate(grid: &Grid, start: Point, end: Point) -> Result<usize, Misconfiguration> {
    let start_idx = grid
        .index(start)
        .ok_or(Misconfiguration::StartOutOfBounds(start))?;
    if !grid.contains(end) {
        return Err(Misconfiguration::EndOutOfBounds(end));
    }
    if start == end {
        return Err(Misconfiguration::StartEqualsEnd(start));
    }
    Ok(start_idx)
}

/// Walk predecessors back from `end`, annotating the cells on the way.
fn reconstruct(grid: &mut Grid, start: Point, end: Point) -> Path {
    let mut steps = Vec::new();
    let mut cur = end;
    while cur != start {
        steps.push(cur);
        let Some(cell) = grid.cell_mut(cur) else {
            break;
        };
        cell.annotate(CellState::Path);
        match cell.predecessor() {
            Some(prev) => cur = prev,
            None => break,
        }
    }
    steps.reverse();
    Path::new(start, steps)
}
