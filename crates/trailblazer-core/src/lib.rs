//! **trailblazer-core**: square grid model for shortest-path search.
//!
//! This crate holds the data side of the *trailblazer* workspace: cell
//! coordinates, the closed set of cell states, the owned [`Grid`] with its
//! cached 4-way adjacency, and an ASCII map format for building grids from
//! text. The search itself lives in `trailblazer-paths`.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState, UNREACHABLE};
pub use config::GridConfig;
pub use error::GridError;
pub use geom::Point;
pub use grid::Grid;
