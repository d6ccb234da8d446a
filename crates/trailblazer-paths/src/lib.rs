//! A* shortest-path search over a [`trailblazer_core::Grid`].
//!
//! The search moves in four directions at unit cost and is guided by the
//! Manhattan distance to the end cell. It works on the grid's cached
//! adjacency, annotates the cells it touches so a front-end can draw the
//! progress, and returns one of three outcomes:
//!
//! - [`SearchOutcome::PathFound`] with a minimum-step [`Path`],
//! - [`SearchOutcome::NoPathExists`] once the frontier runs dry,
//! - [`SearchOutcome::Cancelled`] when a [`SearchObserver`] asks to stop.
//!
//! Requests that make no sense (start equals end, endpoints off the grid
//! or missing) are rejected up front with a [`SearchError`].
//!
//! [`Board`] wraps a grid with the start/end bookkeeping of an interactive
//! editor.

mod astar;
mod board;
mod config;
mod distance;
mod engine;
mod error;
mod frontier;
mod observer;
mod outcome;

pub use board::Board;
pub use config::{SearchConfig, TieBreak};
pub use distance::manhattan;
pub use engine::SearchEngine;
pub use error::{Misconfiguration, SearchError};
pub use frontier::Frontier;
pub use observer::{CancelToken, Cancellable, NoObserver, SearchObserver};
pub use outcome::{Path, SearchOutcome, SearchStats};
