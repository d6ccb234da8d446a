//! Caller errors. Running out of frontier or being cancelled are
//! [`SearchOutcome`](crate::SearchOutcome)s, not errors.

use thiserror::Error;
use trailblazer_core::{GridError, Point};

/// Why a search request was rejected before it started.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Misconfiguration {
    #[error("start and end are the same cell {0}")]
    StartEqualsEnd(Point),

    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Point),

    #[error("end {0} is outside the grid")]
    EndOutOfBounds(Point),

    #[error("no start cell has been placed")]
    MissingStart,

    #[error("no end cell has been placed")]
    MissingEnd,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search configuration: {0}")]
    InvalidConfiguration(#[from] Misconfiguration),

    #[error(transparent)]
    Grid(#[from] GridError),
}
