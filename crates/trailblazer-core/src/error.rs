//! Errors raised while building or editing a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::geom::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("point {point} is outside a {rows}x{rows} grid")]
    OutOfBounds { point: Point, rows: i32 },

    #[error("map is empty")]
    Empty,

    #[error("map line {line} has a different width than the first line")]
    InconsistentSize { line: usize },

    #[error("map is {rows}x{cols}, grids must be square")]
    NotSquare { rows: usize, cols: usize },

    #[error("invalid glyph {ch:?} at {point}")]
    InvalidGlyph { ch: char, point: Point },
}
