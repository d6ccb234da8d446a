//! Shared pieces of the trailblazer terminal demo: command-line options,
//! board setup and crossterm rendering.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use trailblazer_core::{CellState, Grid, GridConfig, Point};
use trailblazer_paths::{Board, TieBreak};

pub const USAGE: &str = "\
Usage: trailblazer [OPTIONS]

Options:
  --rows N          grid side length, at least 2 (default 20)
  --density P       barrier probability for random boards (default 0.3)
  --seed S          RNG seed for random boards
  --map FILE        load an ASCII map instead of a random board
  --tie-break T     insertion | newest | row-major (default insertion)
  --max-steps N     cancel the search after N expansions
  --animate         redraw the grid after every expansion
  -h, --help        print this help";

/// Delay between animation frames.
pub const FRAME: Duration = Duration::from_millis(15);

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown option {0}")]
    Unknown(String),

    #[error("option {0} needs a value")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub rows: i32,
    pub density: f64,
    pub seed: Option<u64>,
    pub map: Option<PathBuf>,
    pub tie_break: TieBreak,
    pub max_steps: Option<usize>,
    pub animate: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rows: 20,
            density: 0.3,
            seed: None,
            map: None,
            tie_break: TieBreak::default(),
            max_steps: None,
            animate: false,
            help: false,
        }
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

impl Options {
    /// Parse command-line arguments (program name already stripped).
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut opts = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--rows" => {
                    let value: String = parse_value(&flag, args.next())?;
                    // The start and end corners must be distinct cells.
                    opts.rows = match value.parse::<i32>() {
                        Ok(rows) if rows >= 2 => rows,
                        _ => return Err(ArgsError::InvalidValue { flag, value }),
                    };
                }
                "--density" => opts.density = parse_value(&flag, args.next())?,
                "--seed" => opts.seed = Some(parse_value(&flag, args.next())?),
                "--map" => opts.map = Some(parse_value(&flag, args.next())?),
                "--max-steps" => opts.max_steps = Some(parse_value(&flag, args.next())?),
                "--tie-break" => {
                    let value: String = parse_value(&flag, args.next())?;
                    opts.tie_break = match value.as_str() {
                        "insertion" => TieBreak::InsertionOrder,
                        "newest" => TieBreak::NewestFirst,
                        "row-major" => TieBreak::RowMajor,
                        _ => return Err(ArgsError::InvalidValue { flag, value }),
                    };
                }
                "--animate" => opts.animate = true,
                "-h" | "--help" => opts.help = true,
                _ => return Err(ArgsError::Unknown(flag)),
            }
        }
        Ok(opts)
    }

    /// Build the board: the `--map` file if given, otherwise a random board
    /// with the start and end in opposite corners.
    pub fn board(&self) -> Result<Board, Box<dyn std::error::Error>> {
        if let Some(path) = &self.map {
            let text = std::fs::read_to_string(path)?;
            return Ok(Board::parse(&text)?);
        }

        let seed = self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        });
        log::info!("random board with seed {seed}");

        let mut grid = Grid::from_config(&GridConfig::with_rows(self.rows));
        let last = self.rows - 1;
        grid.set_state(Point::new(0, 0), CellState::Start)?;
        grid.set_state(Point::new(last, last), CellState::End)?;
        grid.scatter_barriers(&mut StdRng::seed_from_u64(seed), self.density);
        Ok(Board::from_grid(grid))
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Background colour of each state.
pub fn state_color(state: CellState) -> CtColor {
    let (r, g, b) = match state {
        CellState::Empty => (255, 255, 255),
        CellState::Barrier => (0, 0, 0),
        CellState::Start => (255, 165, 0),
        CellState::End => (128, 0, 128),
        CellState::Visited => (255, 0, 0),
        CellState::Frontier => (0, 255, 0),
        CellState::Path => (0, 0, 255),
    };
    CtColor::Rgb { r, g, b }
}

/// Queue the whole grid, one two-column block per cell, starting at the
/// cursor position.
pub fn draw(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let rows = grid.total_rows().max(1) as usize;
    for (i, cell) in grid.iter().enumerate() {
        queue!(
            out,
            SetBackgroundColor(state_color(cell.state)),
            SetForegroundColor(CtColor::Grey),
            Print(cell.state.glyph()),
            Print(' ')
        )?;
        if (i + 1) % rows == 0 {
            queue!(out, ResetColor, Print("\r\n"))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}

/// Clear the screen and draw the grid at the top-left corner.
pub fn redraw(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All)
    )?;
    draw(out, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn parse_defaults_and_flags() {
        assert_eq!(Options::parse(args("")).unwrap(), Options::default());
        let opts = Options::parse(args(
            "--rows 8 --density 0.5 --seed 3 --tie-break row-major --max-steps 10 --animate",
        ))
        .unwrap();
        assert_eq!(opts.rows, 8);
        assert_eq!(opts.density, 0.5);
        assert_eq!(opts.seed, Some(3));
        assert_eq!(opts.tie_break, TieBreak::RowMajor);
        assert_eq!(opts.max_steps, Some(10));
        assert!(opts.animate);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Options::parse(args("--bogus")),
            Err(ArgsError::Unknown("--bogus".into()))
        );
        assert_eq!(
            Options::parse(args("--rows")),
            Err(ArgsError::MissingValue("--rows".into()))
        );
        assert_eq!(
            Options::parse(args("--tie-break sideways")),
            Err(ArgsError::InvalidValue {
                flag: "--tie-break".into(),
                value: "sideways".into()
            })
        );
        for rows in ["0", "1", "-3", "many"] {
            assert_eq!(
                Options::parse(args(&format!("--rows {rows}"))),
                Err(ArgsError::InvalidValue {
                    flag: "--rows".into(),
                    value: rows.into()
                })
            );
        }
    }

    #[test]
    fn smallest_board_keeps_both_endpoints() {
        let opts = Options::parse(args("--rows 2 --density 0 --seed 1")).unwrap();
        let board = opts.board().unwrap();
        assert_eq!(board.start(), Some(Point::new(0, 0)));
        assert_eq!(board.end(), Some(Point::new(1, 1)));
    }

    #[test]
    fn seeded_boards_repeat() {
        let opts = Options {
            rows: 10,
            seed: Some(42),
            ..Options::default()
        };
        let a = opts.board().unwrap();
        let b = opts.board().unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.start(), Some(Point::new(0, 0)));
        assert_eq!(a.end(), Some(Point::new(9, 9)));
    }

    #[test]
    fn draw_emits_every_glyph() {
        let grid = Grid::parse("S#\n.E").unwrap();
        let mut out = Vec::new();
        draw(&mut out, &grid).unwrap();
        let text = String::from_utf8(out).unwrap();
        for glyph in ["S", "#", ".", "E"] {
            assert!(text.contains(glyph));
        }
    }
}
