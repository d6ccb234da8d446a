//! Terminal A* demo.
//!
//! Run: cargo run --bin trailblazer -- --rows 30 --animate
//!
//! Set `RUST_LOG=debug` to see the search log.

use std::io;
use std::thread;

use trailblazer_core::{CellState, Grid, Point};
use trailblazer_demos::{FRAME, Options, USAGE, draw, redraw};
use trailblazer_paths::{CancelToken, SearchConfig, SearchEngine, SearchOutcome};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::parse(std::env::args().skip(1))?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut board = opts.board()?;
    let mut engine = SearchEngine::new(SearchConfig::default().with_tie_break(opts.tie_break));
    let mut out = io::stdout();

    let token = CancelToken::new();
    let trigger = token.clone();
    let mut steps = 0usize;
    let mut observer = token.watch(|grid: &Grid, _: Point| {
        steps += 1;
        if opts.max_steps.is_some_and(|max| steps >= max) {
            trigger.cancel();
        }
        if opts.animate {
            if let Err(e) = redraw(&mut out, grid) {
                log::warn!("redraw failed: {e}");
            }
            thread::sleep(FRAME);
        }
    });

    let outcome = board.run_with(&mut engine, &mut observer)?;

    if opts.animate {
        redraw(&mut out, board.grid())?;
    } else {
        draw(&mut out, board.grid())?;
    }

    let stats = engine.stats();
    match outcome {
        SearchOutcome::PathFound(path) => println!(
            "path of {} steps, {} cells expanded",
            path.len(),
            stats.expanded
        ),
        SearchOutcome::NoPathExists => println!(
            "no path, {} cells expanded, {} barriers",
            stats.expanded,
            board.grid().count(CellState::Barrier)
        ),
        SearchOutcome::Cancelled => {
            println!("cancelled after {} expansions", stats.expanded)
        }
    }
    Ok(())
}
