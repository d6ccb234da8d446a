use trailblazer_core::Point;

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::outcome::SearchStats;

/// Runs A* searches over a [`Grid`](trailblazer_core::Grid).
///
/// The engine owns its frontier and scratch buffers and reuses them, so
/// repeated searches allocate nothing once the buffers have grown to the
/// grid size. It also keeps the expansion order and counters of the last
/// run for callers that want to replay or report it.
#[derive(Debug)]
pub struct SearchEngine {
    pub(crate) config: SearchConfig,
    pub(crate) frontier: Frontier,
    pub(crate) visited: Vec<Point>,
    pub(crate) stats: SearchStats,
    // shared scratch buffer for neighbour lists
    pub(crate) nbuf: Vec<Point>,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            frontier: Frontier::new(config.tie_break),
            visited: Vec::new(),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration. Takes effect on the next search.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
        self.frontier.set_tie_break(config.tie_break);
    }

    /// Cells in the order the last search expanded them.
    #[inline]
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Counters of the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
