//! Per-step hooks and cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use trailblazer_core::{Grid, Point};

/// Hooks called by [`SearchEngine::search_with`](crate::SearchEngine::search_with).
///
/// `on_step` runs once per expanded cell, after its neighbours have been
/// processed (for the end cell, after the path has been annotated), and is
/// purely observational. `should_cancel` is polled once
/// per iteration before the next cell is popped. Both must return promptly.
///
/// Any `FnMut(&Grid, Point)` closure is an observer.
pub trait SearchObserver {
    fn on_step(&mut self, grid: &Grid, current: Point) {
        let _ = (grid, current);
    }

    fn should_cancel(&self) -> bool {
        false
    }
}

/// Observer that does nothing and never cancels.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {}

impl<F: FnMut(&Grid, Point)> SearchObserver for F {
    fn on_step(&mut self, grid: &Grid, current: Point) {
        self(grid, current)
    }
}

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// A cooperative cancellation flag backed by an [`AtomicBool`].
///
/// Clones share the flag, so one clone can be handed to whoever decides to
/// abort while another is passed to the search.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the token can be reused.
    #[inline]
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }

    /// Pair this token with another observer.
    pub fn watch<O: SearchObserver>(&self, inner: O) -> Cancellable<O> {
        Cancellable {
            token: self.clone(),
            inner,
        }
    }
}

impl SearchObserver for CancelToken {
    fn should_cancel(&self) -> bool {
        self.is_cancelled()
    }
}

/// An observer combined with a [`CancelToken`]. Built by
/// [`CancelToken::watch`].
#[derive(Debug)]
pub struct Cancellable<O> {
    token: CancelToken,
    inner: O,
}

impl<O> Cancellable<O> {
    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl<O: SearchObserver> SearchObserver for Cancellable<O> {
    fn on_step(&mut self, grid: &Grid, current: Point) {
        self.inner.on_step(grid, current);
    }

    fn should_cancel(&self) -> bool {
        self.token.is_cancelled() || self.inner.should_cancel()
    }
}
