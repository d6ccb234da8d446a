use std::cmp::Ordering;
use std::collections::BinaryHeap;

use trailblazer_core::Point;

use crate::config::TieBreak;

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    priority: i32,
    tie: u64,
    seq: u64,
    idx: usize,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first.
        other
            .priority
            .cmp(&self.priority)
            .then(other.tie.cmp(&self.tie))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Open list for A*: a priority queue of cells plus open/closed membership.
///
/// A cell can be pushed several times while open (once per cost
/// improvement). Only the cheapest copy is ever returned by
/// [`pop`](Frontier::pop); later copies are dropped as stale because the
/// cell is closed by then.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    open: Vec<bool>,
    closed: Vec<bool>,
    seq: u64,
    tie_break: TieBreak,
}

impl Frontier {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            ..Self::default()
        }
    }

    /// Empty the frontier and size the membership sets for `len` cells.
    /// Buffers are reused between searches.
    pub fn reset(&mut self, len: usize) {
        self.heap.clear();
        self.open.clear();
        self.open.resize(len, false);
        self.closed.clear();
        self.closed.resize(len, false);
        self.seq = 0;
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tie_break = tie_break;
    }

    /// Push cell `idx` at `pos` with `priority` and mark it open. Returns
    /// `true` if the cell was not open before.
    pub fn push(&mut self, idx: usize, pos: Point, priority: i32) -> bool {
        let seq = self.seq;
        self.seq += 1;
        let tie = match self.tie_break {
            TieBreak::InsertionOrder => seq,
            TieBreak::NewestFirst => u64::MAX - seq,
            TieBreak::RowMajor => idx as u64,
        };
        self.heap.push(Entry {
            priority,
            tie,
            seq,
            idx,
            pos,
        });
        !std::mem::replace(&mut self.open[idx], true)
    }

    /// Pop the best open cell and move it to the closed set.
    pub fn pop(&mut self) -> Option<Point> {
        while let Some(e) = self.heap.pop() {
            if self.closed[e.idx] {
                continue;
            }
            self.open[e.idx] = false;
            self.closed[e.idx] = true;
            return Some(e.pos);
        }
        None
    }

    #[inline]
    pub fn is_open(&self, idx: usize) -> bool {
        self.open.get(idx).copied().unwrap_or(false)
    }

    #[inline]
    pub fn is_closed(&self, idx: usize) -> bool {
        self.closed.get(idx).copied().unwrap_or(false)
    }

    /// Number of heap entries, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Point {
        Point::new(0, i as i32)
    }

    #[test]
    fn lowest_priority_first() {
        let mut f = Frontier::new(TieBreak::InsertionOrder);
        f.reset(4);
        f.push(0, p(0), 5);
        f.push(1, p(1), 2);
        f.push(2, p(2), 9);
        assert_eq!(f.pop(), Some(p(1)));
        assert_eq!(f.pop(), Some(p(0)));
        assert_eq!(f.pop(), Some(p(2)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn tie_break_policies() {
        let order = |tb| {
            let mut f = Frontier::new(tb);
            f.reset(4);
            f.push(2, p(2), 1);
            f.push(0, p(0), 1);
            f.push(3, p(3), 1);
            std::iter::from_fn(|| f.pop()).collect::<Vec<_>>()
        };
        assert_eq!(order(TieBreak::InsertionOrder), vec![p(2), p(0), p(3)]);
        assert_eq!(order(TieBreak::NewestFirst), vec![p(3), p(0), p(2)]);
        assert_eq!(order(TieBreak::RowMajor), vec![p(0), p(2), p(3)]);
    }

    #[test]
    fn membership_and_stale_entries() {
        let mut f = Frontier::new(TieBreak::default());
        f.reset(2);
        assert!(f.push(0, p(0), 4));
        assert!(!f.push(0, p(0), 2));
        assert!(f.is_open(0));
        assert_eq!(f.len(), 2);

        assert_eq!(f.pop(), Some(p(0)));
        assert!(!f.is_open(0));
        assert!(f.is_closed(0));
        // The priority-4 copy is stale now.
        assert_eq!(f.pop(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn reset_clears_membership() {
        let mut f = Frontier::new(TieBreak::default());
        f.reset(1);
        f.push(0, p(0), 0);
        f.pop();
        f.reset(3);
        assert!(!f.is_closed(0));
        assert!(!f.is_open(2));
        assert!(!f.is_closed(7));
    }
}
