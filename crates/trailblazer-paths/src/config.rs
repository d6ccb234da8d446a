//! Search tuning.

/// How the frontier orders entries of equal priority.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Oldest entry first (FIFO among equals).
    #[default]
    InsertionOrder,
    /// Newest entry first (LIFO among equals). Tends to expand fewer cells
    /// on open grids since it keeps following the most recent lead.
    NewestFirst,
    /// Lower row first, then lower column.
    RowMajor,
}

/// Configuration for a [`SearchEngine`](crate::SearchEngine).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub tie_break: TieBreak,
}

impl SearchConfig {
    /// Set the tie-break policy (builder).
    #[inline]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
    }

    #[test]
    fn tie_break_by_name() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"tie_break":"RowMajor"}"#).unwrap();
        assert_eq!(cfg.tie_break, TieBreak::RowMajor);
    }
}
