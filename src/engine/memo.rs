//! Per-pass memoization of resolved tile colors

use crate::engine::color::Rgb;
use crate::engine::matcher::MatchResult;
use std::collections::HashMap;

/// Memoization cache mapping tile colors to already-resolved sprites
///
/// Flat image regions produce long runs of identical average colors; the
/// memo collapses those into a single index search per distinct color. The
/// cache is scoped to one matching pass and holds no reference to the index
/// it was populated from, so it must be discarded between passes.
#[derive(Debug, Default)]
pub struct ColorMemo {
    resolved: HashMap<Rgb, MatchResult>,

    /// Cache performance statistics
    pub stats: MemoStats,
}

/// Performance metrics for memo effectiveness
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoStats {
    /// Number of colors answered from the memo
    pub hits: usize,
    /// Number of colors that required an index search
    pub misses: usize,
}

impl ColorMemo {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached result for `color` or resolve and store a new one
    ///
    /// The closure runs only when the color has not been seen in this pass.
    pub fn get_or_resolve<F>(&mut self, color: Rgb, resolve: F) -> &MatchResult
    where
        F: FnOnce() -> MatchResult,
    {
        use std::collections::hash_map::Entry;

        match self.resolved.entry(color) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(resolve())
            }
        }
    }

    /// Number of distinct colors resolved so far
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Whether no colors have been resolved yet
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
