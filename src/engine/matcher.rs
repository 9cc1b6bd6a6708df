//! Resolution of tile colors to sprite references through the palette index

use crate::engine::color::Rgb;
use crate::engine::kdtree::PaletteIndex;
use crate::engine::memo::ColorMemo;

/// Sprite chosen for one tile
///
/// The placeholder variant is part of the engine contract rather than a
/// renderer convention: a consumer substitutes its designated placeholder
/// sprite wherever the palette offered no candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// A palette sprite was resolved for the tile
    Sprite(String),
    /// No palette candidate exists for the tile
    Placeholder,
}

impl MatchResult {
    /// The resolved sprite reference, if any
    pub fn sprite(&self) -> Option<&str> {
        match self {
            Self::Sprite(reference) => Some(reference),
            Self::Placeholder => None,
        }
    }

    /// The resolved sprite reference, or `placeholder` when absent
    pub fn sprite_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.sprite().unwrap_or(placeholder)
    }
}

/// Resolve each tile color to its nearest palette sprite
///
/// Output preserves input order and length exactly: one result per tile
/// color. A fresh memo is created for the pass and dropped with it; the
/// index is the only state shared across calls.
pub fn match_tiles(index: &PaletteIndex, tile_colors: &[Rgb]) -> Vec<MatchResult> {
    let mut memo = ColorMemo::new();
    match_tiles_with_memo(index, tile_colors, &mut memo)
}

/// Resolve tile colors using a caller-supplied memo
///
/// Exposed so callers can inspect [`crate::engine::memo::MemoStats`] after
/// a pass. The memo must start empty and must not be reused against a
/// different index; cached results would go stale silently.
pub fn match_tiles_with_memo(
    index: &PaletteIndex,
    tile_colors: &[Rgb],
    memo: &mut ColorMemo,
) -> Vec<MatchResult> {
    let mut results = Vec::with_capacity(tile_colors.len());

    for &color in tile_colors {
        let result = memo.get_or_resolve(color, || match index.nearest(color) {
            Some(entry) => MatchResult::Sprite(entry.sprite.clone()),
            None => MatchResult::Placeholder,
        });
        results.push(result.clone());
    }

    results
}
