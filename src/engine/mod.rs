//! Nearest-color palette matching over an immutable spatial index
//!
//! This module contains the matching engine core:
//! - RGB color representation and distance metric
//! - k-d tree palette index construction and search
//! - Tile color to sprite resolution with per-pass memoization

/// RGB color type and squared Euclidean distance
pub mod color;
/// k-d tree palette index construction and nearest-neighbor search
pub mod kdtree;
/// Tile color to sprite reference resolution
pub mod matcher;
/// Per-pass memoization of resolved colors
pub mod memo;

pub use color::Rgb;
pub use kdtree::{PaletteEntry, PaletteIndex};
pub use matcher::MatchResult;
