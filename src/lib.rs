//! Sprite mosaic generation using per-tile color averaging and nearest-color palette matching
//!
//! The system reduces a source image to a grid of average tile colors, resolves
//! each color against an immutable k-d tree index of sprite palette entries,
//! and assembles the chosen sprites into a renderable mosaic grid.

#![forbid(unsafe_code)]

/// Palette indexing and nearest-color matching engine
pub mod engine;
/// Input/output operations and error handling
pub mod io;
/// Tile color extraction and mosaic grid assembly
pub mod spatial;

pub use io::error::{MosaicError, Result};
