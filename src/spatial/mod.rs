//! Spatial reduction of pixel buffers and mosaic grid assembly
//!
//! This module contains the grid-facing half of the pipeline:
//! - Per-tile average color extraction from a pixel buffer
//! - Arrangement of matched sprites into a renderable mosaic grid

/// Per-tile average color extraction
pub mod extract;
/// Mosaic grid assembly from matched sprites
pub mod mosaic;

pub use extract::{TileGrid, extract_tile_colors};
pub use mosaic::Mosaic;
