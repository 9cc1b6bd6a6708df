//! Arrangement of matched sprites into a renderable mosaic grid

use crate::engine::color::Rgb;
use crate::engine::kdtree::PaletteIndex;
use crate::engine::matcher::{MatchResult, match_tiles};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::extract::{TileGrid, extract_tile_colors};
use ndarray::Array2;

/// A completed mosaic: one sprite choice per tile plus grid geometry
///
/// Cells are row-major (`index = row * cols + col`), matching the order the
/// tile colors were extracted in. A renderer lays tiles out exactly
/// `tile_size` pixels apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mosaic {
    cells: Vec<MatchResult>,
    cols: usize,
    rows: usize,
    tile_size: usize,
}

impl Mosaic {
    /// Combine extracted grid geometry with matched sprites
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] when the cell count
    /// does not equal the grid's `cols * rows`.
    pub fn assemble(grid: &TileGrid, cells: Vec<MatchResult>) -> Result<Self> {
        if cells.len() != grid.len() {
            return Err(invalid_parameter(
                "cells",
                &cells.len(),
                &format!("expected one sprite per tile ({} tiles)", grid.len()),
            ));
        }

        Ok(Self {
            cells,
            cols: grid.cols(),
            rows: grid.rows(),
            tile_size: grid.tile_size(),
        })
    }

    /// Run the full pipeline: extract tile colors, match, assemble
    ///
    /// # Errors
    ///
    /// Returns an error if extraction rejects the buffer or tile size;
    /// matching itself cannot fail against a built index.
    pub fn generate(pixels: &Array2<Rgb>, tile_size: usize, index: &PaletteIndex) -> Result<Self> {
        let grid = extract_tile_colors(pixels, tile_size)?;
        let cells = match_tiles(index, grid.colors());
        Self::assemble(&grid, cells)
    }

    /// Sprite choices in row-major order
    pub fn cells(&self) -> &[MatchResult] {
        &self.cells
    }

    /// Sprite choice for the tile at (`col`, `row`)
    pub fn cell(&self, col: usize, row: usize) -> Option<&MatchResult> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Number of tile columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tile rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Square tile edge length in pixels
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Rendered width in pixels (`cols * tile_size`)
    pub const fn width(&self) -> usize {
        self.cols * self.tile_size
    }

    /// Rendered height in pixels (`rows * tile_size`)
    pub const fn height(&self) -> usize {
        self.rows * self.tile_size
    }
}
