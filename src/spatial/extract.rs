//! Reduction of a pixel buffer into a grid of per-tile average colors

use crate::engine::color::Rgb;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use ndarray::Array2;

/// Row-major grid of average tile colors with its dimensions
///
/// Derived from one source image and owned by a single matching pass;
/// a new upload fully replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    colors: Vec<Rgb>,
    cols: usize,
    rows: usize,
    tile_size: usize,
}

impl TileGrid {
    /// Average colors in row-major order (`index = row * cols + col`)
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
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

    /// Total number of tiles (`cols * rows`)
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the grid holds no tiles; never true for an extracted grid
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Average color of the tile at (`col`, `row`)
    pub fn color_at(&self, col: usize, row: usize) -> Option<Rgb> {
        if col >= self.cols {
            return None;
        }
        self.colors.get(row * self.cols + col).copied()
    }
}

/// Reduce `pixels` to one average color per `tile_size`-square tile
///
/// Dimensions are `cols = ceil(width / tile_size)` and
/// `rows = ceil(height / tile_size)`. Tiles on the right and bottom edges
/// are clipped to the buffer: only in-bounds pixels contribute to their
/// average, and sampling never wraps. Each channel is averaged
/// independently and rounded to the nearest integer.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyImage`] for a zero-area buffer, or
/// [`MosaicError::InvalidParameter`] when `tile_size` is zero.
pub fn extract_tile_colors(pixels: &Array2<Rgb>, tile_size: usize) -> Result<TileGrid> {
    let (height, width) = pixels.dim();

    if width == 0 || height == 0 {
        return Err(MosaicError::EmptyImage { width, height });
    }
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tile size must be at least one pixel",
        ));
    }

    let cols = width.div_ceil(tile_size);
    let rows = height.div_ceil(tile_size);

    let mut colors = Vec::with_capacity(cols * rows);
    for tile_row in 0..rows {
        for tile_col in 0..cols {
            colors.push(average_tile(pixels, tile_row, tile_col, tile_size));
        }
    }

    Ok(TileGrid {
        colors,
        cols,
        rows,
        tile_size,
    })
}

/// Arithmetic mean of the in-bounds pixels covered by one tile
fn average_tile(pixels: &Array2<Rgb>, tile_row: usize, tile_col: usize, tile_size: usize) -> Rgb {
    let (height, width) = pixels.dim();

    let row_start = tile_row * tile_size;
    let col_start = tile_col * tile_size;
    let row_end = (row_start + tile_size).min(height);
    let col_end = (col_start + tile_size).min(width);

    let mut sum = [0u64; 3];
    let mut count = 0u64;

    for row in row_start..row_end {
        for col in col_start..col_end {
            if let Some(pixel) = pixels.get((row, col)) {
                sum[0] += u64::from(pixel.r);
                sum[1] += u64::from(pixel.g);
                sum[2] += u64::from(pixel.b);
                count += 1;
            }
        }
    }

    if count == 0 {
        // Tile origins always land in bounds for grids sized by div_ceil
        return Rgb::new(0, 0, 0);
    }

    Rgb::new(
        rounded_mean(sum[0], count),
        rounded_mean(sum[1], count),
        rounded_mean(sum[2], count),
    )
}

/// Integer mean rounded to nearest, halves up
const fn rounded_mean(sum: u64, count: u64) -> u8 {
    ((2 * sum + count) / (2 * count)) as u8
}
