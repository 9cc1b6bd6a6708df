//! Source image decoding into pixel buffers

use crate::engine::color::Rgb;
use crate::io::error::{MosaicError, Result};
use ndarray::Array2;
use std::path::Path;

/// Decode an image file into an RGB pixel buffer
///
/// The buffer is indexed (`row`, `col`) and taken at the image's decoded
/// size; resizing policy belongs to the caller. Alpha is dropped: tile
/// averaging treats every pixel as fully opaque.
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be opened or is
/// not a decodable image format.
pub fn load_pixels<P: AsRef<Path>>(path: P) -> Result<Array2<Rgb>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);

    let mut pixels = Array2::from_elem((height, width), Rgb::new(0, 0, 0));
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, _alpha] = pixel.0;
        if let Some(slot) = pixels.get_mut((y as usize, x as usize)) {
            *slot = Rgb::new(r, g, b);
        }
    }

    Ok(pixels)
}
