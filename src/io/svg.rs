//! SVG mosaic rendering and export
//!
//! The mosaic renders as one `<image>` element per tile, laid out in a grid
//! exactly `tile_size` pixels apart. SVG keeps the output resolution-free
//! and defers sprite rasterization to the viewer.

use crate::io::error::{MosaicError, Result};
use crate::spatial::mosaic::Mosaic;
use std::fmt::Write as _;
use std::path::Path;

const XMLNS: &str = "http://www.w3.org/2000/svg";

/// Render a mosaic as an SVG document string
///
/// Cells without a resolved sprite reference the `placeholder` path.
pub fn render_mosaic(mosaic: &Mosaic, placeholder: &str) -> String {
    let width = mosaic.width();
    let height = mosaic.height();
    let tile_size = mosaic.tile_size();
    let cols = mosaic.cols();

    let mut svg = String::with_capacity(128 + mosaic.cells().len() * 80);
    let _ = writeln!(
        svg,
        "<svg xmlns=\"{XMLNS}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );

    for (i, cell) in mosaic.cells().iter().enumerate() {
        let x = (i % cols) * tile_size;
        let y = (i / cols) * tile_size;
        let href = escape_attribute(cell.sprite_or(placeholder));
        let _ = writeln!(
            svg,
            "  <image href=\"{href}\" x=\"{x}\" y=\"{y}\" width=\"{tile_size}\" height=\"{tile_size}\"/>"
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render a mosaic and write it to `output_path`
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// document cannot be written.
pub fn export_mosaic<P: AsRef<Path>>(
    mosaic: &Mosaic,
    placeholder: &str,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let document = render_mosaic(mosaic, placeholder);
    std::fs::write(output_path, document).map_err(|e| MosaicError::MosaicExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

/// Escape a string for use inside a double-quoted XML attribute
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
