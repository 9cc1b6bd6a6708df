//! Input/output operations: palette loading, image decoding, SVG export,
//! CLI orchestration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Default values and output naming constants
pub mod configuration;
/// Error types for all mosaic operations
pub mod error;
/// Source image decoding into pixel buffers
pub mod image;
/// Palette dataset loading and validation
pub mod palette;
/// Batch progress reporting
pub mod progress;
/// SVG mosaic rendering and export
pub mod svg;
