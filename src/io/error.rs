//! Error types for palette loading, extraction, and mosaic export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
///
/// Every failure is a deterministic function of its input; retrying with
/// identical input yields the identical failure, so no error is retried
/// internally.
#[derive(Debug)]
pub enum MosaicError {
    /// Palette data source contained zero usable entries
    ///
    /// Fatal to index construction; there is nothing to build from.
    EmptyPalette,

    /// A palette record carries out-of-range or unusable data
    ///
    /// One bad record aborts the whole load: a corrupt entry is evidence
    /// of a broken dataset packaging step, not an isolated glitch.
    InvalidPaletteEntry {
        /// Zero-based position of the record in the dataset
        index: usize,
        /// Description of what is wrong with the record
        reason: String,
    },

    /// Palette dataset could not be parsed as JSON records
    PaletteParse {
        /// Path to the dataset file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
    },

    /// Source image buffer has zero area
    EmptyImage {
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },

    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write a rendered mosaic to disk
    MosaicExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => {
                write!(f, "Palette contains no entries; nothing to index")
            }
            Self::InvalidPaletteEntry { index, reason } => {
                write!(f, "Invalid palette entry at index {index}: {reason}")
            }
            Self::PaletteParse { path, source } => {
                write!(f, "Failed to parse palette '{}': {source}", path.display())
            }
            Self::EmptyImage { width, height } => {
                write!(f, "Image has zero area ({width}x{height}); no tiles to extract")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MosaicExport { path, source } => {
                write!(
                    f,
                    "Failed to export mosaic to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PaletteParse { source, .. } => Some(source),
            Self::ImageLoad { source, .. } => Some(source),
            Self::MosaicExport { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
