//! Default values and output naming constants

/// Default square tile edge length in pixels
pub const DEFAULT_TILE_SIZE: usize = 16;

/// Sprite substituted for tiles the palette could not resolve
pub const PLACEHOLDER_SPRITE: &str = "sprite/placeholder.svg";

/// Suffix added to mosaic output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// File extensions recognized as processable source images
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
