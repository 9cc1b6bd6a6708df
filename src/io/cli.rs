//! Command-line interface for batch mosaic generation from image files

use crate::io::configuration::{
    DEFAULT_TILE_SIZE, IMAGE_EXTENSIONS, OUTPUT_SUFFIX, PLACEHOLDER_SPRITE,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::load_pixels;
use crate::io::palette::build_index;
use crate::io::progress::ProgressManager;
use crate::io::svg::export_mosaic;
use crate::spatial::mosaic::Mosaic;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Render images as sprite mosaics using nearest-color palette matching"
)]
/// Command-line arguments for the mosaic generation tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Palette dataset mapping sprite paths to representative colors (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub palette: PathBuf,

    /// Square tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Sprite path substituted for tiles without a palette match
    #[arg(long, default_value = PLACEHOLDER_SPRITE)]
    pub placeholder: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of image files with progress tracking
///
/// The palette index is built exactly once, before the first file is
/// touched, and shared read-only by every mosaic in the batch.
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the palette cannot be loaded and indexed, the
    /// target is not a usable image file or directory, or any file in the
    /// batch fails to load, match, or export.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let index = build_index(&self.cli.palette)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(file);
            }

            let pixels = load_pixels(file)?;
            let mosaic = Mosaic::generate(&pixels, self.cli.tile_size, &index)?;
            export_mosaic(&mosaic, &self.cli.placeholder, output_path_for(file))?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if !is_image_file(&self.cli.target) {
                return Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG or JPEG image",
                ));
            }
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let dir = std::fs::read_dir(&self.cli.target).map_err(|e| MosaicError::FileSystem {
                path: self.cli.target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in dir {
                let path = entry
                    .map_err(|e| MosaicError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if is_image_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path_for(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }
}

/// Check whether a path has a recognized image extension
fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Derive the mosaic output path for an input image (`<stem>_mosaic.svg`)
pub fn output_path_for(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{}.svg", stem.to_string_lossy(), OUTPUT_SUFFIX);

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
