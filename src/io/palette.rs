//! Palette dataset loading with strict record validation
//!
//! The dataset is a JSON array of `{ "sprite": <path>, "color": { "r", "g",
//! "b" } }` records produced offline by the sprite pipeline. Records are
//! parsed into loosely-ranged integers first, then validated into typed
//! entries so an out-of-range channel surfaces as a descriptive error
//! instead of being silently clamped.

use crate::engine::color::Rgb;
use crate::engine::kdtree::{PaletteEntry, PaletteIndex};
use crate::io::error::{MosaicError, Result};
use serde::Deserialize;
use std::path::Path;

/// A palette record as it appears on disk, before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPaletteRecord {
    sprite: String,
    color: RawColor,
}

/// Channel values wide enough to detect out-of-range data
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColor {
    r: i64,
    g: i64,
    b: i64,
}

/// Load and validate a palette dataset from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON array of
/// palette records, contains a record with out-of-range channel values or
/// an empty sprite reference, or contains no records at all.
pub fn load_palette<P: AsRef<Path>>(path: P) -> Result<Vec<PaletteEntry>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read palette",
        source: e,
    })?;

    let records: Vec<RawPaletteRecord> =
        serde_json::from_str(&text).map_err(|e| MosaicError::PaletteParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_records(records)
}

/// Parse and validate a palette dataset from an in-memory JSON string
///
/// # Errors
///
/// Same failure modes as [`load_palette`], minus the filesystem read. Parse
/// errors carry `<inline>` as their path.
pub fn parse_palette(text: &str) -> Result<Vec<PaletteEntry>> {
    let records: Vec<RawPaletteRecord> =
        serde_json::from_str(text).map_err(|e| MosaicError::PaletteParse {
            path: "<inline>".into(),
            source: e,
        })?;

    validate_records(records)
}

/// Load a palette dataset and build the search index in one step
///
/// This is the intended startup path: the palette is loaded exactly once,
/// before any matching request, and the returned index is immutable and
/// safe to share across threads for the rest of the process lifetime.
///
/// # Errors
///
/// Propagates any [`load_palette`] failure, plus
/// [`MosaicError::EmptyPalette`] from index construction.
pub fn build_index<P: AsRef<Path>>(path: P) -> Result<PaletteIndex> {
    let entries = load_palette(path)?;
    PaletteIndex::build(entries)
}

fn validate_records(records: Vec<RawPaletteRecord>) -> Result<Vec<PaletteEntry>> {
    if records.is_empty() {
        return Err(MosaicError::EmptyPalette);
    }

    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        entries.push(validate_record(index, record)?);
    }

    Ok(entries)
}

fn validate_record(index: usize, record: RawPaletteRecord) -> Result<PaletteEntry> {
    if record.sprite.is_empty() {
        return Err(MosaicError::InvalidPaletteEntry {
            index,
            reason: "sprite reference is empty".to_string(),
        });
    }

    let color = Rgb::new(
        validate_channel(index, "r", record.color.r)?,
        validate_channel(index, "g", record.color.g)?,
        validate_channel(index, "b", record.color.b)?,
    );

    Ok(PaletteEntry::new(record.sprite, color))
}

fn validate_channel(index: usize, name: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_out_of_range| MosaicError::InvalidPaletteEntry {
        index,
        reason: format!("channel '{name}' value {value} is outside 0-255"),
    })
}
