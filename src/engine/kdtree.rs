//! Immutable k-d tree over palette entries for nearest-color search
//!
//! The tree is built once from the full palette and never mutated; every
//! matching pass shares it read-only. Construction splits at the median of
//! the depth's color channel (red, green, blue rotation) so search stays
//! logarithmic for well-distributed palettes.

use crate::engine::color::Rgb;
use crate::io::error::{MosaicError, Result};

/// A sprite and the representative color it is matched by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Opaque sprite reference, typically a path into the sprite set
    pub sprite: String,
    /// Representative color compared against tile averages
    pub color: Rgb,
}

impl PaletteEntry {
    /// Create an entry from a sprite reference and its color
    pub const fn new(sprite: String, color: Rgb) -> Self {
        Self { sprite, color }
    }
}

/// One tree node holding a median entry and its subtree links
///
/// Nodes live in a flat arena and reference each other by index, keeping
/// the structure free of ownership cycles and cheap to share.
#[derive(Debug, Clone)]
struct Node {
    /// Index into the entry arena; doubles as the tie-break rank
    entry: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Read-only spatial index resolving colors to their nearest palette entry
///
/// Entries keep their load order: on equal distance the entry with the
/// lowest original index wins, which makes search results reproducible
/// regardless of tree shape.
#[derive(Debug, Clone)]
pub struct PaletteIndex {
    entries: Vec<PaletteEntry>,
    nodes: Vec<Node>,
    root: usize,
}

impl PaletteIndex {
    /// Build an index from the full palette entry set
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPalette`] if `entries` contains no
    /// entries; there is nothing to search in an empty palette.
    pub fn build(entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MosaicError::EmptyPalette);
        }

        let mut order: Vec<usize> = (0..entries.len()).collect();
        let mut nodes = Vec::with_capacity(entries.len());
        let root = build_subtree(&entries, &mut order, 0, &mut nodes).unwrap_or(0);

        Ok(Self {
            entries,
            nodes,
            root,
        })
    }

    /// Find the palette entry nearest to `color` by squared Euclidean distance
    ///
    /// Performs the standard descent into the half-space containing the
    /// query, then backtracks into sibling branches only when the splitting
    /// plane lies within the current best distance. `None` is only possible
    /// for an index with no reachable entries, which [`Self::build`] rejects.
    pub fn nearest(&self, color: Rgb) -> Option<&PaletteEntry> {
        let mut best: Option<(u32, usize)> = None;
        self.search(self.root, color, 0, &mut best);
        best.and_then(|(_, entry)| self.entries.get(entry))
    }

    fn search(&self, node_index: usize, color: Rgb, depth: usize, best: &mut Option<(u32, usize)>) {
        let Some(node) = self.nodes.get(node_index) else {
            return;
        };
        let Some(entry) = self.entries.get(node.entry) else {
            return;
        };

        let distance = color.distance_sq(entry.color);
        let improves = match *best {
            // Equal distances resolve to the entry loaded first
            Some((best_distance, best_entry)) => {
                distance < best_distance || (distance == best_distance && node.entry < best_entry)
            }
            None => true,
        };
        if improves {
            *best = Some((distance, node.entry));
        }

        let diff = i32::from(color.channel(depth)) - i32::from(entry.color.channel(depth));
        let (near, far) = if diff < 0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(child) = near {
            self.search(child, color, depth + 1, best);
        }

        // The sibling half-space can only hold a closer entry, or an equal
        // tie-break candidate, when the splitting plane is within reach
        let plane_distance = (diff * diff) as u32;
        if let Some((best_distance, _)) = *best {
            if plane_distance <= best_distance {
                if let Some(child) = far {
                    self.search(child, color, depth + 1, best);
                }
            }
        }
    }

    /// Get the palette entry stored at `index` in load order
    pub fn entry(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Get all entries in load order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries; always false for a built index
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recursively partition `slice` (entry indices) into a balanced subtree
///
/// Sorting by (channel value, load order) before the median split keeps
/// construction fully deterministic even for duplicate colors.
fn build_subtree(
    entries: &[PaletteEntry],
    slice: &mut [usize],
    depth: usize,
    nodes: &mut Vec<Node>,
) -> Option<usize> {
    if slice.is_empty() {
        return None;
    }

    slice.sort_unstable_by_key(|&index| {
        let channel = entries
            .get(index)
            .map_or(0, |entry| entry.color.channel(depth));
        (channel, index)
    });

    let median = slice.len() / 2;
    let (left, rest) = slice.split_at_mut(median);
    let (&mut entry, right) = rest.split_first_mut()?;

    let node_index = nodes.len();
    nodes.push(Node {
        entry,
        left: None,
        right: None,
    });

    let left_child = build_subtree(entries, left, depth + 1, nodes);
    let right_child = build_subtree(entries, right, depth + 1, nodes);

    if let Some(node) = nodes.get_mut(node_index) {
        node.left = left_child;
        node.right = right_child;
    }

    Some(node_index)
}
