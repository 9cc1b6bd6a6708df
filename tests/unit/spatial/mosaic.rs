//! Tests for mosaic grid assembly

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilemosaic::MosaicError;
    use tilemosaic::engine::color::Rgb;
    use tilemosaic::engine::kdtree::{PaletteEntry, PaletteIndex};
    use tilemosaic::engine::matcher::MatchResult;
    use tilemosaic::spatial::extract::extract_tile_colors;
    use tilemosaic::spatial::mosaic::Mosaic;

    fn gray_index() -> PaletteIndex {
        PaletteIndex::build(vec![
            PaletteEntry::new("dark".to_string(), Rgb::new(20, 20, 20)),
            PaletteEntry::new("light".to_string(), Rgb::new(230, 230, 230)),
        ])
        .unwrap()
    }

    // Tests assembled geometry matches the extracted grid
    #[test]
    fn test_assemble_geometry() {
        let pixels = Array2::from_elem((10, 18), Rgb::new(30, 30, 30));
        let grid = extract_tile_colors(&pixels, 4).unwrap();
        let cells = vec![MatchResult::Sprite("dark".to_string()); grid.len()];

        let mosaic = Mosaic::assemble(&grid, cells).unwrap();
        assert_eq!(mosaic.cols(), 5);
        assert_eq!(mosaic.rows(), 3);
        assert_eq!(mosaic.tile_size(), 4);
        assert_eq!(mosaic.width(), 20);
        assert_eq!(mosaic.height(), 12);
    }

    // Tests cell count mismatches are rejected
    // Verified by padding the cell vector to the expected length
    #[test]
    fn test_assemble_rejects_mismatched_cells() {
        let pixels = Array2::from_elem((8, 8), Rgb::new(30, 30, 30));
        let grid = extract_tile_colors(&pixels, 4).unwrap();
        let cells = vec![MatchResult::Sprite("dark".to_string()); grid.len() + 1];

        assert!(matches!(
            Mosaic::assemble(&grid, cells),
            Err(MosaicError::InvalidParameter { parameter, .. }) if parameter == "cells"
        ));
    }

    // Tests row-major cell addressing
    #[test]
    fn test_cell_addressing() {
        let pixels = Array2::from_elem((8, 12), Rgb::new(30, 30, 30));
        let grid = extract_tile_colors(&pixels, 4).unwrap();

        let cells: Vec<MatchResult> = (0..grid.len())
            .map(|i| MatchResult::Sprite(format!("sprite{i}.svg")))
            .collect();
        let mosaic = Mosaic::assemble(&grid, cells).unwrap();

        // index = row * cols + col with cols = 3
        assert_eq!(
            mosaic.cell(2, 0),
            Some(&MatchResult::Sprite("sprite2.svg".to_string()))
        );
        assert_eq!(
            mosaic.cell(0, 1),
            Some(&MatchResult::Sprite("sprite3.svg".to_string()))
        );
        assert!(mosaic.cell(3, 0).is_none());
        assert!(mosaic.cell(0, 2).is_none());
    }

    // Tests the one-call pipeline agrees with manual staging
    #[test]
    fn test_generate_pipeline() {
        let index = gray_index();
        let pixels = Array2::from_elem((4, 4), Rgb::new(25, 25, 25));

        let mosaic = Mosaic::generate(&pixels, 4, &index).unwrap();
        assert_eq!(mosaic.cells(), &[MatchResult::Sprite("dark".to_string())]);

        let grid = extract_tile_colors(&pixels, 4).unwrap();
        let manual = Mosaic::assemble(
            &grid,
            tilemosaic::engine::matcher::match_tiles(&index, grid.colors()),
        )
        .unwrap();
        assert_eq!(mosaic, manual);
    }

    // Tests pipeline errors propagate unchanged from extraction
    #[test]
    fn test_generate_propagates_extraction_errors() {
        let index = gray_index();
        let empty = Array2::from_elem((0, 4), Rgb::new(0, 0, 0));

        assert!(matches!(
            Mosaic::generate(&empty, 4, &index),
            Err(MosaicError::EmptyImage { .. })
        ));
    }
}
