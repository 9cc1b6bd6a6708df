//! Tests for command-line interface parsing and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use tilemosaic::io::cli::{Cli, FileProcessor, output_path_for};
    use tilemosaic::io::configuration::DEFAULT_TILE_SIZE;

    // Tests CLI parsing with only the required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let args = vec!["program", "photo.png", "--palette", "palette.json"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("photo.png"));
        assert_eq!(cli.palette, PathBuf::from("palette.json"));
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert!(!cli.quiet);
        assert!(!cli.no_skip);
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let args = vec![
            "program",
            "shots/",
            "--palette",
            "emoji.json",
            "--tile-size",
            "8",
            "--placeholder",
            "blank.svg",
            "--quiet",
            "--no-skip",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("shots/"));
        assert_eq!(cli.tile_size, 8);
        assert_eq!(cli.placeholder, "blank.svg");
        assert!(cli.quiet);
        assert!(cli.no_skip);
    }

    // Tests file skip behavior based on --no-skip flag
    // Verified by inverting boolean logic in skip_existing
    #[test]
    fn test_skip_existing_logic() {
        let cli = Cli::parse_from(vec!["program", "a.png", "--palette", "p.json"]);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());

        let cli = Cli::parse_from(vec![
            "program", "a.png", "--palette", "p.json", "--no-skip", "--quiet",
        ]);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests output naming keeps the input's directory and stem
    #[test]
    fn test_output_path_derivation() {
        assert_eq!(
            output_path_for(Path::new("shots/photo.png")),
            PathBuf::from("shots/photo_mosaic.svg")
        );
        assert_eq!(
            output_path_for(Path::new("photo.jpg")),
            PathBuf::from("photo_mosaic.svg")
        );
    }

    // Tests a nonexistent target fails before any palette work
    #[test]
    fn test_process_rejects_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from(vec![
            "program",
            dir.path().join("absent.png").to_str().unwrap(),
            "--palette",
            "unused.json",
        ]);

        let mut processor = FileProcessor::new(cli);
        assert!(processor.process().is_err());
    }

    // Tests a non-image target file is rejected
    #[test]
    fn test_process_rejects_non_image_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("notes.txt");
        std::fs::write(&target, "hello").unwrap();

        let cli = Cli::parse_from(vec![
            "program",
            target.to_str().unwrap(),
            "--palette",
            "unused.json",
        ]);

        let mut processor = FileProcessor::new(cli);
        assert!(processor.process().is_err());
    }

    // Tests the end-to-end batch path: palette load, matching, SVG export
    #[test]
    fn test_process_generates_mosaic() {
        let dir = tempfile::tempdir().unwrap();

        let palette_path = dir.path().join("palette.json");
        std::fs::write(
            &palette_path,
            r#"[
                { "sprite": "sprite/dark.svg", "color": { "r": 20, "g": 20, "b": 20 } },
                { "sprite": "sprite/light.svg", "color": { "r": 230, "g": 230, "b": 230 } }
            ]"#,
        )
        .unwrap();

        let input_path = dir.path().join("input.png");
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([25, 25, 25, 255]));
        img.save(&input_path).unwrap();

        let cli = Cli::parse_from(vec![
            "program",
            input_path.to_str().unwrap(),
            "--palette",
            palette_path.to_str().unwrap(),
            "--tile-size",
            "4",
            "--quiet",
        ]);

        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();

        let output = std::fs::read_to_string(output_path_for(&input_path)).unwrap();
        assert!(output.contains("href=\"sprite/dark.svg\""));
        assert_eq!(output.matches("<image ").count(), 1);
    }

    // Tests existing outputs are skipped unless --no-skip is passed
    // Verified by comparing output timestamps across runs
    #[test]
    fn test_process_skips_existing_output() {
        let dir = tempfile::tempdir().unwrap();

        let palette_path = dir.path().join("palette.json");
        std::fs::write(
            &palette_path,
            r#"[{ "sprite": "s.svg", "color": { "r": 0, "g": 0, "b": 0 } }]"#,
        )
        .unwrap();

        let input_path = dir.path().join("input.png");
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
        img.save(&input_path).unwrap();

        let output_path = output_path_for(&input_path);
        std::fs::write(&output_path, "sentinel").unwrap();

        let cli = Cli::parse_from(vec![
            "program",
            input_path.to_str().unwrap(),
            "--palette",
            palette_path.to_str().unwrap(),
            "--quiet",
        ]);
        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();

        assert_eq!(
            std::fs::read_to_string(&output_path).unwrap(),
            "sentinel",
            "existing output must be left untouched"
        );

        let cli = Cli::parse_from(vec![
            "program",
            input_path.to_str().unwrap(),
            "--palette",
            palette_path.to_str().unwrap(),
            "--quiet",
            "--no-skip",
        ]);
        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();

        let regenerated = std::fs::read_to_string(&output_path).unwrap();
        assert!(regenerated.starts_with("<svg"), "output must be regenerated");
    }
}
