//! Tests for argument parsing and seeded session runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tilegrid::io::cli::{Cli, SessionRunner};
    use tilegrid::io::configuration::{DEFAULT_DRAG_COUNT, DEFAULT_GRID_SIZE, DEFAULT_SEED};
    use tilegrid::GridError;

    fn small_session(seed: &str) -> Cli {
        Cli::parse_from([
            "tilegrid", "-W", "6", "-H", "5", "-d", "40", "-p", "10", "-s", seed, "-q",
        ])
    }

    // Tests defaults when no flags are given
    // Verified by changing the default grid size
    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["tilegrid"]);

        assert_eq!(cli.width, DEFAULT_GRID_SIZE);
        assert_eq!(cli.height, DEFAULT_GRID_SIZE);
        assert_eq!(cli.drags, DEFAULT_DRAG_COUNT);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.export.is_none());
        assert!(!cli.snap_to_empty);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_filter(), "tilegrid=info");
    }

    // Tests that flags flow into the grid configuration
    // Verified by ignoring the snap range flag
    #[test]
    fn test_grid_config_from_flags() {
        let cli = Cli::parse_from(["tilegrid", "-W", "8", "-H", "3", "-c", "2.5", "-r", "4", "-v"]);
        let config = cli.grid_config();

        assert_eq!((config.width, config.height), (8, 3));
        assert!((config.cell_size - 2.5).abs() < f32::EPSILON);
        assert!((config.snap_range - 4.0).abs() < f32::EPSILON);
        assert_eq!(cli.log_filter(), "tilegrid=debug");
        assert!(!config.snap_to_empty);
        assert!(Cli::parse_from(["tilegrid", "--snap-to-empty"]).grid_config().snap_to_empty);
    }

    // Tests that a session accounts for every drag and leaves no gaps
    // Verified by skipping the backfill after rejected pick-ups
    #[test]
    fn test_session_totals() -> tilegrid::Result<()> {
        let report = SessionRunner::new(small_session("7")).run()?;

        assert_eq!(report.placements, 10);
        assert_eq!(report.drags, 40);
        assert_eq!(report.snapped + report.rejected, 40);
        assert_eq!(report.census.vacant_cells, 0);
        assert_eq!(report.census.empty_tiles + report.census.populated_tiles, 30);
        assert_eq!(report.snap_points, report.census.populated_tiles);
        assert_eq!(
            report.presentations_created - report.presentations_destroyed as u64,
            30
        );
        Ok(())
    }

    // Tests that the same seed replays the same session
    // Verified by seeding from entropy
    #[test]
    fn test_session_is_deterministic() -> tilegrid::Result<()> {
        let first = SessionRunner::new(small_session("11")).run()?;
        let second = SessionRunner::new(small_session("11")).run()?;

        assert_eq!(first, second);
        Ok(())
    }

    // Tests that an invalid grid size fails before anything runs
    // Verified by validating after building the catalog
    #[test]
    fn test_session_rejects_zero_width() {
        let cli = Cli::parse_from(["tilegrid", "-W", "0", "-q"]);

        assert!(matches!(
            SessionRunner::new(cli).run(),
            Err(GridError::InvalidParameter { parameter: "width", .. })
        ));
    }

    // Tests that the export flag writes a debug image
    // Verified by ignoring the export path
    #[test]
    fn test_session_export() -> tilegrid::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.png");
        let Some(path_arg) = path.to_str() else {
            unreachable!("temporary paths are valid UTF-8");
        };
        let cli = Cli::parse_from([
            "tilegrid", "-W", "4", "-H", "4", "-d", "5", "-p", "3", "-q", "-e", path_arg,
        ]);

        SessionRunner::new(cli).run()?;

        assert!(path.is_file());
        Ok(())
    }
}
