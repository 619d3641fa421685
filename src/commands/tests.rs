//! Unit tests for command handlers

use super::*;
use crate::{
    cli::types::Category,
    models::{PlayerTotalsRow, UNKNOWN_TEAM},
    parser::parse_box_score,
    stats::{aggregate_season, get_leaderboard},
    storage::{seed_sample_data, GameStore, MemoryStore},
    DB_PATH_ENV_VAR,
};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

const TIGERS_EAGLES: &str = "Tigers vs Eagles\n5/15/2024\n5 - 3\nTigers Batting\nAlex Smith 4 2 1 2\n";

fn no_ocr(sidecar: bool) -> OcrArgs {
    OcrArgs {
        ocr_cmd: None,
        sidecar,
    }
}

fn db_in(dir: &Path) -> Option<PathBuf> {
    Some(dir.join("stats.db"))
}

#[cfg(test)]
mod resolve_tests {
    use super::*;
    use crate::storage::StatsDatabase;

    #[test]
    fn test_resolve_db_path_from_option() {
        let path = resolve_db_path(Some(PathBuf::from("/tmp/league.db"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/league.db"));
    }

    #[test]
    fn test_default_path_prefers_env_value() {
        let path = StatsDatabase::default_path_from(
            Some("/tmp/from-env.db".to_string()),
            Some(PathBuf::from("/data")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-env.db"));
    }

    #[test]
    fn test_default_path_falls_back_to_data_dir() {
        let path =
            StatsDatabase::default_path_from(Some("  ".to_string()), Some(PathBuf::from("/data")))
                .unwrap();
        assert_eq!(path, PathBuf::from("/data/little-league-stats/stats.db"));
    }

    #[test]
    fn test_default_path_without_data_dir() {
        let err = StatsDatabase::default_path_from(None, None).unwrap_err();
        match err.downcast_ref::<StatsError>() {
            Some(StatsError::MissingDataDir { env_var }) => assert_eq!(env_var, DB_PATH_ENV_VAR),
            other => panic!("Expected MissingDataDir, got {:?}", other),
        }
    }

    #[test]
    fn test_ocr_command_precedence() {
        assert_eq!(choose_ocr_command(None, None), DEFAULT_OCR_PROGRAM);
        assert_eq!(choose_ocr_command(Some("  ".into()), None), DEFAULT_OCR_PROGRAM);
        assert_eq!(
            choose_ocr_command(None, Some("tesseract --psm 6".into())),
            "tesseract --psm 6"
        );
        assert_eq!(
            choose_ocr_command(Some("ocrad".into()), Some("tesseract --psm 6".into())),
            "ocrad"
        );
        assert_eq!(choose_ocr_command(None, Some("".into())), DEFAULT_OCR_PROGRAM);
    }

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(3).unwrap(), 3);
        assert!(matches!(validate_limit(0), Err(StatsError::InvalidLimit)));
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_render_parsed_lists_batters() {
        let parsed = parse_box_score(TIGERS_EAGLES, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        let out = render_parsed(&parsed);

        assert!(out.starts_with("2024-05-15  Tigers 5 @ Eagles 3  (Unknown Venue)"));
        assert!(out.contains("Alex Smith"));
        assert!(out.contains("0.500"));
    }

    #[test]
    fn test_render_parsed_without_batters() {
        let parsed = parse_box_score("", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        let out = render_parsed(&parsed);

        assert!(out.contains(UNKNOWN_TEAM));
        assert!(out.ends_with("No batting lines found\n"));
    }

    #[test]
    fn test_render_leaderboard_rows_in_rank_order() {
        let store = MemoryStore::new();
        seed_sample_data(&store).unwrap();
        let board = get_leaderboard(&store, &Category::Rbi, 3).unwrap();
        let out = render_leaderboard(&Category::Rbi, &board);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2 + board.len());
        assert!(lines[0].starts_with(Category::Rbi.label()));
        assert!(lines[2].contains(&board[0].name));
    }

    #[test]
    fn test_render_empty_views_say_no_data() {
        let expected = format!("{}\n", StatsError::NoData);
        assert_eq!(render_leaderboard(&Category::HomeRuns, &[]), expected);
        assert_eq!(render_games(&[]), expected);
        assert_eq!(render_totals(&[]), expected);
    }

    #[test]
    fn test_render_games_shows_score_and_status() {
        let store = MemoryStore::new();
        seed_sample_data(&store).unwrap();
        let out = render_games(&store.list_recent_games(5).unwrap());

        assert!(out.contains("Sharks @ Hawks"));
        assert!(out.contains("2 - 7"));
        assert!(out.contains("Processed"));
        // Most recent game first
        assert!(out.find("Sharks").unwrap() < out.find("Tigers").unwrap());
    }

    #[test]
    fn test_render_totals_one_row_per_player() {
        let store = MemoryStore::new();
        seed_sample_data(&store).unwrap();
        let totals = aggregate_season(&store.list_all_player_lines().unwrap());
        let rows: Vec<PlayerTotalsRow> = totals.values().map(PlayerTotalsRow::from).collect();

        let out = render_totals(&rows);
        assert_eq!(out.lines().count(), rows.len() + 1);
    }

    #[test]
    fn test_render_outcomes_counts_successes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("game1.txt"), TIGERS_EAGLES).unwrap();
        let store = MemoryStore::new();
        let outcomes = crate::ingest::process_batch(
            &store,
            &crate::ingest::SidecarTextRecognizer,
            &[dir.path().join("game1.txt"), dir.path().join("notes.pdf")],
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );

        let out = render_outcomes(&outcomes);
        assert!(out.contains("✓ game1.txt: Successfully processed: Tigers 5 @ Eagles 3"));
        assert!(out.contains("✗ notes.pdf: Error:"));
        assert!(out.ends_with("Processed 1 of 2 files\n"));
    }
}

#[cfg(test)]
mod handler_tests {
    use super::*;
    use crate::storage::StatsDatabase;

    #[test]
    fn test_parse_without_save_leaves_db_untouched() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("box.txt");
        fs::write(&file, TIGERS_EAGLES).unwrap();

        handle_parse(ParseParams {
            file,
            save: false,
            as_json: true,
            db: db_in(dir.path()),
        })
        .unwrap();

        assert!(!dir.path().join("stats.db").exists());
    }

    #[test]
    fn test_parse_with_save_stores_game() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("box.txt");
        fs::write(&file, TIGERS_EAGLES).unwrap();

        handle_parse(ParseParams {
            file,
            save: true,
            as_json: false,
            db: db_in(dir.path()),
        })
        .unwrap();

        let db = StatsDatabase::open(&dir.path().join("stats.db")).unwrap();
        let games = db.list_recent_games(5).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].summary(), "Tigers 5 @ Eagles 3");
        assert_eq!(db.list_all_player_lines().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = handle_parse(ParseParams {
            file: dir.path().join("nope.txt"),
            save: false,
            as_json: false,
            db: db_in(dir.path()),
        });
        assert!(matches!(result, Err(StatsError::Io(_))));
    }

    #[test]
    fn test_ingest_with_sidecar_text() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("game1.png");
        fs::write(&image, b"png bytes").unwrap();
        fs::write(dir.path().join("game1.txt"), TIGERS_EAGLES).unwrap();

        handle_ingest(IngestParams {
            paths: vec![image.clone(), dir.path().join("missing.jpg")],
            ocr: no_ocr(true),
            as_json: false,
            db: db_in(dir.path()),
        })
        .unwrap();

        let db = StatsDatabase::open(&dir.path().join("stats.db")).unwrap();
        assert_eq!(db.list_recent_games(5).unwrap().len(), 1);
        assert!(db.is_ingested(&crate::ingest::source_key(&image)).unwrap());
    }

    #[test]
    fn test_leaders_and_games_reject_zero_limit() {
        let dir = tempdir().unwrap();
        let leaders = handle_leaders(Category::Runs, 0, false, db_in(dir.path()));
        let games = handle_games(0, true, db_in(dir.path()));

        assert!(matches!(leaders, Err(StatsError::InvalidLimit)));
        assert!(matches!(games, Err(StatsError::InvalidLimit)));
    }

    #[test]
    fn test_seed_then_reports_succeed() {
        let dir = tempdir().unwrap();
        handle_seed(db_in(dir.path())).unwrap();

        handle_leaders(Category::BattingAvg, 5, false, db_in(dir.path())).unwrap();
        handle_leaders(Category::Unrecognized("era2".into()), 5, true, db_in(dir.path())).unwrap();
        handle_games(5, false, db_in(dir.path())).unwrap();
        handle_totals(true, db_in(dir.path())).unwrap();

        let db = StatsDatabase::open(&dir.path().join("stats.db")).unwrap();
        assert_eq!(db.list_recent_games(10).unwrap().len(), 2);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let dir = tempdir().unwrap();
        handle_seed(db_in(dir.path())).unwrap();

        handle_reset(false, db_in(dir.path())).unwrap();
        let db = StatsDatabase::open(&dir.path().join("stats.db")).unwrap();
        assert_eq!(db.list_recent_games(10).unwrap().len(), 2);
        drop(db);

        handle_reset(true, db_in(dir.path())).unwrap();
        let db = StatsDatabase::open(&dir.path().join("stats.db")).unwrap();
        assert!(db.list_recent_games(10).unwrap().is_empty());
        assert!(db.list_all_player_lines().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_watch_once_processes_folder() {
        let dir = tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        fs::create_dir_all(&uploads).unwrap();
        fs::write(uploads.join("game1.jpg"), b"jpg bytes").unwrap();
        fs::write(uploads.join("game1.txt"), TIGERS_EAGLES).unwrap();

        let params = || WatchParams {
            folder: uploads.clone(),
            interval: Duration::from_secs(1),
            once: true,
            leaders: Some(Category::Rbi),
            ocr: no_ocr(true),
            db: db_in(dir.path()),
        };
        handle_watch(params()).await.unwrap();
        // Second pass finds nothing new
        handle_watch(params()).await.unwrap();

        let db = StatsDatabase::open(&dir.path().join("stats.db")).unwrap();
        let games = db.list_recent_games(10).unwrap();
        // Only images are picked up; game1.txt serves as the sidecar
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].summary(), "Tigers 5 @ Eagles 3");
    }

    #[tokio::test]
    async fn test_watch_creates_missing_folder() {
        let dir = tempdir().unwrap();
        let uploads = dir.path().join("new-uploads");

        handle_watch(WatchParams {
            folder: uploads.clone(),
            interval: Duration::from_secs(1),
            once: true,
            leaders: None,
            ocr: no_ocr(true),
            db: db_in(dir.path()),
        })
        .await
        .unwrap();

        assert!(uploads.is_dir());
    }
}
