//! End-to-end tests: OCR text through parsing, storage and leaderboards

use little_league_stats::{
    commands::{resolve_db_path, validate_limit},
    ingest::{process_batch, process_text, SidecarTextRecognizer},
    stats::{get_leaderboard, BATTING_AVG_QUALIFIER},
    storage::*,
    Category, PlayerGameLine, StatsError,
};
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

const OPENER: &str = "\
Spring League Box Score
Tigers vs Eagles
5/15/2024
Final 5 - 3
Tigers Batting
Alex Smith 4 2 1 2
Jordan Lee 3 1 1 0
Eagles
Batting
Casey Jones 4 2 1 1
Riley Wong 3 0 0 0
";

const REMATCH: &str = "\
Eagles at Tigers
5/22/2024
6 - 1
Eagles Batting
Casey Jones 4 1 1 3
Tigers Batting
Alex Smith 4 3 2 1
";

fn fallback() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

#[test]
fn test_two_games_roll_up_into_rbi_leaders() {
    let db = StatsDatabase::open_in_memory().unwrap();
    process_text(&db, OPENER, fallback()).unwrap();
    process_text(&db, REMATCH, fallback()).unwrap();

    let board = get_leaderboard(&db, &Category::Rbi, 10).unwrap();
    let top: Vec<(&str, &str, &str)> = board
        .iter()
        .take(2)
        .map(|e| (e.name.as_str(), e.team.as_str(), e.value.as_str()))
        .collect();
    assert_eq!(top, vec![("Casey Jones", "Eagles", "4"), ("Alex Smith", "Tigers", "3")]);

    let games = db.list_recent_games(5).unwrap();
    assert_eq!(games[0].summary(), "Eagles 6 @ Tigers 1");
    assert_eq!(games[1].summary(), "Tigers 5 @ Eagles 3");
}

#[test]
fn test_batting_average_qualifier() {
    let db = StatsDatabase::open_in_memory().unwrap();
    let mut game = little_league_stats::GameRecord::unknown(fallback());
    game.away_team = "Tigers".into();
    game.home_team = "Eagles".into();
    let game_id = db.append_game(&game).unwrap();
    db.append_player_lines(
        &[
            PlayerGameLine::new("Regular Starter", "Tigers", 40, 20, 5, 5),
            PlayerGameLine::new("Late Callup", "Eagles", 5, 5, 1, 1),
        ],
        game_id,
    )
    .unwrap();

    let board = get_leaderboard(&db, &Category::BattingAvg, 10).unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "Regular Starter");
    assert_eq!(board[0].value, "0.500");
    assert!(5 < BATTING_AVG_QUALIFIER);
}

#[test]
fn test_batch_continues_past_failures_and_records_ingestion() {
    let dir = tempdir().unwrap();
    let opener = dir.path().join("opener.png");
    let blurry = dir.path().join("blurry.jpg");
    fs::write(&opener, b"png").unwrap();
    fs::write(dir.path().join("opener.txt"), OPENER).unwrap();
    fs::write(&blurry, b"jpg").unwrap();

    let db = StatsDatabase::open_in_memory().unwrap();
    let outcomes = process_batch(&db, &SidecarTextRecognizer, &[blurry.clone(), opener.clone()], fallback());

    assert_eq!(outcomes.len(), 2);
    assert!(!outcomes[0].success);
    assert!(outcomes[0].message.starts_with("Error: "));
    assert!(outcomes[1].success);
    assert_eq!(outcomes[1].message, "Successfully processed: Tigers 5 @ Eagles 3");

    assert!(db.is_ingested(&little_league_stats::ingest::source_key(&opener)).unwrap());
    assert!(!db.is_ingested(&little_league_stats::ingest::source_key(&blurry)).unwrap());
}

#[test]
fn test_resolve_db_path_prefers_flag() {
    let path = resolve_db_path(Some("/tmp/explicit.db".into())).unwrap();
    assert_eq!(path, std::path::PathBuf::from("/tmp/explicit.db"));
}

#[test]
fn test_validate_limit_rejects_zero() {
    match validate_limit(0) {
        Err(StatsError::InvalidLimit) => {}
        other => panic!("Expected InvalidLimit, got {:?}", other.map(|_| ())),
    }
}
