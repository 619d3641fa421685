//! Read-only views: leaderboards, recent games, season totals.

use crate::{
    cli::types::Category,
    error::StatsError,
    models::{GameRecord, LeaderboardEntry, PlayerTotalsRow},
    stats::{aggregate_season, get_leaderboard},
    storage::GameStore,
    Result,
};
use std::path::PathBuf;

use super::{open_store, validate_limit};

pub fn handle_leaders(
    category: Category,
    limit: usize,
    as_json: bool,
    db: Option<PathBuf>,
) -> Result<()> {
    let limit = validate_limit(limit)?;
    let store = open_store(db)?;
    let board = get_leaderboard(&store, &category, limit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{}", render_leaderboard(&category, &board));
    }
    Ok(())
}

pub fn handle_games(limit: usize, as_json: bool, db: Option<PathBuf>) -> Result<()> {
    let limit = validate_limit(limit)?;
    let store = open_store(db)?;
    let games = store.list_recent_games(limit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&games)?);
    } else {
        print!("{}", render_games(&games));
    }
    Ok(())
}

pub fn handle_totals(as_json: bool, db: Option<PathBuf>) -> Result<()> {
    let store = open_store(db)?;
    let totals = aggregate_season(&store.list_all_player_lines()?);
    let rows: Vec<PlayerTotalsRow> = totals.values().map(PlayerTotalsRow::from).collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_totals(&rows));
    }
    Ok(())
}

pub fn render_leaderboard(category: &Category, board: &[LeaderboardEntry]) -> String {
    if board.is_empty() {
        return format!("{}\n", StatsError::NoData);
    }

    let mut out = format!("{} Leaders\n", category.label());
    out.push_str(&format!(
        "{:>4}  {:<24} {:<16} {:>7}\n",
        "Rank", "Player", "Team", "Value"
    ));
    for entry in board {
        out.push_str(&format!(
            "{:>4}  {:<24} {:<16} {:>7}\n",
            entry.rank, entry.name, entry.team, entry.value
        ));
    }
    out
}

pub fn render_games(games: &[GameRecord]) -> String {
    if games.is_empty() {
        return format!("{}\n", StatsError::NoData);
    }

    let mut out = format!(
        "{:<10}  {:<34} {:>7}  {}\n",
        "Date", "Teams", "Score", "Status"
    );
    for game in games {
        let teams = format!("{} @ {}", game.away_team, game.home_team);
        let score = format!("{} - {}", game.away_score, game.home_score);
        let status = if game.processed { "Processed" } else { "Pending" };
        out.push_str(&format!(
            "{:<10}  {:<34} {:>7}  {}\n",
            game.date, teams, score, status
        ));
    }
    out
}

pub fn render_totals(rows: &[PlayerTotalsRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", StatsError::NoData);
    }

    let mut out = format!(
        "{:<24} {:<16} {:>3} {:>4} {:>4} {:>4} {:>4} {:>3} {:>3} {:>6} {:>6}\n",
        "Player", "Team", "G", "AB", "H", "R", "RBI", "HR", "SB", "AVG", "SLG"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<24} {:<16} {:>3} {:>4} {:>4} {:>4} {:>4} {:>3} {:>3} {:>6} {:>6}\n",
            row.name,
            row.team,
            row.games,
            row.at_bats,
            row.hits,
            row.runs,
            row.rbi,
            row.home_runs,
            row.stolen_bases,
            row.avg,
            row.slg
        ));
    }
    out
}
