//! Basic database query operations

use super::{schema::StatsDatabase, GameStore};
use crate::{
    cli::types::{GameId, LineId},
    models::{GameRecord, PlayerGameLine},
};
use anyhow::Result;
use rusqlite::{params, Connection, Row};
use std::time::{SystemTime, UNIX_EPOCH};

const GAME_COLUMNS: &str =
    "id, date, away_team, home_team, away_score, home_score, venue, processed";

const LINE_COLUMNS: &str = "id, game_id, name, team, at_bats, hits, runs, rbi,
     doubles, triples, home_runs, stolen_bases, batting_avg";

fn now_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

fn insert_game(conn: &Connection, game: &GameRecord) -> Result<GameId> {
    conn.execute(
        "INSERT INTO games
         (date, away_team, home_team, away_score, home_score, venue, processed, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            game.date,
            game.away_team,
            game.home_team,
            game.away_score,
            game.home_score,
            game.venue,
            game.processed,
            now_secs()?
        ],
    )?;
    Ok(GameId::new(conn.last_insert_rowid()))
}

fn insert_lines(conn: &Connection, lines: &[PlayerGameLine], game_id: GameId) -> Result<Vec<LineId>> {
    let mut stmt = conn.prepare(
        "INSERT INTO player_game_lines
         (game_id, name, team, at_bats, hits, runs, rbi,
          doubles, triples, home_runs, stolen_bases, batting_avg)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )?;

    let mut ids = Vec::with_capacity(lines.len());
    for line in lines {
        stmt.execute(params![
            game_id.as_i64(),
            line.name,
            line.team,
            line.at_bats,
            line.hits,
            line.runs,
            line.rbi,
            line.doubles,
            line.triples,
            line.home_runs,
            line.stolen_bases,
            line.batting_avg
        ])?;
        ids.push(LineId::new(conn.last_insert_rowid()));
    }
    Ok(ids)
}

impl GameStore for StatsDatabase {
    fn append_game(&self, game: &GameRecord) -> Result<GameId> {
        let id = insert_game(&self.conn, game)?;
        log::info!("Game saved with ID: {}", id);
        Ok(id)
    }

    fn append_player_lines(&self, lines: &[PlayerGameLine], game_id: GameId) -> Result<Vec<LineId>> {
        // All lines of a game land together or not at all
        let tx = self.conn.unchecked_transaction()?;
        let ids = insert_lines(&tx, lines, game_id)?;
        tx.commit()?;
        log::info!("Saved {} player statistics for game {}", ids.len(), game_id);
        Ok(ids)
    }

    fn append_game_with_lines(
        &self,
        game: &GameRecord,
        lines: &[PlayerGameLine],
    ) -> Result<(GameId, Vec<LineId>)> {
        // Dropping the transaction on error rolls the game back too
        let tx = self.conn.unchecked_transaction()?;
        let game_id = insert_game(&tx, game)?;
        let line_ids = insert_lines(&tx, lines, game_id)?;
        tx.commit()?;
        log::info!(
            "Game saved with ID: {} ({} player statistics)",
            game_id,
            line_ids.len()
        );
        Ok((game_id, line_ids))
    }

    fn remove_game(&self, game_id: GameId) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "DELETE FROM ingested_files WHERE game_id = ?",
            params![game_id.as_i64()],
        )?;
        tx.execute(
            "DELETE FROM player_game_lines WHERE game_id = ?",
            params![game_id.as_i64()],
        )?;
        tx.execute("DELETE FROM games WHERE id = ?", params![game_id.as_i64()])?;
        tx.commit()?;
        Ok(())
    }

    fn list_recent_games(&self, limit: usize) -> Result<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM games ORDER BY date DESC, id DESC LIMIT ?",
            GAME_COLUMNS
        ))?;

        let rows = stmt.query_map(params![limit_param(limit)], row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    fn list_all_player_lines(&self) -> Result<Vec<PlayerGameLine>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM player_game_lines ORDER BY id",
            LINE_COLUMNS
        ))?;

        let rows = stmt.query_map([], row_to_player_line)?;

        let mut lines = Vec::new();
        for row in rows {
            lines.push(row?);
        }
        Ok(lines)
    }

    fn is_ingested(&self, source: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM ingested_files WHERE source = ?",
            params![source],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn mark_ingested(&self, source: &str, game_id: GameId) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO ingested_files (source, game_id, ingested_at)
             VALUES (?, ?, ?)",
            params![source, game_id.as_i64(), now_secs()?],
        )?;
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        // Children first due to foreign keys
        self.conn.execute("DELETE FROM ingested_files", [])?;
        self.conn.execute("DELETE FROM player_game_lines", [])?;
        self.conn.execute("DELETE FROM games", [])?;
        Ok(())
    }
}

/// Helper to convert database row to GameRecord
fn row_to_game(row: &Row) -> rusqlite::Result<GameRecord> {
    Ok(GameRecord {
        id: Some(GameId::new(row.get(0)?)),
        date: row.get(1)?,
        away_team: row.get(2)?,
        home_team: row.get(3)?,
        away_score: row.get(4)?,
        home_score: row.get(5)?,
        venue: row.get(6)?,
        processed: row.get(7)?,
    })
}

/// Helper to convert database row to PlayerGameLine
fn row_to_player_line(row: &Row) -> rusqlite::Result<PlayerGameLine> {
    Ok(PlayerGameLine {
        id: Some(LineId::new(row.get(0)?)),
        game_id: Some(GameId::new(row.get(1)?)),
        name: row.get(2)?,
        team: row.get(3)?,
        at_bats: row.get(4)?,
        hits: row.get(5)?,
        runs: row.get(6)?,
        rbi: row.get(7)?,
        doubles: row.get(8)?,
        triples: row.get(9)?,
        home_runs: row.get(10)?,
        stolen_bases: row.get(11)?,
        batting_avg: row.get(12)?,
    })
}
