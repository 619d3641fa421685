//! Process-local store

use super::GameStore;
use crate::{
    cli::types::{GameId, LineId},
    models::{GameRecord, PlayerGameLine},
};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Tables {
    next_game_id: i64,
    next_line_id: i64,
    games: Vec<GameRecord>,
    lines: Vec<PlayerGameLine>,
    ingested: HashMap<String, GameId>,
}

/// In-memory [`GameStore`].
///
/// All state sits behind one mutex, so id allocation and the append that
/// uses it happen atomically and concurrent writers never share an id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl Tables {
    fn push_game(&mut self, game: &GameRecord) -> GameId {
        self.next_game_id += 1;
        let id = GameId::new(self.next_game_id);
        self.games.push(game.clone().with_id(id));
        id
    }

    fn push_lines(&mut self, lines: &[PlayerGameLine], game_id: GameId) -> Result<Vec<LineId>> {
        if !self.games.iter().any(|g| g.id == Some(game_id)) {
            return Err(anyhow!("game {} does not exist", game_id));
        }

        let mut ids = Vec::with_capacity(lines.len());
        for line in lines {
            self.next_line_id += 1;
            let id = LineId::new(self.next_line_id);
            let mut stored = line.clone();
            stored.id = Some(id);
            stored.game_id = Some(game_id);
            self.lines.push(stored);
            ids.push(id);
        }
        Ok(ids)
    }
}

impl GameStore for MemoryStore {
    fn append_game(&self, game: &GameRecord) -> Result<GameId> {
        Ok(self.lock()?.push_game(game))
    }

    fn append_player_lines(&self, lines: &[PlayerGameLine], game_id: GameId) -> Result<Vec<LineId>> {
        self.lock()?.push_lines(lines, game_id)
    }

    fn append_game_with_lines(
        &self,
        game: &GameRecord,
        lines: &[PlayerGameLine],
    ) -> Result<(GameId, Vec<LineId>)> {
        let mut tables = self.lock()?;
        let game_id = tables.push_game(game);
        let line_ids = tables.push_lines(lines, game_id)?;
        Ok((game_id, line_ids))
    }

    fn remove_game(&self, game_id: GameId) -> Result<()> {
        let mut tables = self.lock()?;
        tables.games.retain(|g| g.id != Some(game_id));
        tables.lines.retain(|l| l.game_id != Some(game_id));
        tables.ingested.retain(|_, id| *id != game_id);
        Ok(())
    }

    fn list_recent_games(&self, limit: usize) -> Result<Vec<GameRecord>> {
        let tables = self.lock()?;
        let mut games = tables.games.clone();
        games.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        games.truncate(limit);
        Ok(games)
    }

    fn list_all_player_lines(&self) -> Result<Vec<PlayerGameLine>> {
        Ok(self.lock()?.lines.clone())
    }

    fn is_ingested(&self, source: &str) -> Result<bool> {
        Ok(self.lock()?.ingested.contains_key(source))
    }

    fn mark_ingested(&self, source: &str, game_id: GameId) -> Result<()> {
        self.lock()?.ingested.insert(source.to_string(), game_id);
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        let mut tables = self.lock()?;
        tables.games.clear();
        tables.lines.clear();
        tables.ingested.clear();
        Ok(())
    }
}
