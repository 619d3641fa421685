//! Parse a single OCR text file and show what the parser found.

use crate::{
    models::GameRecord,
    parser::{parse_box_score, ParsedBoxScore},
    storage::GameStore,
    Result,
};
use chrono::Local;
use std::path::PathBuf;

use super::open_store;

#[derive(Debug)]
pub struct ParseParams {
    pub file: PathBuf,
    pub save: bool,
    pub as_json: bool,
    pub db: Option<PathBuf>,
}

pub fn handle_parse(params: ParseParams) -> Result<()> {
    let text = std::fs::read_to_string(&params.file)?;
    let mut parsed = parse_box_score(&text, Local::now().date_naive());

    if params.save {
        let store = open_store(params.db)?;
        let (game_id, line_ids) = store.append_game_with_lines(&parsed.game, &parsed.players)?;
        for (line, id) in parsed.players.iter_mut().zip(line_ids) {
            line.id = Some(id);
            line.game_id = Some(game_id);
        }
        parsed.game = parsed.game.with_id(game_id);
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print!("{}", render_parsed(&parsed));
        if let Some(id) = parsed.game.id {
            println!("✓ Saved as game {}", id);
        }
    }
    Ok(())
}

fn game_header(game: &GameRecord) -> String {
    format!("{}  {}  ({})\n", game.date, game.summary(), game.venue)
}

/// Text rendering of a parse result: the game line, then one line per batter.
pub fn render_parsed(parsed: &ParsedBoxScore) -> String {
    let mut out = game_header(&parsed.game);
    if parsed.players.is_empty() {
        out.push_str("No batting lines found\n");
        return out;
    }

    out.push_str(&format!(
        "{:<24} {:<16} {:>3} {:>3} {:>3} {:>3} {:>6}\n",
        "Player", "Team", "AB", "H", "R", "RBI", "AVG"
    ));
    for line in &parsed.players {
        out.push_str(&format!(
            "{:<24} {:<16} {:>3} {:>3} {:>3} {:>3} {:>6.3}\n",
            line.name, line.team, line.at_bats, line.hits, line.runs, line.rbi, line.batting_avg
        ));
    }
    out
}
