//! Demo season used by the `seed` command.

use super::GameStore;
use crate::models::{GameRecord, PlayerGameLine};
use anyhow::Result;
use chrono::NaiveDate;

fn sample_game(date: NaiveDate, away: &str, home: &str, away_score: u32, home_score: u32, venue: &str) -> GameRecord {
    let mut game = GameRecord::unknown(date);
    game.away_team = away.to_string();
    game.home_team = home.to_string();
    game.away_score = away_score;
    game.home_score = home_score;
    game.venue = venue.to_string();
    game
}

/// Load two sample games and their eight batting lines. Returns the number
/// of games stored.
pub fn seed_sample_data<S>(store: &S) -> Result<usize>
where
    S: GameStore + ?Sized,
{
    let may = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap_or_default();

    let season = [
        (
            sample_game(may(15), "Tigers", "Eagles", 5, 3, "Main Field"),
            vec![
                PlayerGameLine::new("Alex Smith", "Tigers", 4, 2, 1, 2).with_extras(1, 0, 0, 1),
                PlayerGameLine::new("Jordan Lee", "Tigers", 3, 1, 1, 0).with_extras(0, 0, 0, 2),
                PlayerGameLine::new("Casey Jones", "Eagles", 4, 2, 1, 1).with_extras(1, 0, 0, 0),
                PlayerGameLine::new("Riley Wong", "Eagles", 3, 0, 0, 0),
            ],
        ),
        (
            sample_game(may(16), "Sharks", "Hawks", 2, 7, "East Field"),
            vec![
                PlayerGameLine::new("Taylor Reed", "Sharks", 4, 1, 1, 1).with_extras(0, 0, 1, 0),
                PlayerGameLine::new("Morgan Chen", "Sharks", 3, 0, 0, 0),
                PlayerGameLine::new("Jamie Garcia", "Hawks", 4, 3, 2, 3).with_extras(1, 0, 1, 0),
                PlayerGameLine::new("Dakota Kim", "Hawks", 3, 2, 1, 1).with_extras(0, 1, 0, 1),
            ],
        ),
    ];

    for (game, lines) in &season {
        store.append_game_with_lines(game, lines)?;
    }

    log::info!("Loaded {} sample games", season.len());
    Ok(season.len())
}
