//! Box score parser

use super::classifier::{LineClass, LineClassifier};
use crate::models::{GameRecord, PlayerGameLine};
use chrono::NaiveDate;
use serde::Serialize;

/// Result of parsing one box score: the game and its batting lines in the
/// order they appeared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedBoxScore {
    pub game: GameRecord,
    pub players: Vec<PlayerGameLine>,
}

/// Which team's batting list the scan is currently inside.
///
/// Moves only on section headers. A header that names neither team leaves
/// the cursor where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamCursor {
    #[default]
    NoTeam,
    AwayActive,
    HomeActive,
}

impl TeamCursor {
    /// Transition on a section header. The header line is checked together
    /// with the line right above it, away team first.
    pub fn on_header(self, header: &str, previous: Option<&str>, away: &str, home: &str) -> Self {
        let mentions = |team: &str| header.contains(team) || previous.is_some_and(|p| p.contains(team));

        if mentions(away) {
            TeamCursor::AwayActive
        } else if mentions(home) {
            TeamCursor::HomeActive
        } else {
            self
        }
    }

    /// Team credited with stat lines in this state.
    pub fn team<'a>(&self, away: &'a str, home: &'a str) -> Option<&'a str> {
        match self {
            TeamCursor::NoTeam => None,
            TeamCursor::AwayActive => Some(away),
            TeamCursor::HomeActive => Some(home),
        }
    }
}

/// Parses box score text into a [`ParsedBoxScore`].
///
/// `fallback_date` is used when no date line is found. It is an input rather
/// than a clock read so that parsing the same text twice gives identical
/// records.
#[derive(Debug, Clone)]
pub struct BoxScoreParser {
    classifier: LineClassifier,
    fallback_date: NaiveDate,
}

impl BoxScoreParser {
    pub fn new(fallback_date: NaiveDate) -> Self {
        Self {
            classifier: LineClassifier::new(),
            fallback_date,
        }
    }

    /// Parse one box score. Never fails.
    ///
    /// Team names, score and date are folded over the whole text first, last
    /// match winning, so batting sections are attributed against the final
    /// team names and every emitted line belongs to one of the game's teams.
    pub fn parse(&self, text: &str) -> ParsedBoxScore {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let classes: Vec<LineClass> = lines.iter().map(|l| self.classifier.classify(l)).collect();

        let game = self.fold_game(&classes);
        let players = self.collect_players(&lines, &classes, &game);

        log::debug!(
            "Parsed box score: {} ({} lines, {} batting lines)",
            game.summary(),
            lines.len(),
            players.len()
        );

        ParsedBoxScore { game, players }
    }

    fn fold_game(&self, classes: &[LineClass]) -> GameRecord {
        let mut game = GameRecord::unknown(self.fallback_date);

        for class in classes {
            if let Some((away, home)) = &class.teams {
                game.away_team = away.clone();
                game.home_team = home.clone();
            }
            if let Some((away_score, home_score)) = class.score {
                game.away_score = away_score;
                game.home_score = home_score;
            }
            if let Some(date) = class.date {
                game.date = date;
            }
        }

        game
    }

    fn collect_players(
        &self,
        lines: &[&str],
        classes: &[LineClass],
        game: &GameRecord,
    ) -> Vec<PlayerGameLine> {
        let mut cursor = TeamCursor::NoTeam;
        let mut players = Vec::new();

        for (i, class) in classes.iter().enumerate() {
            if class.section_header {
                let previous = i.checked_sub(1).map(|p| lines[p]);
                cursor = cursor.on_header(lines[i], previous, &game.away_team, &game.home_team);
                continue;
            }

            let Some(stat) = &class.stat_line else {
                continue;
            };

            match cursor.team(&game.away_team, &game.home_team) {
                Some(team) => players.push(PlayerGameLine::new(
                    stat.name.clone(),
                    team,
                    stat.at_bats,
                    stat.hits,
                    stat.runs,
                    stat.rbi,
                )),
                None => log::debug!("Dropping stat line before any team section: {}", lines[i]),
            }
        }

        players
    }
}

/// Parse one box score with a fresh [`BoxScoreParser`].
pub fn parse_box_score(text: &str, fallback_date: NaiveDate) -> ParsedBoxScore {
    BoxScoreParser::new(fallback_date).parse(text)
}
