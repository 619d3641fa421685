//! Leaderboard categories.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Statistic a leaderboard can be ranked by.
///
/// The set is closed: anything that does not name one of the known
/// statistics parses into [`Category::Unrecognized`] and is ranked by batting
/// average, mirroring how the box score tracker has always treated stray
/// category tags.
///
/// # Examples
///
/// ```rust
/// use little_league_stats::Category;
///
/// assert_eq!("batting_avg".parse::<Category>().unwrap(), Category::BattingAvg);
/// assert_eq!("homeRuns".parse::<Category>().unwrap(), Category::HomeRuns);
/// assert_eq!(Category::Rbi.to_string(), "rbi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    BattingAvg,
    HomeRuns,
    Rbi,
    Runs,
    StolenBases,
    /// Pitching is not modeled; the board is ordered by batting average and
    /// every value is the `0.00` placeholder.
    Era,
    Unrecognized(String),
}

impl Category {
    /// All categories with a dedicated ordering, in display order.
    pub const RANKED: [Category; 5] = [
        Category::BattingAvg,
        Category::HomeRuns,
        Category::Rbi,
        Category::Runs,
        Category::StolenBases,
    ];

    /// Human-readable column heading.
    pub fn label(&self) -> &str {
        match self {
            Category::BattingAvg => "Batting Average",
            Category::HomeRuns => "Home Runs",
            Category::Rbi => "RBIs",
            Category::Runs => "Runs Scored",
            Category::StolenBases => "Stolen Bases",
            Category::Era => "ERA",
            Category::Unrecognized(tag) => tag,
        }
    }

    /// Whether this category has its own sort key. Everything else falls
    /// back to batting average.
    pub fn is_ranked(&self) -> bool {
        Self::RANKED.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::BattingAvg => "battingAvg",
            Category::HomeRuns => "homeRuns",
            Category::Rbi => "rbi",
            Category::Runs => "runs",
            Category::StolenBases => "stolenBases",
            Category::Era => "era",
            Category::Unrecognized(tag) => tag.as_str(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        Ok(match normalized.as_str() {
            "battingavg" | "battingaverage" | "avg" | "ba" => Category::BattingAvg,
            "homeruns" | "hr" => Category::HomeRuns,
            "rbi" | "rbis" => Category::Rbi,
            "runs" | "r" => Category::Runs,
            "stolenbases" | "sb" => Category::StolenBases,
            "era" => Category::Era,
            _ => Category::Unrecognized(s.trim().to_string()),
        })
    }
}
