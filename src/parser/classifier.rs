//! Per-line pattern classification

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Standalone `vs` / `vs.` / `at` between two team names.
static TEAM_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)(?:vs\.?|at)(?:\s|$)").expect("valid regex"));

static SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("valid regex"));

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})").expect("valid regex"));

/// Name, then AB H R RBI in that fixed order. Anything after the fourth
/// number (extra columns) is ignored.
static STAT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z\s.'-]+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)").expect("valid regex")
});

const SECTION_HEADER_MARKER: &str = "batting";

/// Semantic kinds a line can be recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Teams,
    Score,
    Date,
    SectionHeader,
    StatLine,
    Unrecognized,
}

/// Batting columns captured from a player stat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub name: String,
    pub at_bats: u32,
    pub hits: u32,
    pub runs: u32,
    pub rbi: u32,
}

/// Everything a single line matched. Classification is additive, so a
/// line can carry several captures at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineClass {
    /// Candidate `(away, home)` team names.
    pub teams: Option<(String, String)>,
    /// `(first, second)` numbers of a `N - M` score.
    pub score: Option<(u32, u32)>,
    pub date: Option<NaiveDate>,
    pub section_header: bool,
    pub stat_line: Option<StatLine>,
}

impl LineClass {
    /// Kinds this line matched, in a fixed order.
    pub fn kinds(&self) -> Vec<LineKind> {
        let mut kinds = Vec::new();
        if self.teams.is_some() {
            kinds.push(LineKind::Teams);
        }
        if self.score.is_some() {
            kinds.push(LineKind::Score);
        }
        if self.date.is_some() {
            kinds.push(LineKind::Date);
        }
        if self.section_header {
            kinds.push(LineKind::SectionHeader);
        }
        if self.stat_line.is_some() {
            kinds.push(LineKind::StatLine);
        }
        if kinds.is_empty() {
            kinds.push(LineKind::Unrecognized);
        }
        kinds
    }

    pub fn is_unrecognized(&self) -> bool {
        self.kinds() == [LineKind::Unrecognized]
    }
}

/// Classifies one already-trimmed line of box score text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, line: &str) -> LineClass {
        LineClass {
            teams: match_teams(line),
            score: match_score(line),
            date: match_date(line),
            section_header: line.to_lowercase().contains(SECTION_HEADER_MARKER),
            stat_line: match_stat_line(line),
        }
    }
}

/// Away team is the text before the first separator, home team the text
/// between the first and second. Both must be non-empty after trimming.
fn match_teams(line: &str) -> Option<(String, String)> {
    let mut parts = TEAM_SEPARATOR.split(line);
    let away = parts.next()?.trim();
    let home = parts.next()?.trim();

    if away.is_empty() || home.is_empty() {
        return None;
    }
    Some((away.to_string(), home.to_string()))
}

fn match_score(line: &str) -> Option<(u32, u32)> {
    let caps = SCORE.captures(line)?;
    let first = caps[1].parse().ok()?;
    let second = caps[2].parse().ok()?;
    Some((first, second))
}

/// Two-digit years land in 2000-2099. Dates that do not exist on the
/// calendar are treated as no match.
fn match_date(line: &str) -> Option<NaiveDate> {
    let caps = DATE.captures(line)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn match_stat_line(line: &str) -> Option<StatLine> {
    let caps = STAT_LINE.captures(line)?;
    let name = caps[1].trim();
    if name.is_empty() {
        return None;
    }
    Some(StatLine {
        name: name.to_string(),
        at_bats: caps[2].parse().ok()?,
        hits: caps[3].parse().ok()?,
        runs: caps[4].parse().ok()?,
        rbi: caps[5].parse().ok()?,
    })
}
