pub mod client;
pub mod wire;

use std::fmt;

/// Placeholder shown in the score column when a record carries no value.
pub const MISSING_SCORE: &str = "N/A";

/// Match listing document.
pub const MATCHES_PATH: &str = "/matches.json";

/// Leaderboard used when no match is selected.
pub const DEFAULT_LEADERBOARD_PATH: &str = "/leaderboard-v2.json";

// ---------------------------------------------------------------------------
// Domain types: what the views render, independent of the JSON layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    pub match_id: String,
    pub teams: String, // "India vs Australia"
}

#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    Number(f64),
    Label(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers come from integer ratings; show them without ".0".
            Score::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{n:.0}")
            }
            Score::Number(n) => write!(f, "{n}"),
            Score::Label(s) => f.write_str(s),
        }
    }
}

/// Which score field a leaderboard document carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreColumn {
    #[default]
    Rating,
    PredictionScale,
}

impl ScoreColumn {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreColumn::Rating => "Rating",
            ScoreColumn::PredictionScale => "Prediction Scale",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRanking {
    pub player: String,
    pub team: String,
    pub zodiac: String,
    pub dob: String,
    pub score: Option<Score>,
}

impl PlayerRanking {
    /// Text for the score cell: the value, or [`MISSING_SCORE`] when absent.
    pub fn score_label(&self) -> String {
        self.score
            .as_ref()
            .map_or_else(|| MISSING_SCORE.to_string(), ToString::to_string)
    }
}

/// Which leaderboard document to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum LeaderboardSource {
    #[default]
    Default,
    Match(String),
}

impl LeaderboardSource {
    /// Resource path relative to the data root, e.g. `/leaderboard-m1.json`.
    pub fn path(&self) -> String {
        match self {
            LeaderboardSource::Default => DEFAULT_LEADERBOARD_PATH.to_string(),
            LeaderboardSource::Match(id) => format!("/leaderboard-{id}.json"),
        }
    }

    pub fn score_column(&self) -> ScoreColumn {
        match self {
            LeaderboardSource::Default => ScoreColumn::Rating,
            LeaderboardSource::Match(_) => ScoreColumn::PredictionScale,
        }
    }

    pub fn match_id(&self) -> Option<&str> {
        match self {
            LeaderboardSource::Default => None,
            LeaderboardSource::Match(id) => Some(id.as_str()),
        }
    }
}

impl fmt::Display for LeaderboardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardSource::Default => f.write_str("default leaderboard"),
            LeaderboardSource::Match(id) => write!(f, "match {id}"),
        }
    }
}
