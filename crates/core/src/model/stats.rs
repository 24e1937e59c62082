use serde::{Deserialize, Serialize};

/// Aggregate performance for a single musical key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStats {
    pub key: String,
    pub total_games: u32,
    pub average_accuracy: f64,
    pub best_score: u32,
    pub recent_accuracy: f64,
}

impl KeyStats {
    /// Zero-valued stats for a key with no recorded sessions.
    #[must_use]
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            total_games: 0,
            average_accuracy: 0.0,
            best_score: 0,
            recent_accuracy: 0.0,
        }
    }
}

/// Aggregate performance across every recorded session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_games: u32,
    pub overall_accuracy: f64,
    pub favorite_key: Option<String>,
    /// Sorted by `total_games` descending; ties keep first-seen order.
    pub key_stats: Vec<KeyStats>,
}

/// Best score recorded for a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub key: String,
    pub score: u32,
}
