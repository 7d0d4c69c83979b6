//! Leaderboard entry.

use super::{lenient, Record, RecordId};
use serde::Deserialize;

/// Ranked entry as listed by `/api/leaderboard/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::text")]
    pub user: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub team_name: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub rank: String,
}

impl Record for LeaderboardEntry {
    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

impl LeaderboardEntry {
    /// Who to show: the denormalized name, else the raw reference.
    pub fn display_user(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.user)
    }

    /// Score with one decimal place, empty when missing.
    pub fn display_score(&self) -> String {
        self.score.map(|s| format!("{:.1}", s)).unwrap_or_default()
    }
}
