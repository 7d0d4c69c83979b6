//! User record and fitness levels.

use super::{lenient, Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User profile as listed by `/api/users/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    /// Shown verbatim; only the edit form restricts it to [`FitnessLevel`]
    #[serde(deserialize_with = "lenient::text")]
    pub fitness_level: String,
    /// Emoji or initials
    #[serde(deserialize_with = "lenient::text")]
    pub avatar: String,
    /// Team reference by identifier
    #[serde(deserialize_with = "lenient::id")]
    pub team: Option<RecordId>,
    /// Denormalized team name
    #[serde(deserialize_with = "lenient::optional_text")]
    pub team_name: Option<String>,
}

impl Record for User {
    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

/// Fitness levels selectable in the edit form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    /// Capitalized label for the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FitnessLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown fitness level: {}", s))
    }
}
