//! Suggested workout record.

use super::{lenient, Record, RecordId};
use serde::Deserialize;

/// Workout as listed by `/api/workouts/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Workout {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
}

impl Record for Workout {
    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}
