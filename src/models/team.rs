//! Team record.

use super::{display_scalar, lenient, Record, RecordId};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Team as listed by `/api/teams/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Member identifiers or names, already joined for display
    #[serde(deserialize_with = "members")]
    pub members: String,
}

impl Record for Team {
    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

/// Lists join with ", "; anything else shows as-is.
fn members<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .map(display_scalar)
            .collect::<Vec<_>>()
            .join(", "),
        other => display_scalar(&other),
    })
}
