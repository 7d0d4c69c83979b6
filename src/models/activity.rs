// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged activity record.

use super::{lenient, Record, RecordId};
use serde::Deserialize;

/// Activity as listed by `/api/activities/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<RecordId>,
    /// Owner reference (identifier or name)
    #[serde(deserialize_with = "lenient::text")]
    pub user: String,
    /// Denormalized owner name
    #[serde(deserialize_with = "lenient::optional_text")]
    pub user_name: Option<String>,
    /// running, cycling, swimming, ...
    #[serde(deserialize_with = "lenient::text")]
    pub activity_type: String,
    /// Duration in minutes
    #[serde(deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
}

impl Record for Activity {
    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}
