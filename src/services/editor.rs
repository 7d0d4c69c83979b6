// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User edit workflow.
//!
//! Handles:
//! - Copying a listed user into an editable draft
//! - Validating the draft and building the PATCH payload
//! - Keeping at most one save in flight per user
//!
//! A successful save is never merged locally; the caller reloads the list
//! and shows whatever the backend now reports.

use crate::models::{FitnessLevel, Record, User};
use crate::services::backend::BackendClient;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use validator::{Validate, ValidationErrors};

/// Maximum avatar length accepted by the backend.
pub const AVATAR_MAX_CHARS: u64 = 10;

/// In-progress, uncommitted copy of a user record.
///
/// Also the shape of the edit form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EditDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    pub fitness_level: FitnessLevel,
    #[validate(length(max = 10, message = "Avatar must be at most 10 characters"))]
    #[serde(default)]
    pub avatar: String,
    /// Selected team identifier; empty means no team
    #[serde(default)]
    pub team: String,
}

impl EditDraft {
    /// Copy the editable fields of a listed user.
    pub fn open(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            fitness_level: user.fitness_level.parse().unwrap_or_default(),
            avatar: user.avatar.clone(),
            team: user
                .team
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    pub fn has_team(&self) -> bool {
        !self.team.is_empty()
    }

    /// Build the PATCH body: exactly the five editable fields.
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            name: self.name.clone(),
            email: self.email.clone(),
            fitness_level: self.fitness_level,
            avatar: self.avatar.clone(),
            team: parse_team_selection(&self.team),
        }
    }

    /// Human-readable validation problems, empty when the draft can be sent.
    pub fn problems(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation_messages(&errors),
        }
    }
}

/// Body of `PATCH /api/users/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: String,
    pub email: String,
    pub fitness_level: FitnessLevel,
    pub avatar: String,
    /// `null` clears the team
    pub team: Option<i64>,
}

/// Read the leading integer of a team selection, as a browser's `parseInt` would.
///
/// No leading integer (including "no team") means `None`.
pub fn parse_team_selection(selection: &str) -> Option<i64> {
    let trimmed = selection.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    trimmed[..end].parse().ok()
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("Invalid {}", field))
            })
        })
        .collect();
    messages.sort();
    messages
}

/// One open edit modal.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// Identifier of the user being edited
    pub user_id: String,
    /// Name shown in the modal title
    pub title: String,
    pub draft: EditDraft,
    /// A save is in flight; the submit control is disabled
    pub saving: bool,
    /// Inline error shown above the form
    pub error: Option<String>,
}

impl EditSession {
    /// Open the modal for a listed user. Users without an identifier cannot be edited.
    pub fn open(user: &User) -> Option<Self> {
        let user_id = user.id()?.to_string();
        Some(Self {
            user_id,
            title: user.name.clone(),
            draft: EditDraft::open(user),
            saving: false,
            error: None,
        })
    }

    /// Re-open the modal around a submitted draft.
    pub fn resume(user_id: impl Into<String>, draft: EditDraft) -> Self {
        Self {
            user_id: user_id.into(),
            title: draft.name.clone(),
            draft,
            saving: false,
            error: None,
        }
    }

    /// Mark the save as started and hand out the payload. `None` if one is already in flight.
    pub fn begin_save(&mut self) -> Option<UserPatch> {
        if self.saving {
            return None;
        }
        self.saving = true;
        self.error = None;
        Some(self.draft.to_patch())
    }

    /// Save failed: keep the modal open and re-enable the submit control.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }
}

/// Per-user locks keeping a single save in flight.
///
/// An entry only exists while some save for that user holds or contends for it.
#[derive(Clone, Default)]
pub struct SaveLocks {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl SaveLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the save slot for a user, or `None` while another save holds it.
    pub fn try_acquire(&self, user_id: &str) -> Option<SaveGuard> {
        let lock = self
            .locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let guard = lock.try_lock_owned().ok()?;
        Some(SaveGuard {
            user_id: user_id.to_string(),
            locks: self.locks.clone(),
            guard: Some(guard),
        })
    }

    /// Number of users with a save slot currently allocated.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Held save slot. Dropping it frees the slot and forgets the user's lock
/// once nobody else refers to it.
pub struct SaveGuard {
    user_id: String,
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        // Release the mutex first so its Arc no longer counts as a holder.
        self.guard.take();
        self.locks.remove_if(&self.user_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

/// Result of submitting an edit.
#[derive(Debug)]
pub enum SaveOutcome {
    /// Backend accepted the update; the modal closes
    Saved(Value),
    /// Draft failed validation and was not sent
    Invalid(EditSession),
    /// Backend refused or could not be reached
    Failed(EditSession),
    /// Another save for this user is still in flight; nothing was sent
    Busy(EditSession),
}

/// Submit a draft.
pub async fn save(
    client: &BackendClient,
    locks: &SaveLocks,
    mut session: EditSession,
) -> SaveOutcome {
    let problems = session.draft.problems();
    if !problems.is_empty() {
        tracing::debug!(user_id = %session.user_id, ?problems, "Edit rejected by validation");
        session.fail(problems.join(" "));
        return SaveOutcome::Invalid(session);
    }

    let Some(_guard) = locks.try_acquire(&session.user_id) else {
        tracing::info!(user_id = %session.user_id, "Save already in flight, ignoring submit");
        session.saving = true;
        return SaveOutcome::Busy(session);
    };

    let Some(patch) = session.begin_save() else {
        return SaveOutcome::Busy(session);
    };

    match client.patch_user(&session.user_id, &patch).await {
        Ok(updated) => {
            tracing::info!(user_id = %session.user_id, "User saved");
            SaveOutcome::Saved(updated)
        }
        Err(err) => {
            tracing::warn!(user_id = %session.user_id, error = %err, "Save failed");
            session.fail(err.to_string());
            SaveOutcome::Failed(session)
        }
    }
}
