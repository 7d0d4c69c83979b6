// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Users screen and the edit-and-save workflow.

use crate::error::{AppError, Result};
use crate::models::{Record, User};
use crate::routes::screens::status_code;
use crate::services::collection::load_users_screen_within;
use crate::services::editor::{self, EditDraft, EditSession, SaveOutcome};
use crate::services::UsersScreen;
use crate::views::users::users_page;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(users))
        .route("/users/{id}/edit", post(save_user))
}

#[derive(Deserialize)]
struct UsersQuery {
    /// Open the edit modal for this user
    edit: Option<String>,
}

/// Users screen, optionally with the edit modal open.
async fn users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UsersQuery>,
) -> Result<(StatusCode, Html<String>)> {
    let screen = load_screen(&state).await?;

    let session = match (query.edit.as_deref(), screen.users.records()) {
        (Some(user_id), Some(records)) => {
            let user = find_user(records, user_id)
                .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))?;
            tracing::debug!(user_id, "Opening edit modal");
            EditSession::open(&user)
        }
        _ => None,
    };

    Ok((
        status_code(&screen.users),
        Html(users_page(&screen, session.as_ref())),
    ))
}

/// Submit the edit form.
///
/// Success redirects to the Users screen, which reloads the list from the
/// backend. Anything else re-renders the screen with the modal still open.
async fn save_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Form(draft): Form<EditDraft>,
) -> Result<Response> {
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("Missing user id".to_string()));
    }

    let session = EditSession::resume(user_id, draft);
    let (status, mut session) =
        match editor::save(&state.backend, &state.save_locks, session).await {
            SaveOutcome::Saved(_) => return Ok(Redirect::to("/users").into_response()),
            SaveOutcome::Invalid(session) => (StatusCode::UNPROCESSABLE_ENTITY, session),
            SaveOutcome::Failed(session) => (StatusCode::BAD_GATEWAY, session),
            SaveOutcome::Busy(session) => (StatusCode::CONFLICT, session),
        };

    let screen = load_screen(&state).await?;
    if let Some(user) = screen
        .users
        .records()
        .and_then(|records| find_user(records, &session.user_id))
    {
        session.title = user.name;
    }

    // The save's own status wins over a failed reload; the modal stays open either way.
    Ok((status, Html(users_page(&screen, Some(&session)))).into_response())
}

async fn load_screen(state: &AppState) -> Result<UsersScreen> {
    load_users_screen_within(&state.backend, &state.shutdown.token())
        .await
        .ok_or(AppError::Cancelled)
}

fn find_user(records: &[Value], user_id: &str) -> Option<User> {
    records
        .iter()
        .map(User::from_value)
        .find(|user| user.id().is_some_and(|id| id.to_string() == user_id))
}
