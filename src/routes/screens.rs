// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only screens: home, activities, teams, workouts, leaderboard.

use crate::error::{AppError, Result};
use crate::services::collection::load_collection_within;
use crate::services::{Collection, LoadStatus};
use crate::views::layout::{self, Nav};
use crate::views::screens::list_page;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/activities", get(activities))
        .route("/teams", get(teams))
        .route("/workouts", get(workouts))
        .route("/leaderboard", get(leaderboard))
}

async fn home() -> Html<String> {
    Html(layout::home())
}

async fn activities(State(state): State<Arc<AppState>>) -> Result<(StatusCode, Html<String>)> {
    list_screen(&state, Nav::Activities, Collection::Activities).await
}

async fn teams(State(state): State<Arc<AppState>>) -> Result<(StatusCode, Html<String>)> {
    list_screen(&state, Nav::Teams, Collection::Teams).await
}

async fn workouts(State(state): State<Arc<AppState>>) -> Result<(StatusCode, Html<String>)> {
    list_screen(&state, Nav::Workouts, Collection::Workouts).await
}

async fn leaderboard(State(state): State<Arc<AppState>>) -> Result<(StatusCode, Html<String>)> {
    list_screen(&state, Nav::Leaderboard, Collection::Leaderboard).await
}

/// One visit to a list screen: load once, render whatever state it settled in.
///
/// A load still pending when the server shuts down is abandoned with 503.
async fn list_screen(
    state: &AppState,
    nav: Nav,
    collection: Collection,
) -> Result<(StatusCode, Html<String>)> {
    let status = load_collection_within(&state.backend, collection, &state.shutdown.token())
        .await
        .ok_or(AppError::Cancelled)?;

    Ok((status_code(&status), Html(list_page(nav, &status))))
}

/// Page status for a settled screen; a failed load is the backend's fault.
pub(crate) fn status_code(status: &LoadStatus) -> StatusCode {
    match status {
        LoadStatus::Error(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    }
}
