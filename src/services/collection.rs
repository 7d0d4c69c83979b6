// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collection loading shared by every screen.
//!
//! One GET, one normalization, one terminal state. The backend may answer
//! with a bare list or with a paginated `{"results": [...]}` wrapper; any
//! other shape is treated as an empty collection rather than an error.

use crate::error::BackendError;
use crate::services::backend::{BackendClient, Collection};
use crate::services::lifetime::LifetimeToken;
use serde_json::Value;

/// Load state of one screen visit.
///
/// `Loading -> Ready | Error`; both outcomes are terminal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready(Vec<Value>),
    Error(String),
}

impl LoadStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadStatus::Loading)
    }

    pub fn records(&self) -> Option<&[Value]> {
        match self {
            LoadStatus::Ready(records) => Some(records),
            _ => None,
        }
    }

    /// Apply a load outcome. Ignored once the status is terminal.
    pub fn resolve(&mut self, outcome: Result<Vec<Value>, String>) -> bool {
        if self.is_terminal() {
            tracing::warn!("Ignoring load outcome for a settled screen");
            return false;
        }

        *self = match outcome {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Screen ready");
                LoadStatus::Ready(records)
            }
            Err(message) => {
                tracing::error!(error = %message, "Screen failed to load");
                LoadStatus::Error(message)
            }
        };
        true
    }
}

/// Turn a collection response body into its record list.
pub fn normalize_collection(body: Value) -> Vec<Value> {
    match body {
        Value::Array(records) => records,
        Value::Object(mut fields) => match fields.remove("results") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Message shown for a failed list load.
pub fn load_failure_message(err: &BackendError) -> String {
    match err.status() {
        Some(status) => format!("HTTP error! status: {}", status),
        None => err.to_string(),
    }
}

/// Fetch and normalize one collection, collapsing failures into a message.
pub async fn fetch_records(
    client: &BackendClient,
    collection: Collection,
) -> Result<Vec<Value>, String> {
    client
        .fetch_collection(collection)
        .await
        .map(normalize_collection)
        .map_err(|e| load_failure_message(&e))
}

/// Load a collection from scratch: `Loading`, then `Ready` or `Error`.
pub async fn load_collection(client: &BackendClient, collection: Collection) -> LoadStatus {
    tracing::info!(url = %client.collection_url(collection), "Loading collection");

    let mut status = LoadStatus::Loading;
    status.resolve(fetch_records(client, collection).await);
    status
}

/// Load a collection for a screen visit. `None` if the visit ended first.
pub async fn load_collection_within(
    client: &BackendClient,
    collection: Collection,
    token: &LifetimeToken,
) -> Option<LoadStatus> {
    let status = token.run(load_collection(client, collection)).await;
    if status.is_none() {
        tracing::debug!(collection = collection.path(), "Screen closed, dropping response");
    }
    status
}

/// Users screen data: the user list plus teams for the edit dropdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersScreen {
    pub users: LoadStatus,
    pub teams: Vec<Value>,
}

/// Load users and teams concurrently. Either failing fails the screen.
pub async fn load_users_screen(client: &BackendClient) -> UsersScreen {
    tracing::info!(
        users = %client.collection_url(Collection::Users),
        teams = %client.collection_url(Collection::Teams),
        "Loading users screen"
    );

    let mut screen = UsersScreen::default();
    let outcome = tokio::try_join!(
        fetch_records(client, Collection::Users),
        fetch_records(client, Collection::Teams),
    );

    match outcome {
        Ok((users, teams)) => {
            screen.teams = teams;
            screen.users.resolve(Ok(users));
        }
        Err(message) => {
            screen.users.resolve(Err(message));
        }
    }
    screen
}

/// [`load_users_screen`] bound to a screen visit.
pub async fn load_users_screen_within(
    client: &BackendClient,
    token: &LifetimeToken,
) -> Option<UsersScreen> {
    token.run(load_users_screen(client)).await
}
