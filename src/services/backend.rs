// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit backend API client.
//!
//! Handles:
//! - Collection listing (`GET /api/{collection}/`)
//! - User partial updates (`PATCH /api/users/{id}/`)
//! - Collapsing transport, status and JSON failures into [`BackendError`]

use crate::config::Config;
use crate::error::BackendError;
use crate::services::editor::UserPatch;
use serde_json::Value;
use std::time::Duration;

/// Collection endpoints exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Teams,
    Activities,
    Workouts,
    Leaderboard,
}

impl Collection {
    /// Path segment under `/api/`.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Teams => "teams",
            Collection::Activities => "activities",
            Collection::Workouts => "workouts",
            Collection::Leaderboard => "leaderboard",
        }
    }
}

/// OctoFit backend client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend named in `config`.
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of a collection endpoint, with the trailing slash the backend routes on.
    pub fn collection_url(&self, collection: Collection) -> String {
        format!("{}/api/{}/", self.base_url, collection.path())
    }

    /// Full URL of one user record.
    pub fn user_url(&self, user_id: &str) -> String {
        format!(
            "{}/api/users/{}/",
            self.base_url,
            urlencoding::encode(user_id)
        )
    }

    /// Fetch a collection endpoint and return its parsed body, whatever its shape.
    pub async fn fetch_collection(&self, collection: Collection) -> Result<Value, BackendError> {
        let url = self.collection_url(collection);
        tracing::debug!(url = %url, "Fetching collection");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Partially update a user and return the backend's updated record.
    pub async fn patch_user(
        &self,
        user_id: &str,
        patch: &UserPatch,
    ) -> Result<Value, BackendError> {
        let url = self.user_url(user_id);
        tracing::info!(url = %url, user_id, "Saving user");

        let response = self
            .http
            .patch(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(patch)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json(
        &self,
        response: reqwest::Response,
    ) -> Result<Value, BackendError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %body, "Backend request failed");
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| BackendError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(&Config::test_default().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_collection_urls_keep_trailing_slash() {
        let client = client("https://octo-8000.app.github.dev/");
        assert_eq!(
            client.collection_url(Collection::Activities),
            "https://octo-8000.app.github.dev/api/activities/"
        );
        assert_eq!(
            client.collection_url(Collection::Leaderboard),
            "https://octo-8000.app.github.dev/api/leaderboard/"
        );
    }

    #[test]
    fn test_user_url_encodes_identifier() {
        let client = client("http://localhost:8000");
        assert_eq!(client.user_url("12"), "http://localhost:8000/api/users/12/");
        assert_eq!(
            client.user_url("a/b c"),
            "http://localhost:8000/api/users/a%2Fb%20c/"
        );
    }
}
