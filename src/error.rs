// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for backend calls and dashboard responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::views::layout;

/// Failure talking to the OctoFit backend.
///
/// The distinction only lives until a screen collapses it into a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Network unreachable, DNS, timeout, client setup
    #[error("{0}")]
    Transport(String),

    /// Non-2xx status, with whatever text the backend sent
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not valid JSON
    #[error("JSON parse error: {0}")]
    Parse(String),
}

impl BackendError {
    /// HTTP status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Transport(err.to_string())
    }
}

/// Dashboard error type that converts to an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Screen closed before its data arrived")]
    Cancelled,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = layout::page("Error", None, &layout::alert(&self.to_string()));
        (status, Html(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
