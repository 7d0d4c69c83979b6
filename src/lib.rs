// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OctoFit Dashboard: browse and edit OctoFit Tracker records
//!
//! This crate serves server-rendered screens for users, activities, teams,
//! workouts and the leaderboard, backed by the OctoFit REST API.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use config::Config;
use error::BackendError;
use services::{BackendClient, SaveLocks, ScreenLifetime};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
    pub save_locks: SaveLocks,
    /// Ended on shutdown; screen loads still waiting on the backend are cancelled
    pub shutdown: ScreenLifetime,
}

impl AppState {
    /// Build the state, wiring the backend client from `config`.
    pub fn new(config: Config) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config)?;
        Ok(Self {
            config,
            backend,
            save_locks: SaveLocks::new(),
            shutdown: ScreenLifetime::new(),
        })
    }
}
