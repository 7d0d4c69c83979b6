// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend access and screen logic.

pub mod backend;
pub mod collection;
pub mod editor;
pub mod lifetime;

pub use backend::{BackendClient, Collection};
pub use collection::{load_collection, normalize_collection, LoadStatus, UsersScreen};
pub use editor::{EditDraft, EditSession, SaveGuard, SaveLocks, SaveOutcome, UserPatch};
pub use lifetime::{LifetimeToken, ScreenLifetime};
