// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! The gateway only sees [`DocumentStore`]; production uses Firestore and
//! tests or local runs can swap in [`MemoryStore`].

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{ProfileUpdate, ScheduledEvent, User, UserProfile};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Profile aggregates (keyed by user id)
    pub const PROFILES: &str = "profiles";
    /// Sub-collection under `users/{user_id}`
    pub const SCHEDULE: &str = "schedule";
}

/// Single-document operations the gateway needs from a document store.
///
/// Every method touches exactly one document (or streams one collection);
/// failures come back as [`AppError::StoreFailure`].
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Overwrite `users/{uid}` with the full user record.
    async fn set_user(&self, user: &User) -> Result<(), AppError>;

    /// Read `users/{uid}`.
    async fn get_user(&self, uid: &str) -> Result<Option<User>, AppError>;

    /// Read `profiles/{user_id}`.
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, AppError>;

    /// Merge-upsert the supplied fields into `profiles/{user_id}`.
    async fn merge_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<(), AppError>;

    /// All events under `users/{user_id}/schedule`, in store order.
    async fn list_events(&self, user_id: &str) -> Result<Vec<ScheduledEvent>, AppError>;

    /// Overwrite `users/{user_id}/schedule/{event.id}`.
    async fn set_event(&self, user_id: &str, event: &ScheduledEvent) -> Result<(), AppError>;

    /// Patch `isCompleted` on an existing event. Fails if the event is missing.
    async fn set_event_completed(
        &self,
        user_id: &str,
        event_id: &str,
        completed: bool,
    ) -> Result<(), AppError>;
}
