// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile and schedule gateway.
//!
//! Each operation derives the document key from its arguments and issues a
//! single store call. The store is injected so tests can run against
//! [`MemoryStore`](crate::db::MemoryStore).

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{
    CreateScheduledEvent, MessageResponse, ProfileUpdate, ScheduledEvent, User, UserProfile,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Gateway over the document store.
#[derive(Clone)]
pub struct Gateway {
    store: Arc<dyn DocumentStore>,
}

impl Gateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    // ─── Users & Profiles ────────────────────────────────────────

    /// Create (or fully replace) the user document keyed by `uid`.
    pub async fn create_user(&self, user: &User) -> Result<MessageResponse> {
        user.validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        self.store.set_user(user).await?;
        tracing::info!(uid = %user.uid, "User profile created");

        Ok(MessageResponse::new(format!(
            "User profile for {} created successfully.",
            user.email
        )))
    }

    /// Read a profile. A user with no profile yet gets an empty one.
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        let profile = self.store.get_profile(user_id).await?;
        if profile.is_none() {
            tracing::debug!(user_id, "No profile stored yet");
        }
        Ok(profile.unwrap_or_default())
    }

    /// Merge the supplied fields into the profile, creating it if absent.
    ///
    /// Store failures are logged and reported with a generic message.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<MessageResponse> {
        if update.is_empty() {
            return Err(AppError::InvalidInput(
                "No profile fields supplied".to_string(),
            ));
        }

        self.store
            .merge_profile(user_id, update)
            .await
            .map_err(|e| e.redacted("Failed to update profile"))?;

        tracing::info!(
            user_id,
            fields = ?update.field_names(),
            "Profile updated"
        );

        Ok(MessageResponse::new(format!(
            "Profile for {} updated successfully.",
            user_id
        )))
    }

    // ─── Schedule ────────────────────────────────────────────────

    /// All events for a user, in store order.
    pub async fn list_schedule(&self, user_id: &str) -> Result<Vec<ScheduledEvent>> {
        self.store.list_events(user_id).await
    }

    /// Store a new pending event under a freshly generated id.
    pub async fn add_schedule_event(
        &self,
        user_id: &str,
        request: CreateScheduledEvent,
    ) -> Result<ScheduledEvent> {
        let event = ScheduledEvent::pending(Uuid::new_v4().to_string(), request);

        self.store.set_event(user_id, &event).await?;
        tracing::info!(user_id, event_id = %event.id, "Schedule event added");

        Ok(event)
    }

    /// Mark an existing event as completed.
    pub async fn complete_event(&self, user_id: &str, event_id: &str) -> Result<MessageResponse> {
        self.store
            .set_event_completed(user_id, event_id, true)
            .await?;
        tracing::info!(user_id, event_id, "Event marked complete");

        Ok(MessageResponse::new(format!(
            "Event {} marked as complete.",
            event_id
        )))
    }

    /// Clear the completion flag on an existing event.
    pub async fn undo_event(&self, user_id: &str, event_id: &str) -> Result<MessageResponse> {
        self.store
            .set_event_completed(user_id, event_id, false)
            .await?;
        tracing::info!(user_id, event_id, "Event completion undone");

        Ok(MessageResponse::new(format!(
            "Undo completion for event {}.",
            event_id
        )))
    }
}
