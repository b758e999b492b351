// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store with the same write semantics as Firestore.
//!
//! Used by tests and by `STORE_BACKEND=memory` for local runs. Data lives
//! only as long as the process.

use crate::db::{collections, DocumentStore};
use crate::error::AppError;
use crate::models::{ProfileUpdate, ScheduledEvent, User, UserProfile};
use dashmap::DashMap;

/// In-memory store keyed like the Firestore document paths.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<String, User>,
    profiles: DashMap<String, UserProfile>,
    /// Events per user, kept in insertion order.
    schedules: DashMap<String, Vec<ScheduledEvent>>,
    /// When set, every operation fails with this message.
    offline: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising error paths.
    pub fn offline(message: impl Into<String>) -> Self {
        Self {
            offline: Some(message.into()),
            ..Self::default()
        }
    }

    fn check_online(&self) -> Result<(), AppError> {
        match &self.offline {
            Some(message) => Err(AppError::StoreFailure(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn set_user(&self, user: &User) -> Result<(), AppError> {
        self.check_online()?;
        self.users.insert(user.uid.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, uid: &str) -> Result<Option<User>, AppError> {
        self.check_online()?;
        Ok(self.users.get(uid).map(|user| user.value().clone()))
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, AppError> {
        self.check_online()?;
        let profile = self.profiles.get(user_id);
        Ok(profile.map(|profile| profile.value().clone()))
    }

    async fn merge_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<(), AppError> {
        self.check_online()?;
        let mut profile = self.profiles.entry(user_id.to_string()).or_default();
        update.apply_to(&mut profile);
        Ok(())
    }

    async fn list_events(&self, user_id: &str) -> Result<Vec<ScheduledEvent>, AppError> {
        self.check_online()?;
        Ok(self
            .schedules
            .get(user_id)
            .map(|events| events.value().clone())
            .unwrap_or_default())
    }

    async fn set_event(&self, user_id: &str, event: &ScheduledEvent) -> Result<(), AppError> {
        self.check_online()?;
        let mut events = self.schedules.entry(user_id.to_string()).or_default();
        match events.iter().position(|existing| existing.id == event.id) {
            Some(index) => events[index] = event.clone(),
            None => events.push(event.clone()),
        }
        Ok(())
    }

    async fn set_event_completed(
        &self,
        user_id: &str,
        event_id: &str,
        completed: bool,
    ) -> Result<(), AppError> {
        self.check_online()?;
        let missing = || {
            AppError::StoreFailure(format!(
                "No document to update: {}/{}/{}/{}",
                collections::USERS,
                user_id,
                collections::SCHEDULE,
                event_id
            ))
        };

        let mut events = self.schedules.get_mut(user_id).ok_or_else(missing)?;
        let event = events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or_else(missing)?;
        event.is_completed = completed;
        Ok(())
    }
}
