// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Document layout:
//! - `users/{uid}` (user record)
//! - `profiles/{user_id}` (sparse profile fields)
//! - `users/{user_id}/schedule/{event_id}` (scheduled events)

use crate::db::{collections, DocumentStore};
use crate::error::AppError;
use crate::models::{ProfileUpdate, ScheduledEvent, User, UserProfile};
use firestore::FirestoreWritePrecondition;
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};

/// Field mask payload for the completion toggle.
#[derive(Serialize, Deserialize)]
struct CompletionPatch {
    #[serde(rename = "isCompleted")]
    is_completed: bool,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: firestore::FirestoreDb,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // The emulator accepts any token, so skip loading real credentials.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id).await.map_err(|e| {
            AppError::StoreFailure(format!("Failed to connect to Firestore: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::StoreFailure(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    /// Path builder for a user's sub-collections.
    fn user_path(&self, user_id: &str) -> Result<firestore::ParentPathBuilder, AppError> {
        self.client
            .parent_path(collections::USERS, user_id)
            .map_err(|e| AppError::StoreFailure(e.to_string()))
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreDb {
    // ─── User Operations ─────────────────────────────────────────

    async fn set_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.uid)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))?;
        Ok(())
    }

    async fn get_user(&self, uid: &str) -> Result<Option<User>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))
    }

    // ─── Profile Operations ──────────────────────────────────────

    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::PROFILES)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))
    }

    async fn merge_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<(), AppError> {
        // Without a precondition, a masked update creates the document when
        // missing and leaves fields outside the mask untouched.
        let _: () = self
            .client
            .fluent()
            .update()
            .fields(update.field_names())
            .in_col(collections::PROFILES)
            .document_id(user_id)
            .object(update)
            .execute()
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))?;
        Ok(())
    }

    // ─── Schedule Operations ─────────────────────────────────────

    async fn list_events(&self, user_id: &str) -> Result<Vec<ScheduledEvent>, AppError> {
        let parent = self.user_path(user_id)?;

        let stream = self
            .client
            .fluent()
            .select()
            .from(collections::SCHEDULE)
            .parent(&parent)
            .obj::<ScheduledEvent>()
            .stream_query_with_errors()
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))?;

        stream
            .try_collect()
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))
    }

    async fn set_event(&self, user_id: &str, event: &ScheduledEvent) -> Result<(), AppError> {
        let parent = self.user_path(user_id)?;

        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::SCHEDULE)
            .document_id(&event.id)
            .parent(&parent)
            .object(event)
            .execute()
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))?;
        Ok(())
    }

    async fn set_event_completed(
        &self,
        user_id: &str,
        event_id: &str,
        completed: bool,
    ) -> Result<(), AppError> {
        let parent = self.user_path(user_id)?;

        let _: () = self
            .client
            .fluent()
            .update()
            .fields(["isCompleted"])
            .in_col(collections::SCHEDULE)
            .precondition(FirestoreWritePrecondition::Exists(true))
            .document_id(event_id)
            .parent(&parent)
            .object(&CompletionPatch {
                is_completed: completed,
            })
            .execute()
            .await
            .map_err(|e| AppError::StoreFailure(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_patch_wire_name() {
        let patch: CompletionPatch = serde_json::from_str(r#"{"isCompleted":true}"#).unwrap();
        assert!(patch.is_completed);
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"isCompleted": true})
        );
    }
}
