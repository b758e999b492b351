// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and profile routes.

use crate::error::Result;
use crate::extract::JsonBody;
use crate::models::{MessageResponse, ProfileUpdate, User, UserProfile};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{user_id}", get(get_profile).put(update_profile))
}

/// Create or replace a user record.
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(user): JsonBody<User>,
) -> Result<Json<MessageResponse>> {
    Ok(Json(state.gateway.create_user(&user).await?))
}

/// Get a user's profile; `{}` when none exists yet.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>> {
    Ok(Json(state.gateway.get_profile(&user_id).await?))
}

/// Merge the supplied profile fields.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    JsonBody(update): JsonBody<ProfileUpdate>,
) -> Result<Json<MessageResponse>> {
    Ok(Json(state.gateway.update_profile(&user_id, &update).await?))
}
