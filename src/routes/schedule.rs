// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schedule routes.

use crate::error::Result;
use crate::extract::JsonBody;
use crate::models::{CreateScheduledEvent, MessageResponse, ScheduledEvent};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/schedule/{user_id}",
            get(list_schedule).post(add_schedule_event),
        )
        .route(
            "/schedule/{user_id}/{event_id}/complete",
            put(complete_event),
        )
        .route("/schedule/{user_id}/{event_id}/undo", put(undo_event))
}

async fn list_schedule(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ScheduledEvent>>> {
    Ok(Json(state.gateway.list_schedule(&user_id).await?))
}

/// Add an event; the response carries the generated id.
async fn add_schedule_event(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    JsonBody(request): JsonBody<CreateScheduledEvent>,
) -> Result<Json<ScheduledEvent>> {
    Ok(Json(state.gateway.add_schedule_event(&user_id, request).await?))
}

async fn complete_event(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>> {
    Ok(Json(state.gateway.complete_event(&user_id, &event_id).await?))
}

async fn undo_event(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>> {
    Ok(Json(state.gateway.undo_event(&user_id, &event_id).await?))
}
