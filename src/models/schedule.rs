// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scheduled event models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Event stored at `users/{user_id}/schedule/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ScheduledEvent {
    /// Server-generated ID (also used as document ID)
    pub id: String,
    pub subject: String,
    /// Start time, stored as sent by the client
    pub start_time: String,
    /// End time, stored as sent by the client
    pub end_time: String,
    pub color: String,
    pub location: String,
    pub is_completed: bool,
}

/// Request body for adding an event. Any client-sent `id` or
/// `isCompleted` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateScheduledEvent {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub location: String,
}

impl ScheduledEvent {
    /// Build a pending event from a creation request.
    pub fn pending(id: String, request: CreateScheduledEvent) -> Self {
        Self {
            id,
            subject: request.subject,
            start_time: request.start_time,
            end_time: request.end_time,
            color: request.color,
            location: request.location,
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_completion_flag_ignored() {
        let request: CreateScheduledEvent = serde_json::from_str(
            r##"{"id":"mine","isCompleted":true,"subject":"Math","startTime":"09:00",
                "endTime":"10:00","color":"#fff","location":"Room1"}"##,
        )
        .unwrap();

        let event = ScheduledEvent::pending("generated".to_string(), request);
        assert_eq!(event.id, "generated");
        assert!(!event.is_completed);
    }

    #[test]
    fn test_event_wire_names() {
        let event = ScheduledEvent {
            id: "e1".to_string(),
            subject: "Math".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            color: "#fff".to_string(),
            location: "Room1".to_string(),
            is_completed: false,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "10:00");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn test_missing_field_rejected() {
        let result: Result<CreateScheduledEvent, _> = serde_json::from_str(r#"{"subject":"Math"}"#);
        assert!(result.is_err());
    }
}
