// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// User record stored in Firestore at `users/{uid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Auth provider user ID (also used as document ID)
    #[validate(length(min = 1, message = "uid must not be empty"))]
    pub uid: String,
    /// Email address
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    /// Display name (may be None if not shared)
    #[serde(default)]
    pub display_name: Option<String>,
}
