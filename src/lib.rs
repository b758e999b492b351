// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chela API: user profiles and per-user schedules.
//!
//! A thin HTTP gateway over a document store. Every endpoint reads or
//! writes exactly one document (or streams one collection).

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::Gateway;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub gateway: Gateway,
}
