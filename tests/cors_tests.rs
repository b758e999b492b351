// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CORS preflight tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

async fn preflight(origin: &str) -> axum::response::Response {
    let (app, _) = common::create_test_app();
    app.oneshot(
        Request::builder()
            .method("OPTIONS")
            .uri("/schedule/u1")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_preflight_from_frontend_allowed() {
    let response = preflight("http://localhost:5173").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_preflight_from_loopback_allowed() {
    let response = preflight("http://127.0.0.1:3000").await;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://127.0.0.1:3000"
    );
}

#[tokio::test]
async fn test_preflight_from_unknown_origin_rejected() {
    let response = preflight("https://evil.example").await;

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
