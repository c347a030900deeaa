// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{AppState, build_router};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use umrah_booking_persistence::Persistence;

pub const TEST_SLUG: &str = "umrah-collective-2026";

/// Helper to create a router over a fresh in-memory database.
fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState::new(persistence))
}

/// Sends one request and returns the status with the decoded JSON body.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request: Request<Body> = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, value)
}

fn passenger_json(name: &str, phone: &str) -> Value {
    json!({
        "name": name,
        "lastName": "Benali",
        "email": "",
        "phone": phone,
        "healthCondition": ""
    })
}

fn booking_json(slug: &str, passengers: Vec<Value>) -> Value {
    json!({
        "packageSlug": slug,
        "packageType": "umrah",
        "umrahType": "collective",
        "userData": passengers,
        "program": { "id": "program-a", "name": "Program A" },
        "room": { "id": "twin-room", "name": "Twin Room" },
        "visa": { "id": "umrah-visa", "name": "Umrah Visa" }
    })
}

async fn publish_fallback_package(app: &Router) {
    let catalog: Value =
        serde_json::to_value(umrah_booking_domain::PackageCatalog::fallback()).unwrap();
    let mut body: Value = json!({ "name": "Umrah 2026" });
    for key in ["programs", "rooms", "visas"] {
        body[key] = catalog[key].clone();
    }
    let (status, _) = send(app, "PUT", &format!("/api/packages/slug/{TEST_SLUG}"), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
}
