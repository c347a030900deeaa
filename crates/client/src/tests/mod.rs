// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod receipt_tests;

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use umrah_booking_domain::PassengerRecord;
use umrah_booking_persistence::Persistence;
use umrah_booking_server::{AppState, build_router, seed_package};

pub const TEST_SLUG: &str = "umrah-collective-2026";

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_router(router: Router) -> String {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts a booking server over a fresh in-memory database, optionally with
/// the built-in catalog published under `TEST_SLUG`.
async fn spawn_booking_server(publish_package: bool) -> String {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    if publish_package {
        seed_package(&mut persistence, TEST_SLUG).unwrap();
    }
    spawn_router(build_router(AppState::new(persistence))).await
}

/// A base URL nothing is listening on.
async fn unused_base_url() -> String {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn valid_passenger(name: &str) -> PassengerRecord {
    PassengerRecord {
        name: String::from(name),
        last_name: String::from("Benali"),
        email: String::new(),
        phone: String::from("+212 612 345 678"),
        health_condition: String::new(),
    }
}
