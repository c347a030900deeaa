// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::Router;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;
use umrah_booking_persistence::Persistence;
use umrah_booking_server::{AppState, build_router, seed_package};

/// Umrah Booking Server - HTTP server for package lookup and bookings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Publish the built-in catalog under this slug if it is missing
    #[arg(long)]
    seed_package: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Umrah Booking Server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!(path = %db_path.display(), "Using file-based database");
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let Some(slug) = &args.seed_package {
        seed_package(&mut persistence, slug).map_err(|e| e.message().to_string())?;
    }

    let app: Router = build_router(AppState::new(persistence));

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
