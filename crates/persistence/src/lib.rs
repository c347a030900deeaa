// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Umrah booking system.
//!
//! Stores published packages (with their program, room and visa catalog)
//! and the bookings submitted against them. Built on Diesel over `SQLite`
//! with embedded migrations.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases created by
//! `Persistence::new_in_memory()`, so they need no external infrastructure.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use umrah_booking_domain::BookingRequest;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{BookingData, PackageData, PackageDefinition};
pub use error::PersistenceError;

/// Persistence adapter for packages and bookings.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database, named from an atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_booking_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter backed by a `SQLite` file.
    ///
    /// The file is created if missing and switched to WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path
            .as_ref()
            .to_str()
            .ok_or_else(|| PersistenceError::InvalidPath(path.as_ref().display().to_string()))?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Stores a booking request as a new pending booking created now.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking cannot be stored.
    pub fn insert_booking(&mut self, request: &BookingRequest) -> Result<BookingData, PersistenceError> {
        mutations::insert_booking(&mut self.conn, request, OffsetDateTime::now_utc())
    }

    /// Retrieves a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking(&mut self, booking_id: &str) -> Result<Option<BookingData>, PersistenceError> {
        queries::get_booking(&mut self.conn, booking_id)
    }

    /// Lists every booking, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(&mut self) -> Result<Vec<BookingData>, PersistenceError> {
        queries::list_bookings(&mut self.conn)
    }

    /// Counts stored bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_bookings(&mut self) -> Result<i64, PersistenceError> {
        queries::count_bookings(&mut self.conn)
    }

    // ========================================================================
    // Packages
    // ========================================================================

    /// Creates or replaces the package published under `slug`.
    ///
    /// # Errors
    ///
    /// Returns an error if the package cannot be stored.
    pub fn upsert_package(
        &mut self,
        slug: &str,
        definition: &PackageDefinition,
    ) -> Result<PackageData, PersistenceError> {
        mutations::upsert_package(&mut self.conn, slug, definition, OffsetDateTime::now_utc())
    }

    /// Retrieves a package by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_package_by_slug(&mut self, slug: &str) -> Result<Option<PackageData>, PersistenceError> {
        queries::get_package_by_slug(&mut self.conn, slug)
    }

    /// Counts published packages.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_packages(&mut self) -> Result<i64, PersistenceError> {
        queries::count_packages(&mut self.conn)
    }
}
