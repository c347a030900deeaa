// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Failures of the package and booking store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The database could not be opened.
    ConnectionFailed(String),
    /// A schema migration could not be applied.
    MigrationFailed(String),
    /// A statement failed to execute.
    QueryFailed(String),
    /// A JSON column or timestamp could not be encoded or decoded.
    Encoding(String),
    /// The database path cannot be handed to `SQLite`.
    InvalidPath(String),
    /// The connection does not enforce foreign keys.
    ForeignKeysDisabled,
    /// A stored row holds a value the domain does not recognize.
    CorruptRecord {
        /// The table the row belongs to.
        table: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// A row expected to exist is missing.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Cannot open database: {msg}"),
            Self::MigrationFailed(msg) => write!(f, "Schema migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Statement failed: {msg}"),
            Self::Encoding(msg) => write!(f, "Cannot encode stored value: {msg}"),
            Self::InvalidPath(path) => write!(f, "Unusable database path: {path}"),
            Self::ForeignKeysDisabled => write!(f, "SQLite foreign key enforcement is off"),
            Self::CorruptRecord { table, reason } => {
                write!(f, "Corrupt row in {table}: {reason}")
            }
            Self::NotFound(what) => write!(f, "{what} does not exist"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound(String::from("Row")),
            other => Self::QueryFailed(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::ConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<time::error::Format> for PersistenceError {
    fn from(err: time::error::Format) -> Self {
        Self::Encoding(err.to_string())
    }
}
