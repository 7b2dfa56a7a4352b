//! Error types for airport-console.
//!
//! This module defines all error types used throughout the airport-console crate,
//! providing detailed context for debugging and user-facing messages for the
//! console screens.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::guard::RosterRejection;

/// The main error type for airport-console operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Guard Rejections ===
    /// The requested gate is booked within 30 minutes of the requested time.
    #[error(
        "Gate {gate} is not available at {time}. Please select another time or gate \
         (minimum 30 minutes gap required)."
    )]
    GateUnavailable {
        /// The gate that was requested.
        gate: String,
        /// The requested time of day, as entered.
        time: String,
    },

    /// The crew roster guard refused the assignment.
    #[error("cannot assign crew member to flight {flight_no}: {reason}")]
    CrewRejected {
        /// The flight the crew member was being assigned to.
        flight_no: String,
        /// Which ceiling was hit.
        reason: RosterRejection,
    },

    // === Domain Errors ===
    /// A referenced record does not exist.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Kind of record ("flight", "employee", ...).
        entity: &'static str,
        /// The identifier that was looked up.
        key: String,
    },

    /// The request conflicts with existing data.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Required input was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // === Server Errors ===
    /// Failed to bind the HTTP listener.
    #[error("failed to listen on {addr}: {source}")]
    ServerBind {
        /// Address the server tried to bind.
        addr: SocketAddr,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for airport-console operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given entity and key.
    #[must_use]
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Create a conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this error means a record was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a guard rejection (gate or crew).
    #[must_use]
    pub fn is_validation_rejection(&self) -> bool {
        matches!(self, Self::GateUnavailable { .. } | Self::CrewRejected { .. })
    }
}
