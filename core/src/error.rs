//! Error type shared by the gateway and the synchronization core.
//!
//! # Design
//! One enum covers every way an operation can fail. `NotFound` and
//! `Validation` get dedicated variants because the core reacts to them
//! differently (fail fast locally vs. surface a server rejection); any
//! other unexpected status lands in `Http` with the raw status and body
//! for debugging. Failures never escape an operation as a panic — they are
//! logged at the operation boundary and returned to the caller.

use std::fmt;

/// Errors surfaced by gateway calls and core operations.
#[derive(Debug)]
pub enum SyncError {
    /// The request never completed: connection failure, timeout, or any
    /// other transport-level problem.
    Transport(String),

    /// The entity does not exist — locally in the collection, or
    /// server-side (HTTP 404).
    NotFound,

    /// The server rejected the entity as malformed (HTTP 400/422),
    /// e.g. an empty title on create.
    Validation { status: u16, body: String },

    /// The server returned a non-2xx status the client has no mapping for.
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Transport(msg) => write!(f, "transport failure: {msg}"),
            SyncError::NotFound => write!(f, "todo not found"),
            SyncError::Validation { status, body } => {
                write!(f, "server rejected entity (HTTP {status}): {body}")
            }
            SyncError::Http { status, body } => {
                write!(f, "unexpected HTTP {status}: {body}")
            }
            SyncError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            SyncError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for SyncError {}
