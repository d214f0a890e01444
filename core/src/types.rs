//! Domain types for the todo service.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! any server crate; integration tests catch schema drift. `priority` is an
//! open ordinal (1=high, 2=medium, 3=low) rather than a closed enum: the
//! server may hand back values outside that range and the presentation layer
//! renders them as "unset" instead of failing to deserialize.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PRIORITY_HIGH: u8 = 1;
pub const PRIORITY_MEDIUM: u8 = 2;
pub const PRIORITY_LOW: u8 = 3;

/// A single todo entity as known to the server. `id` is server-assigned
/// and immutable once assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

/// A todo that has not been created yet — no `id` until the server assigns
/// one and returns the canonical [`Todo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

impl Draft {
    /// Build a create payload from a title alone: not done, medium priority.
    /// The title is passed through verbatim — the server is the one that
    /// rejects empty submissions.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            done: false,
            priority: PRIORITY_MEDIUM,
        }
    }
}

fn default_priority() -> u8 {
    PRIORITY_MEDIUM
}

/// Human-readable name for a priority ordinal. Total: unknown values map
/// to "unset" rather than an error.
pub fn priority_name(priority: u8) -> &'static str {
    match priority {
        PRIORITY_HIGH => "high",
        PRIORITY_MEDIUM => "medium",
        PRIORITY_LOW => "low",
        _ => "unset",
    }
}
