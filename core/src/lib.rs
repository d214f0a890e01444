//! Client-side synchronization core for a remote todo service.
//!
//! # Overview
//! Keeps a local collection of todos reconciled against a remote CRUD
//! service and derives the presentation ordering (incomplete first, then
//! ascending priority) from it. The presentation layer talks only to
//! [`TodoSync`]; it never reaches the gateway directly.
//!
//! # Design
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network; a [`Transport`] impl owns the
//!   round-trip, keeping the wire layer deterministic and testable.
//! - [`TodoGateway`] is the async seam the core depends on; `HttpGateway`
//!   is its HTTP implementation, test doubles implement it directly.
//! - Mutations are per-operation strategies: add/toggle/delete apply to the
//!   collection only after the server confirms, priority changes apply
//!   optimistically and are never rolled back. The asymmetry is part of the
//!   contract, not an accident — see the module docs in [`sync`].

pub mod client;
pub mod error;
pub mod gateway;
pub mod sync;
pub mod types;

pub use client::{HttpMethod, HttpRequest, HttpResponse, TodoClient};
pub use error::SyncError;
pub use gateway::{HttpGateway, TodoGateway, Transport};
pub use sync::{ConfirmDelete, TodoSync};
pub use types::{priority_name, Draft, Todo, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};
