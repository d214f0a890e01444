//! Client-side synchronization core: owns the local collection of todos and
//! reconciles it against the remote gateway.
//!
//! # Design
//! The collection is the only mutable state and is never touched from
//! outside — callers go through the mutation operations and read back the
//! recomputed [`ordered_view`](TodoSync::ordered_view). Operations use two
//! update strategies, deliberately mixed:
//!
//! - add / toggle / delete are confirmation-gated: the collection changes
//!   only after the server answers, so a failed request leaves the local
//!   view exactly where it was.
//! - priority changes are optimistic: the slot is rewritten before the
//!   request is sent and is *not* rolled back on failure. The optimistic
//!   write and the eventual canonical overwrite are two independent,
//!   unconditional writes to the same slot.
//!
//! Each operation issues at most one request and attaches one resolution;
//! there is no retry, no cancellation, and no ordering enforced between
//! operations in flight at the same time. Two rapid mutations of the same
//! id resolve last-response-wins on the slot — a known consistency gap,
//! kept because the mixed strategy is contractual.
//!
//! Every failure is logged at the operation boundary and returned to the
//! caller; nothing panics and no failure leaves the collection half-updated.

use log::{debug, error};
use uuid::Uuid;

use crate::error::SyncError;
use crate::gateway::TodoGateway;
use crate::types::{Draft, Todo};

/// User-confirmation capability consulted before a delete is issued.
///
/// Injected rather than hardcoded so the core stays testable without a UI.
/// Implemented for any `Fn(Uuid) -> bool` closure.
pub trait ConfirmDelete {
    fn confirm(&self, id: Uuid) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: Fn(Uuid) -> bool,
{
    fn confirm(&self, id: Uuid) -> bool {
        self(id)
    }
}

/// The authoritative local set of todos, keyed by id.
///
/// Arrival order is preserved only so the derived view can break ties
/// stably; it carries no other meaning. At most one entity per id.
#[derive(Debug, Default)]
struct Collection {
    items: Vec<Todo>,
}

impl Collection {
    fn replace_all(&mut self, todos: Vec<Todo>) {
        self.items = todos;
    }

    fn get(&self, id: Uuid) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Append a new entity, or overwrite the slot if the id already exists.
    fn insert(&mut self, todo: Todo) {
        match self.items.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => *slot = todo,
            None => self.items.push(todo),
        }
    }

    /// Overwrite the slot for `id` if it is still present. A slot that
    /// vanished while a request was in flight is simply skipped — the
    /// response arrived for an entity that no longer exists locally.
    fn set(&mut self, id: Uuid, todo: Todo) {
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == id) {
            *slot = todo;
        }
    }

    fn set_priority(&mut self, id: Uuid, priority: u8) {
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == id) {
            slot.priority = priority;
        }
    }

    fn remove(&mut self, id: Uuid) {
        self.items.retain(|t| t.id != id);
    }
}

/// Synchronization core over a [`TodoGateway`].
///
/// Owns the collection; the presentation layer invokes the mutation
/// operations and reads [`ordered_view`](Self::ordered_view).
#[derive(Debug)]
pub struct TodoSync<G, C> {
    gateway: G,
    confirm: C,
    collection: Collection,
}

impl<G: TodoGateway, C: ConfirmDelete> TodoSync<G, C> {
    pub fn new(gateway: G, confirm: C) -> Self {
        Self {
            gateway,
            confirm,
            collection: Collection::default(),
        }
    }

    /// Full load from the server, replacing whatever the collection held.
    /// On failure the collection is left as it was and no retry is made.
    pub async fn initialize(&mut self) -> Result<(), SyncError> {
        match self.gateway.list().await {
            Ok(todos) => {
                debug!("initial load fetched {} todos", todos.len());
                self.collection.replace_all(todos);
                Ok(())
            }
            Err(err) => {
                error!("initial load failed: {err}");
                Err(err)
            }
        }
    }

    /// Create a todo from a title, verbatim — no local validation, empty
    /// titles included; the server is the one that rejects them.
    /// Confirmation-gated: the collection gains the entity only once the
    /// server has answered with its canonical representation.
    pub async fn add_todo(&mut self, title: &str) -> Result<(), SyncError> {
        let draft = Draft::new(title);
        match self.gateway.create(&draft).await {
            Ok(created) => {
                self.collection.insert(created);
                Ok(())
            }
            Err(err) => {
                error!("create failed: {err}");
                Err(err)
            }
        }
    }

    /// Set the done flag of an existing todo. Fails fast with
    /// [`SyncError::NotFound`] — no network call — when the id is not in
    /// the collection (it may have been deleted concurrently).
    /// Confirmation-gated: on failure the slot keeps its pre-toggle value.
    pub async fn toggle_done(&mut self, id: Uuid, done: bool) -> Result<(), SyncError> {
        let updated = match self.collection.get(id) {
            Some(target) => Todo {
                done,
                ..target.clone()
            },
            None => {
                error!("toggle target {id} is not in the collection");
                return Err(SyncError::NotFound);
            }
        };
        match self.gateway.update(id, &updated).await {
            Ok(canonical) => {
                self.collection.set(id, canonical);
                Ok(())
            }
            Err(err) => {
                error!("toggle of {id} failed: {err}");
                Err(err)
            }
        }
    }

    /// Delete a todo, gated by the injected confirmation capability.
    /// Declined means no request and no mutation (`Ok(false)`); confirmed
    /// and successful means the entity is removed (`Ok(true)`); a failed
    /// request leaves the collection untouched.
    pub async fn delete_todo(&mut self, id: Uuid) -> Result<bool, SyncError> {
        if !self.confirm.confirm(id) {
            return Ok(false);
        }
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.collection.remove(id);
                Ok(true)
            }
            Err(err) => {
                error!("delete of {id} failed: {err}");
                Err(err)
            }
        }
    }

    /// Change a todo's priority, optimistically: the slot is rewritten
    /// before the request is sent, so the ordered view re-sorts at once.
    /// The request carries the pre-optimistic snapshot merged with the new
    /// priority. On success the server's canonical entity overwrites the
    /// slot; on failure the optimistic value stays — no rollback.
    pub async fn update_priority(&mut self, id: Uuid, priority: u8) -> Result<(), SyncError> {
        let snapshot = match self.collection.get(id) {
            Some(target) => Todo {
                priority,
                ..target.clone()
            },
            None => {
                error!("priority target {id} is not in the collection");
                return Err(SyncError::NotFound);
            }
        };
        self.collection.set_priority(id, priority);
        match self.gateway.update(id, &snapshot).await {
            Ok(canonical) => {
                self.collection.set(id, canonical);
                Ok(())
            }
            Err(err) => {
                error!("priority update of {id} failed, optimistic value kept: {err}");
                Err(err)
            }
        }
    }

    /// Presentation order, recomputed from the collection on every call:
    /// incomplete todos before completed ones, ascending priority within
    /// each group, ties in arrival order (the sort is stable).
    pub fn ordered_view(&self) -> Vec<Todo> {
        let mut view = self.collection.items.clone();
        view.sort_by_key(|t| (t.done, t.priority));
        view
    }

    /// Number of todos still open.
    pub fn remaining(&self) -> usize {
        self.collection.items.iter().filter(|t| !t.done).count()
    }
}
