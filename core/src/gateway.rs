//! Remote gateway boundary: the async contract the synchronization core
//! calls into, and its HTTP implementation.
//!
//! # Design
//! `TodoGateway` is the seam the core depends on — four verbs, each a single
//! request resolving to the server's canonical representation or a
//! [`SyncError`]. `HttpGateway` implements it by composing the stateless
//! [`TodoClient`] with an injected [`Transport`], so the crate stays free of
//! any particular HTTP stack or runtime: tests execute requests with ureq,
//! a host application plugs in whatever it already uses. No retries and no
//! cancellation anywhere — each call runs to completion or failure once.

use uuid::Uuid;

use crate::client::{HttpRequest, HttpResponse, TodoClient};
use crate::error::SyncError;
use crate::types::{Draft, Todo};

/// Async contract over the remote CRUD service.
#[allow(async_fn_in_trait)]
pub trait TodoGateway {
    /// Fetch every todo the server knows about.
    async fn list(&self) -> Result<Vec<Todo>, SyncError>;

    /// Submit a draft; the server assigns the id and returns the canonical
    /// entity.
    async fn create(&self, draft: &Draft) -> Result<Todo, SyncError>;

    /// Replace the entity stored under `id`. The response is canonical and
    /// may differ from what was sent (server-side normalization).
    async fn update(&self, id: Uuid, todo: &Todo) -> Result<Todo, SyncError>;

    /// Remove the entity stored under `id`.
    async fn delete(&self, id: Uuid) -> Result<(), SyncError>;
}

/// Executes one [`HttpRequest`] and hands back the raw [`HttpResponse`].
///
/// The single injected I/O seam. Implementations should fail with
/// [`SyncError::Transport`] on connection-level problems and are expected
/// to enforce their own bounded timeout.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SyncError>;
}

/// `TodoGateway` over real HTTP: build with [`TodoClient`], execute with the
/// injected transport, parse the response.
#[derive(Debug, Clone)]
pub struct HttpGateway<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> HttpGateway<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }
}

impl<T: Transport> TodoGateway for HttpGateway<T> {
    async fn list(&self) -> Result<Vec<Todo>, SyncError> {
        let request = self.client.build_list_todos();
        let response = self.transport.execute(request).await?;
        self.client.parse_list_todos(response)
    }

    async fn create(&self, draft: &Draft) -> Result<Todo, SyncError> {
        let request = self.client.build_create_todo(draft)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_todo(response)
    }

    async fn update(&self, id: Uuid, todo: &Todo) -> Result<Todo, SyncError> {
        let request = self.client.build_update_todo(id, todo)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_todo(response)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SyncError> {
        let request = self.client.build_delete_todo(id);
        let response = self.transport.execute(request).await?;
        self.client.parse_delete_todo(response)
    }
}
