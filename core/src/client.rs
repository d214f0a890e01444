//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! HTTP traffic is described as plain data: `TodoClient` turns each gateway
//! verb into an `HttpRequest` and interprets the matching `HttpResponse`,
//! without ever touching the network. The executing side (a [`Transport`]
//! impl) owns the actual round-trip, which keeps this layer deterministic
//! and testable with literal responses.
//!
//! [`Transport`]: crate::gateway::Transport

use uuid::Uuid;

use crate::error::SyncError;
use crate::types::{Draft, Todo};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, ready for a transport to
/// execute.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, as handed back by a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Stateless request builder / response parser for the todo endpoints.
///
/// Holds only the base URL; carries no state between calls.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn entity_url(&self, id: Uuid) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, draft: &Draft) -> Result<HttpRequest, SyncError> {
        let body = serde_json::to_string(draft).map_err(|e| SyncError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Update sends the full entity, id included; the server replaces every
    /// mutable field and answers with the canonical post-update entity.
    pub fn build_update_todo(&self, id: Uuid, todo: &Todo) -> Result<HttpRequest, SyncError> {
        let body = serde_json::to_string(todo).map_err(|e| SyncError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.entity_url(id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.entity_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, SyncError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, SyncError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, SyncError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), SyncError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the matching `SyncError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), SyncError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(SyncError::NotFound),
        400 | 422 => Err(SyncError::Validation {
            status: response.status,
            body: response.body.clone(),
        }),
        status => Err(SyncError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PRIORITY_HIGH;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/api/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let draft = Draft::new("Buy milk");
        let req = client().build_create_todo(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8080/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["done"], false);
        assert_eq!(body["priority"], 2);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_todo_sends_full_entity() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "Keep".to_string(),
            done: true,
            priority: PRIORITY_HIGH,
        };
        let req = client().build_update_todo(todo.id, &todo).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.url,
            "http://localhost:8080/api/todos/00000000-0000-0000-0000-000000000000"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(body["title"], "Keep");
        assert_eq!(body["done"], true);
        assert_eq!(body["priority"], 1);
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.url,
            "http://localhost:8080/api/todos/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8080/");
        let req = client.build_list_todos();
        assert_eq!(req.url, "http://localhost:8080/api/todos");
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(
                200,
                r#"[{"id":"00000000-0000-0000-0000-000000000001","title":"Test","done":false,"priority":2}]"#,
            ))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Test");
        assert_eq!(todos[0].priority, 2);
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, SyncError::Deserialization(_)));
    }

    #[test]
    fn parse_create_todo_success() {
        let todo = client()
            .parse_create_todo(response(
                201,
                r#"{"id":"00000000-0000-0000-0000-000000000001","title":"New","done":false,"priority":2}"#,
            ))
            .unwrap();
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn parse_create_todo_empty_title_rejection_is_validation() {
        let err = client()
            .parse_create_todo(response(422, "title must not be empty"))
            .unwrap_err();
        assert!(matches!(err, SyncError::Validation { status: 422, .. }));
    }

    #[test]
    fn parse_create_todo_server_error_is_http() {
        let err = client().parse_create_todo(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, SyncError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_success() {
        let todo = client()
            .parse_update_todo(response(
                200,
                r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Updated","done":true,"priority":1}"#,
            ))
            .unwrap();
        assert_eq!(todo.title, "Updated");
        assert!(todo.done);
        assert_eq!(todo.priority, 1);
    }

    #[test]
    fn parse_update_todo_not_found() {
        let err = client().parse_update_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, SyncError::NotFound));
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let err = client().parse_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, SyncError::NotFound));
    }
}
