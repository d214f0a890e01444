use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Priority assigned when a create request omits the field (2 = medium).
fn default_priority() -> u8 {
    2
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    pub priority: u8,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

/// Full-replace update payload. Clients send the whole entity; an `id`
/// field in the body is ignored in favor of the path parameter.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub done: bool,
    pub priority: u8,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", axum::routing::put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), (StatusCode, String)> {
    if input.title.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "title must not be empty".to_string(),
        ));
    }
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        done: input.done,
        priority: input.priority,
    };
    db.write().await.insert(todo.id, todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.done = input.done;
    todo.priority = input.priority;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    todos.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "Test".to_string(),
            done: false,
            priority: 1,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["done"], false);
        assert_eq!(json["priority"], 1);
    }

    #[test]
    fn create_todo_defaults() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"Defaults only"}"#).unwrap();
        assert_eq!(input.title, "Defaults only");
        assert!(!input.done);
        assert_eq!(input.priority, 2);
    }

    #[test]
    fn create_todo_accepts_explicit_fields() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","done":true,"priority":1}"#).unwrap();
        assert!(input.done);
        assert_eq!(input.priority, 1);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"done":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_ignores_id_in_body() {
        let input: UpdateTodo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Full","done":true,"priority":3}"#,
        )
        .unwrap();
        assert_eq!(input.title, "Full");
        assert!(input.done);
        assert_eq!(input.priority, 3);
    }

    #[test]
    fn update_todo_requires_all_fields() {
        let result: Result<UpdateTodo, _> = serde_json::from_str(r#"{"title":"Partial"}"#);
        assert!(result.is_err());
    }
}
