use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Path prefix the binary mounts the API under.
pub const API_PREFIX: &str = "/api";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Items are kept newest first, which is also the listing order.
#[derive(Debug)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

/// Routes relative to the API root.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(toggle_todo).delete(delete_todo))
        .route("/health", get(health))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let router = Router::new().nest(API_PREFIX, app());
    axum::serve(listener, router).await
}

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.clone())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> ApiResult<Json<Todo>> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "Todo text is required"));
    }
    let mut store = db.write().await;
    let todo = Todo {
        id: store.next_id,
        text: text.to_string(),
        completed: false,
    };
    store.next_id += 1;
    store.todos.insert(0, todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    Ok(Json(todo))
}

async fn toggle_todo(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Todo>> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Todo not found"))?;
    todo.completed = !todo.completed;
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|t| t.id != id);
    if store.todos.len() == before {
        return Err(reject(StatusCode::NOT_FOUND, "Todo not found"));
    }
    Ok(Json(json!({ "message": "Todo deleted" })))
}

async fn health(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({
        "message": "Backend is running",
        "database": {
            "connection": "in-memory",
            "totalTodos": store.todos.len(),
        },
    }))
}
