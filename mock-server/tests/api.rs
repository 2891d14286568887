use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Todo};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn bare_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(bare_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_200_with_first_id() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"text":"buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(
        todo,
        Todo {
            id: 1,
            text: "buy milk".to_string(),
            completed: false
        }
    );
}

#[tokio::test]
async fn create_todo_blank_text_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"text":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Todo text is required");
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"not_text":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- toggle ---

#[tokio::test]
async fn toggle_todo_not_found() {
    let resp = app().oneshot(bare_request("PUT", "/todos/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn toggle_todo_bad_id_returns_400() {
    let resp = app().oneshot(bare_request("PUT", "/todos/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app().oneshot(bare_request("DELETE", "/todos/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- health ---

#[tokio::test]
async fn health_reports_count() {
    let resp = app().oneshot(bare_request("GET", "/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Backend is running");
    assert_eq!(body["database"]["totalTodos"], 0);
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let mut app = app().into_service();

    // create two; listing is newest first
    for text in ["walk dog", "feed cat"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/todos", &format!(r#"{{"text":"{text}"}}"#)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", "/todos"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    let ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 1]);

    // toggle twice flips back
    for expected in [true, false] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(bare_request("PUT", "/todos/1"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let todo: Todo = body_json(resp).await;
        assert_eq!(todo.text, "walk dog");
        assert_eq!(todo.completed, expected);
    }

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("DELETE", "/todos/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Todo deleted");

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("DELETE", "/todos/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // health sees the survivor
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", "/health"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["database"]["totalTodos"], 1);
}
