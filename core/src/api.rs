//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Executing the round-trip is the `Transport`'s job, which keeps this layer
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Health, Todo, TodoId};

/// Synchronous, stateless codec for the todo collection resource.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/todos".to_string())
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// The server flips `completed` itself; the request carries no body.
    pub fn build_toggle_todo(&self, id: &TodoId) -> HttpRequest {
        self.bare(HttpMethod::Put, format!("/todos/{id}"))
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/todos/{id}"))
    }

    pub fn build_health(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/health".to_string())
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    pub fn parse_toggle_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    /// Success is the status alone; whatever body the server sends is ignored.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// A degraded backend may answer non-2xx with a valid summary; that
    /// summary is still returned. Status only matters when the body is not
    /// a summary.
    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        match serde_json::from_str(&response.body) {
            Ok(health) => Ok(health),
            Err(e) => {
                check_status(&response)?;
                Err(ApiError::Deserialization(e.to_string()))
            }
        }
    }

    fn bare(&self, method: HttpMethod, suffix: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{suffix}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Map any non-2xx status to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
