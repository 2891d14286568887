//! The controller that keeps local state in sync with the remote collection.
//!
//! # Design
//! `TodoClient` owns one `TodoState`, one `TodoApi` and a `Transport`. Every
//! primary operation is a single request/response: clear the banner, build
//! the request, execute it, parse the response and feed the outcome to the
//! matching state transition. Failures stop at that boundary; none of the
//! operations return an error to the caller.
//!
//! The health probe is informational and goes through a separate path: it
//! returns a `Notice` and never touches the list or the banner.

use std::fmt;

use crate::api::TodoApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::TodoState;
use crate::transport::Transport;
use crate::types::{CreateTodo, Health, Todo, TodoId};

pub struct TodoClient<T> {
    api: TodoApi,
    transport: T,
    state: TodoState,
}

impl<T: Transport> TodoClient<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            api: TodoApi::new(&config.base_url),
            transport,
            state: TodoState::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn into_state(self) -> TodoState {
        self.state
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.transition(|s| s.with_draft(text));
    }

    /// Fetch the whole collection and replace the local list.
    pub fn list(&mut self) {
        self.transition(TodoState::begin);
        let outcome = self.fetch_todos();
        self.transition(|s| s.loaded(outcome));
    }

    /// Create an item from `text`. Blank input is ignored without a request.
    pub fn create(&mut self, text: &str) {
        let Some(input) = CreateTodo::from_input(text) else {
            tracing::debug!("ignoring blank todo text");
            return;
        };
        self.transition(|s| s.with_draft(text).begin());
        let outcome = self.create_todo(&input);
        self.transition(|s| s.created(outcome));
    }

    /// Ask the server to flip `completed` for `id`.
    pub fn toggle(&mut self, id: &TodoId) {
        self.transition(TodoState::begin);
        let request = self.api.build_toggle_todo(id);
        let outcome = self
            .transport
            .execute(request)
            .and_then(|resp| self.api.parse_toggle_todo(resp));
        self.transition(|s| s.toggled(outcome));
    }

    pub fn delete(&mut self, id: &TodoId) {
        self.transition(TodoState::begin);
        let request = self.api.build_delete_todo(id);
        let outcome = self
            .transport
            .execute(request)
            .and_then(|resp| self.api.parse_delete_todo(resp));
        self.transition(|s| s.deleted(id, outcome));
    }

    /// Query the backend status for display.
    pub fn health_probe(&self) -> Notice {
        let request = self.api.build_health();
        match self
            .transport
            .execute(request)
            .and_then(|resp| self.api.parse_health(resp))
        {
            Ok(health) => Notice::Healthy(health),
            Err(err) => {
                tracing::warn!(error = %err, "health probe failed");
                Notice::Unreachable(err.to_string())
            }
        }
    }

    fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let request = self.api.build_list_todos();
        tracing::debug!(path = %request.path, "fetching todos");
        let response = self.transport.execute(request)?;
        self.api.parse_list_todos(response)
    }

    fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let request = self.api.build_create_todo(input)?;
        let response = self.transport.execute(request)?;
        self.api.parse_create_todo(response)
    }

    fn transition(&mut self, f: impl FnOnce(TodoState) -> TodoState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }
}

/// Transient, blocking message produced by the health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Healthy(Health),
    Unreachable(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Healthy(health) => write!(
                f,
                "Backend Status: {}\nDatabase: {}\nTotal Todos: {}",
                health.message, health.database.connection, health.database.total_todos
            ),
            Notice::Unreachable(reason) => write!(f, "Backend health check failed: {reason}"),
        }
    }
}
