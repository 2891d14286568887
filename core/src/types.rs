//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift between the
//! two. `Todo` is never built field-by-field from untrusted JSON: it goes
//! through `WireTodo` and a checked conversion, so a decoded item always has
//! a non-empty identifier.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier assigned by the remote store.
///
/// Backends differ in how they spell ids (`"65a1f0..."` vs `1`), so both
/// JSON strings and JSON integers are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => TodoId(s),
            RawId::Number(n) => TodoId(n.to_string()),
        })
    }
}

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "WireTodo")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// Unchecked shape of an item on the wire.
#[derive(Deserialize)]
struct WireTodo {
    #[serde(alias = "_id")]
    id: TodoId,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<WireTodo> for Todo {
    type Error = String;

    fn try_from(wire: WireTodo) -> Result<Self, Self::Error> {
        if wire.id.as_str().is_empty() {
            return Err("todo id must not be empty".to_string());
        }
        Ok(Todo {
            id: wire.id,
            text: wire.text,
            completed: wire.completed,
        })
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub text: String,
}

impl CreateTodo {
    /// Build a payload from raw user input.
    ///
    /// Returns `None` when the input is empty or whitespace-only; otherwise
    /// the trimmed text is what gets sent.
    pub fn from_input(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }
}

/// Backend status summary returned by `GET /health`. Display-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub message: String,
    pub database: DatabaseHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseHealth {
    pub connection: String,
    #[serde(rename = "totalTodos")]
    pub total_todos: u64,
}
