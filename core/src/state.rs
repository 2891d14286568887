//! Observable client state and its transitions.
//!
//! `TodoState` is the view model a front-end renders. Every transition takes
//! the current snapshot by value and returns the next one, so the rules live
//! here and not in whatever drives the network. A failed outcome never
//! touches the item list; it only fills the banner slot.
//!
//! Items are matched by `id` when applying toggle and delete outcomes. That
//! keeps completions commutative enough to arrive in any order: a toggle
//! that lands after a delete of the same item finds nothing to replace.

use crate::error::{ApiError, Banner};
use crate::types::{Todo, TodoId};

/// Snapshot of everything a front-end shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    todos: Vec<Todo>,
    draft: String,
    loading: bool,
    error: Option<Banner>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoState {
    /// Empty list, still waiting for the first load.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
            loading: true,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Pending user input for the next create.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<Banner> {
        self.error
    }

    pub fn stats(&self) -> Stats {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        Stats {
            total: self.todos.len(),
            completed,
            pending: self.todos.len() - completed,
        }
    }

    /// Clear the banner ahead of a new attempt.
    pub fn begin(mut self) -> Self {
        self.error = None;
        self
    }

    pub fn with_draft(mut self, draft: impl Into<String>) -> Self {
        self.draft = draft.into();
        self
    }

    /// Apply the outcome of a full-list fetch.
    ///
    /// Leaves the loading phase either way; a failure keeps the stale list.
    pub fn loaded(mut self, outcome: Result<Vec<Todo>, ApiError>) -> Self {
        self.loading = false;
        match outcome {
            Ok(todos) => {
                self.todos = todos;
                self
            }
            Err(err) => self.fail(Banner::Load, &err),
        }
    }

    /// Apply the outcome of a create. The new item goes to the front.
    pub fn created(mut self, outcome: Result<Todo, ApiError>) -> Self {
        match outcome {
            Ok(todo) => {
                self.todos.insert(0, todo);
                self.draft.clear();
                self
            }
            Err(err) => self.fail(Banner::Add, &err),
        }
    }

    /// Apply the outcome of a toggle by replacing the item with the same id.
    pub fn toggled(mut self, outcome: Result<Todo, ApiError>) -> Self {
        match outcome {
            Ok(updated) => {
                self.todos = self
                    .todos
                    .into_iter()
                    .map(|t| if t.id == updated.id { updated.clone() } else { t })
                    .collect();
                self
            }
            Err(err) => self.fail(Banner::Update, &err),
        }
    }

    /// Apply the outcome of a delete of `id`.
    pub fn deleted(mut self, id: &TodoId, outcome: Result<(), ApiError>) -> Self {
        match outcome {
            Ok(()) => {
                self.todos.retain(|t| &t.id != id);
                self
            }
            Err(err) => self.fail(Banner::Delete, &err),
        }
    }

    fn fail(mut self, banner: Banner, err: &ApiError) -> Self {
        match err {
            ApiError::Http { status, body } => {
                tracing::warn!(%banner, status, body = %body, "request rejected by server");
            }
            ApiError::Transport(reason) => {
                tracing::warn!(%banner, %reason, "request did not complete");
            }
            other => {
                tracing::warn!(%banner, error = %other, "unreadable exchange");
            }
        }
        self.error = Some(banner);
        self
    }
}

/// Footer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}
