//! Client core for a remote todo collection.
//!
//! # Overview
//! Keeps an in-memory list of todo items in sync with a REST backend. The
//! backend is authoritative for ids, ordering and the `completed` flag; the
//! client only ever replaces items with what the server returns.
//!
//! # Design
//! - `TodoApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).
//! - `Transport` is the only I/O seam; front-ends plug in a real HTTP agent,
//!   tests plug in scripted replies.
//! - `TodoState` is a plain snapshot with pure transitions, independent of
//!   any rendering mechanism.
//! - `TodoClient` wires the three together and turns every failure into one
//!   fixed `Banner` message.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use client::{Notice, TodoClient};
pub use config::ClientConfig;
pub use error::{ApiError, Banner};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{Stats, TodoState};
pub use transport::Transport;
pub use types::{CreateTodo, DatabaseHealth, Health, Todo, TodoId};
