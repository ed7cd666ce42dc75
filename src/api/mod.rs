//! REST API abstraction for the to-do service
//!
//! This module defines the data exchanged with the remote service and the
//! [`TodoApi`] trait the UI talks to. The only production implementation is
//! [`rest::RestClient`]; tests swap in an in-memory fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// HTTP implementation backed by reqwest
pub mod rest;

#[cfg(test)]
pub(crate) mod fake;

pub use rest::RestClient;

/// A single to-do item as stored by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub todo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub position: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
}

impl TodoItem {
    /// Extra text, if the server sent a non-empty one
    pub fn extra_text(&self) -> Option<&str> {
        self.todo_extra.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Deadline, if the server sent a non-empty one
    pub fn deadline_str(&self) -> Option<&str> {
        self.deadline.as_deref().filter(|s| !s.is_empty())
    }
}

/// A named list of to-do items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub todo_count: i64,
}

/// Body of a to-do creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub todo: String,
    pub todo_extra: String,
    pub important: bool,
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
}

/// Body of a reorder request: the complete id sequence of one list, top first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub list_id: Option<i64>,
    pub todo_ids: Vec<i64>,
}

/// Item collection as returned by the server.
///
/// Newer servers answer with a plain array; the original single-list server
/// partitions items by importance and omits the flag from each item.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TodosResponse {
    Items(Vec<TodoItem>),
    Partitioned {
        important: Vec<TodoItem>,
        not_important: Vec<TodoItem>,
    },
}

impl TodosResponse {
    /// Flatten into a single vector ordered by position (important first for
    /// the partitioned shape)
    pub fn into_items(self) -> Vec<TodoItem> {
        match self {
            Self::Items(mut items) => {
                crate::ordering::sort_by_position(&mut items);
                items
            }
            Self::Partitioned {
                important,
                not_important,
            } => {
                let mut items: Vec<TodoItem> = important
                    .into_iter()
                    .map(|item| TodoItem { important: true, ..item })
                    .collect();
                items.extend(
                    not_important
                        .into_iter()
                        .map(|item| TodoItem { important: false, ..item }),
                );
                items
            }
        }
    }
}

/// `{"message": "..."}` envelope the server uses for errors and acknowledgements
#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Errors raised by [`TodoApi`] implementations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("{0} is not supported without named lists")]
    Unsupported(&'static str),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Operations offered by the remote to-do service.
///
/// Mutations return `()`: callers refetch a fresh snapshot afterwards instead
/// of trusting the response body.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch all named lists
    async fn get_lists(&self) -> ApiResult<Vec<TodoList>>;

    /// Create a named list
    async fn create_list(&self, name: &str) -> ApiResult<()>;

    /// Rename a named list
    async fn rename_list(&self, id: i64, name: &str) -> ApiResult<()>;

    /// Delete a named list and its items
    async fn delete_list(&self, id: i64) -> ApiResult<()>;

    /// Fetch the items of a list, or every item when `list_id` is `None`
    async fn get_todos(&self, list_id: Option<i64>) -> ApiResult<Vec<TodoItem>>;

    /// Create an item
    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<()>;

    /// Replace the text of an item
    async fn edit_todo(&self, id: i64, text: &str) -> ApiResult<()>;

    /// Flip the importance flag of an item
    async fn toggle_importance(&self, id: i64) -> ApiResult<()>;

    /// Delete an item
    async fn delete_todo(&self, id: i64) -> ApiResult<()>;

    /// Persist a new ordering of one list
    async fn reorder_todos(&self, request: &ReorderRequest) -> ApiResult<()>;
}
