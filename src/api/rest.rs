//! reqwest-backed implementation of [`TodoApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;

use super::{ApiError, ApiResult, MessageBody, NewTodo, ReorderRequest, TodoApi, TodoItem, TodoList, TodosResponse};
use crate::config::ServerConfig;

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct TextBody<'a> {
    todo: &'a str,
}

/// HTTP client for the to-do service
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    lists_enabled: bool,
}

impl RestClient {
    /// Build a client from the server section of the configuration
    pub fn new(config: &ServerConfig) -> ApiResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            lists_enabled: config.lists_enabled,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/todos`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn require_lists(&self, operation: &'static str) -> ApiResult<()> {
        if self.lists_enabled {
            Ok(())
        } else {
            Err(ApiError::Unsupported(operation))
        }
    }

    /// Turn a non-2xx response into an [`ApiError`], keeping the server message
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageBody>(&body)
            .map(|m| m.message)
            .unwrap_or(body);

        if status == StatusCode::NOT_FOUND {
            Err(ApiError::NotFound(message))
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        Self::check(response).await
    }
}

/// Validate and strip trailing slashes from a configured base URL
pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl TodoApi for RestClient {
    async fn get_lists(&self) -> ApiResult<Vec<TodoList>> {
        self.require_lists("listing lists")?;
        let response = self.send(self.client.get(self.endpoint("/api/lists"))).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create_list(&self, name: &str) -> ApiResult<()> {
        self.require_lists("creating a list")?;
        self.send(self.client.post(self.endpoint("/api/lists")).json(&NameBody { name }))
            .await?;
        Ok(())
    }

    async fn rename_list(&self, id: i64, name: &str) -> ApiResult<()> {
        self.require_lists("renaming a list")?;
        self.send(
            self.client
                .put(self.endpoint(&format!("/api/lists/{}", id)))
                .json(&NameBody { name }),
        )
        .await?;
        Ok(())
    }

    async fn delete_list(&self, id: i64) -> ApiResult<()> {
        self.require_lists("deleting a list")?;
        self.send(self.client.delete(self.endpoint(&format!("/api/lists/{}", id))))
            .await?;
        Ok(())
    }

    async fn get_todos(&self, list_id: Option<i64>) -> ApiResult<Vec<TodoItem>> {
        let path = match list_id {
            Some(id) => format!("/api/lists/{}/todos", id),
            None => "/api/todos".to_string(),
        };
        let response = self.send(self.client.get(self.endpoint(&path))).await?;
        let body = response.text().await?;
        let todos: TodosResponse = serde_json::from_str(&body)?;
        Ok(todos.into_items())
    }

    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<()> {
        self.send(self.client.post(self.endpoint("/api/todos")).json(todo)).await?;
        Ok(())
    }

    async fn edit_todo(&self, id: i64, text: &str) -> ApiResult<()> {
        self.send(
            self.client
                .put(self.endpoint(&format!("/api/todos/{}", id)))
                .json(&TextBody { todo: text }),
        )
        .await?;
        Ok(())
    }

    async fn toggle_importance(&self, id: i64) -> ApiResult<()> {
        self.send(self.client.patch(self.endpoint(&format!("/api/todos/{}/toggle", id))))
            .await?;
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> ApiResult<()> {
        self.send(self.client.delete(self.endpoint(&format!("/api/todos/{}", id))))
            .await?;
        Ok(())
    }

    async fn reorder_todos(&self, request: &ReorderRequest) -> ApiResult<()> {
        self.send(self.client.put(self.endpoint("/api/todos/reorder")).json(request))
            .await?;
        Ok(())
    }
}
