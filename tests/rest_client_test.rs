use serde_json::{json, Value};
use ticklist::api::{ApiError, NewTodo, ReorderRequest, RestClient, TodoApi};
use ticklist::config::ServerConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One HTTP request as it arrived on the socket
#[derive(Debug)]
struct Recorded {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Recorded {
    fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|pos| pos + 4)
}

/// Accept a single connection, record its request and answer with `status` and `body`
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Recorded>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before the request head");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let headers: Vec<(String, String)> = lines
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();

        let content_length = headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before the request body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

        let response = format!(
            "HTTP/1.1 {} Test\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        Recorded {
            method,
            path,
            headers,
            body: request_body,
        }
    });

    (format!("http://{}", addr), handle)
}

fn client(base_url: &str) -> RestClient {
    RestClient::new(&ServerConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
        lists_enabled: true,
    })
    .unwrap()
}

#[tokio::test]
async fn test_get_lists() {
    let (url, server) = serve_once(200, r#"[{"id": 1, "name": "Home", "todo_count": 2}]"#).await;
    let lists = client(&url).get_lists().await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/lists");
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Home");
    assert_eq!(lists[0].todo_count, 2);
}

#[tokio::test]
async fn test_create_list() {
    let (url, server) = serve_once(201, "{}").await;
    client(&url).create_list("Errands").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/lists");
    assert_eq!(request.json(), json!({"name": "Errands"}));
}

#[tokio::test]
async fn test_rename_list() {
    let (url, server) = serve_once(200, "{}").await;
    client(&url).rename_list(3, "House").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/lists/3");
    assert_eq!(request.json(), json!({"name": "House"}));
}

#[tokio::test]
async fn test_delete_list() {
    let (url, server) = serve_once(200, "{}").await;
    client(&url).delete_list(3).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/api/lists/3");
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_get_todos_of_a_list() {
    let (url, server) = serve_once(
        200,
        r#"[{"id": 2, "todo": "b", "position": 1}, {"id": 1, "todo": "a", "position": 0}]"#,
    )
    .await;
    let todos = client(&url).get_todos(Some(4)).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/lists/4/todos");
    let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_get_todos_flat() {
    let (url, server) = serve_once(
        200,
        r#"{"important": [{"id": 5, "todo": "urgent"}], "not_important": []}"#,
    )
    .await;
    let todos = client(&url).get_todos(None).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/todos");
    assert_eq!(todos.len(), 1);
    assert!(todos[0].important);
}

#[tokio::test]
async fn test_create_todo_sends_a_single_content_type() {
    let (url, server) = serve_once(201, "{}").await;
    let new_todo = NewTodo {
        todo: "Buy milk".to_string(),
        todo_extra: "two liters\nsemi-skimmed".to_string(),
        important: true,
        deadline: Some("2030-01-02".to_string()),
        list_id: Some(2),
    };
    client(&url).create_todo(&new_todo).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/todos");
    assert_eq!(request.header_values("content-type"), vec!["application/json"]);
    assert_eq!(
        request.json(),
        json!({
            "todo": "Buy milk",
            "todo_extra": "two liters\nsemi-skimmed",
            "important": true,
            "deadline": "2030-01-02",
            "list_id": 2
        })
    );
}

#[tokio::test]
async fn test_edit_todo() {
    let (url, server) = serve_once(200, "{}").await;
    client(&url).edit_todo(9, "Buy oat milk").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/todos/9");
    assert_eq!(request.header_values("content-type"), vec!["application/json"]);
    assert_eq!(request.json(), json!({"todo": "Buy oat milk"}));
}

#[tokio::test]
async fn test_toggle_importance() {
    let (url, server) = serve_once(200, "{}").await;
    client(&url).toggle_importance(9).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "PATCH");
    assert_eq!(request.path, "/api/todos/9/toggle");
    assert!(request.body.is_empty());
    assert!(request.header_values("content-type").is_empty());
}

#[tokio::test]
async fn test_delete_todo() {
    let (url, server) = serve_once(200, "{}").await;
    client(&url).delete_todo(9).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/api/todos/9");
}

#[tokio::test]
async fn test_reorder_todos() {
    let (url, server) = serve_once(200, "{}").await;
    let reorder = ReorderRequest {
        list_id: Some(4),
        todo_ids: vec![3, 1, 2],
    };
    client(&url).reorder_todos(&reorder).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/todos/reorder");
    assert_eq!(request.header_values("content-type"), vec!["application/json"]);
    assert_eq!(request.json(), json!({"list_id": 4, "todo_ids": [3, 1, 2]}));
}

#[tokio::test]
async fn test_not_found_keeps_server_message() {
    let (url, server) = serve_once(404, r#"{"message":"Todo: 9 not found"}"#).await;
    let result = client(&url).delete_todo(9).await;
    server.await.unwrap();

    match result {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "Todo: 9 not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_without_json_body() {
    let (url, server) = serve_once(404, "").await;
    let result = client(&url).toggle_importance(9).await;
    server.await.unwrap();

    assert!(matches!(result, Err(ApiError::NotFound(message)) if message.is_empty()));
}

#[tokio::test]
async fn test_server_error_keeps_server_message() {
    let (url, server) = serve_once(500, r#"{"message":"database is locked"}"#).await;
    let result = client(&url).create_list("Errands").await;
    server.await.unwrap();

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database is locked");
        }
        other => panic!("expected Status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_with_plain_body() {
    let (url, server) = serve_once(500, "Internal Server Error").await;
    let result = client(&url).get_lists().await;
    server.await.unwrap();

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_a_decode_error() {
    let (url, server) = serve_once(200, "not json").await;
    let result = client(&url).get_todos(Some(1)).await;
    server.await.unwrap();

    assert!(matches!(result, Err(ApiError::Decode(_))));
}
