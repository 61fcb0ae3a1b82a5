use super::*;
use crate::error::{MSG_INVALID_RESPONSE, MSG_NETWORK_ERROR};
use crate::storage::MemoryTokenStore;
use crate::testing::{ROOT, client_with, url};
use portal_shared::protocol::{AttendanceHistoryRequest, MarkReadRequest};
use serde_json::{Value, json};

// =========================================================
// Header 构造
// =========================================================

#[tokio::test]
async fn test_attaches_bearer_token_when_present() {
    let client = client_with(MemoryTokenStore::with_token("tok-123"));
    client
        .transport()
        .mock_response(HttpMethod::Get, &url("/student/classes"), 200, json!({}));

    let _: Value = client.get("/student/classes").await.unwrap();

    let sent = client.transport().requests_to(HttpMethod::Get, &url("/student/classes"));
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header("Authorization"), Some("Bearer tok-123"));
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    assert!(sent[0].body.is_none());
}

#[tokio::test]
async fn test_omits_authorization_without_token() {
    let client = client_with(MemoryTokenStore::new());
    client
        .transport()
        .mock_response(HttpMethod::Get, &url("/student/classes"), 200, json!({}));

    let _: Value = client.get("/student/classes").await.unwrap();

    let sent = client.transport().requests.borrow()[0].clone();
    assert!(sent.header("Authorization").is_none());
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let client = client_with(MemoryTokenStore::with_token("tok"));
    client
        .transport()
        .mock_response(HttpMethod::Get, &url("/ping"), 200, json!({}));

    let _: Value = client
        .request(
            "/ping",
            HttpMethod::Get,
            None,
            &[("authorization", "Bearer other"), ("X-Client", "light")],
        )
        .await
        .unwrap();

    let sent = client.transport().requests.borrow()[0].clone();
    assert_eq!(sent.header("Authorization"), Some("Bearer other"));
    assert_eq!(sent.header("X-Client"), Some("light"));
}

#[tokio::test]
async fn test_post_serializes_json_body() {
    let client = client_with(MemoryTokenStore::new());
    client.transport().mock_response(
        HttpMethod::Post,
        &url("/student/classes/join"),
        200,
        json!({ "success": true }),
    );

    let _: Value = client
        .post("/student/classes/join", &json!({ "code": "ABC123" }))
        .await
        .unwrap();

    let sent = client.transport().requests.borrow()[0].clone();
    assert_eq!(sent.method, HttpMethod::Post);
    assert_eq!(sent.json_body(), Some(json!({ "code": "ABC123" })));
}

#[tokio::test]
async fn test_relative_endpoint_is_joined_with_slash() {
    let client = client_with(MemoryTokenStore::new());
    assert_eq!(client.root(), ROOT);
    client
        .transport()
        .mock_response(HttpMethod::Get, &url("/student/notifications"), 200, json!({}));

    let result: ApiResult<Value> = client.get("student/notifications").await;
    assert!(result.is_ok());
}

// =========================================================
// 失败归一化
// =========================================================

#[tokio::test]
async fn test_non_2xx_uses_error_field() {
    let client = client_with(MemoryTokenStore::new());
    client.transport().mock_response(
        HttpMethod::Get,
        &url("/student/auth/me"),
        401,
        json!({ "success": false, "error": "X" }),
    );

    let err = client.get::<Value>("/student/auth/me").await.unwrap_err();
    assert_eq!(err, ApiError::server(401, "X"));
    assert_eq!(err.user_message(), "X");
}

#[tokio::test]
async fn test_non_2xx_without_error_field_is_generic() {
    let client = client_with(MemoryTokenStore::new());
    client.transport().mock_response(
        HttpMethod::Get,
        &url("/student/classes"),
        500,
        json!({ "message": "boom" }),
    );
    client
        .transport()
        .mock_raw(HttpMethod::Get, &url("/student/attendance"), 502, "<html>Bad Gateway</html>");

    let err = client.get::<Value>("/student/classes").await.unwrap_err();
    assert_eq!(err.user_message(), MSG_REQUEST_FAILED);

    let err = client.get::<Value>("/student/attendance").await.unwrap_err();
    assert_eq!(err, ApiError::server(502, MSG_REQUEST_FAILED));
}

#[tokio::test]
async fn test_transport_failure_never_escapes() {
    let client = client_with(MemoryTokenStore::new());
    client
        .transport()
        .mock_failure(HttpMethod::Get, &url("/student/classes"));

    let err = client.get::<Value>("/student/classes").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message(), MSG_NETWORK_ERROR);
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_malformed_success_body_is_parse_error() {
    let client = client_with(MemoryTokenStore::new());
    client
        .transport()
        .mock_raw(HttpMethod::Get, &url("/student/classes"), 200, "not json");

    let err = client.get::<Value>("/student/classes").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
    assert_eq!(err.user_message(), MSG_INVALID_RESPONSE);
}

// =========================================================
// 强类型请求
// =========================================================

#[tokio::test]
async fn test_call_uses_request_path_and_method() {
    let client = client_with(MemoryTokenStore::with_token("tok"));
    client.transport().mock_response(
        HttpMethod::Put,
        &url("/student/notifications/n1/read"),
        200,
        json!({ "success": true }),
    );
    client.transport().mock_response(
        HttpMethod::Get,
        &url("/student/attendance?page=2&limit=5"),
        200,
        json!({ "success": true, "records": [] }),
    );

    let marked = client
        .call(&MarkReadRequest { id: "n1".into() })
        .await
        .unwrap();
    assert!(marked.success);

    let history = client
        .call(&AttendanceHistoryRequest { page: 2, limit: 5 })
        .await
        .unwrap();
    assert!(history.records.is_empty());

    let puts = client
        .transport()
        .requests_to(HttpMethod::Put, &url("/student/notifications/n1/read"));
    assert_eq!(puts[0].json_body(), Some(json!({})));
}

#[test]
fn test_token_passthrough() {
    let store = MemoryTokenStore::new();
    let client = client_with(store.clone());
    client.set_token("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
    assert_eq!(client.token().as_deref(), Some("abc"));
    client.remove_token();
    assert_eq!(store.get(), None);
}
